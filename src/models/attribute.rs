//! Food attribute vocabulary
//!
//! Canonical dietary-restriction and MyPlate food-group labels.

use serde::{Deserialize, Serialize};

/// A canonical label carried in a food record's `attributes` array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FoodAttribute {
    // Dietary restrictions
    Vegetarian,
    Vegan,
    GlutenFree,
    LactoseIntolerant,
    NutFree,
    SoyFree,
    EggFree,
    Halal,
    Kosher,
    // MyPlate food groups
    Vegetables,
    Fruits,
    Grains,
    Protein,
    Dairy,
    FatsAndOils,
}

/// Dietary restriction labels, in classification output order
pub const DIETARY_ATTRIBUTES: [FoodAttribute; 9] = [
    FoodAttribute::Vegetarian,
    FoodAttribute::Vegan,
    FoodAttribute::GlutenFree,
    FoodAttribute::LactoseIntolerant,
    FoodAttribute::NutFree,
    FoodAttribute::SoyFree,
    FoodAttribute::EggFree,
    FoodAttribute::Halal,
    FoodAttribute::Kosher,
];

/// Food group labels, in classification output order
pub const GROUP_ATTRIBUTES: [FoodAttribute; 6] = [
    FoodAttribute::Vegetables,
    FoodAttribute::Fruits,
    FoodAttribute::Grains,
    FoodAttribute::Protein,
    FoodAttribute::Dairy,
    FoodAttribute::FatsAndOils,
];

impl FoodAttribute {
    /// The exact string stored in food JSON files
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodAttribute::Vegetarian => "vegetarian",
            FoodAttribute::Vegan => "vegan",
            FoodAttribute::GlutenFree => "glutenFree",
            FoodAttribute::LactoseIntolerant => "lactoseIntolerant",
            FoodAttribute::NutFree => "nutFree",
            FoodAttribute::SoyFree => "soyFree",
            FoodAttribute::EggFree => "eggFree",
            FoodAttribute::Halal => "halal",
            FoodAttribute::Kosher => "kosher",
            FoodAttribute::Vegetables => "vegetables",
            FoodAttribute::Fruits => "fruits",
            FoodAttribute::Grains => "grains",
            FoodAttribute::Protein => "protein",
            FoodAttribute::Dairy => "dairy",
            FoodAttribute::FatsAndOils => "fatsAndOils",
        }
    }

    /// Parse a canonical attribute string; unknown strings are not attributes
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "vegetarian" => Some(FoodAttribute::Vegetarian),
            "vegan" => Some(FoodAttribute::Vegan),
            "glutenFree" => Some(FoodAttribute::GlutenFree),
            "lactoseIntolerant" => Some(FoodAttribute::LactoseIntolerant),
            "nutFree" => Some(FoodAttribute::NutFree),
            "soyFree" => Some(FoodAttribute::SoyFree),
            "eggFree" => Some(FoodAttribute::EggFree),
            "halal" => Some(FoodAttribute::Halal),
            "kosher" => Some(FoodAttribute::Kosher),
            "vegetables" => Some(FoodAttribute::Vegetables),
            "fruits" => Some(FoodAttribute::Fruits),
            "grains" => Some(FoodAttribute::Grains),
            "protein" => Some(FoodAttribute::Protein),
            "dairy" => Some(FoodAttribute::Dairy),
            "fatsAndOils" => Some(FoodAttribute::FatsAndOils),
            _ => None,
        }
    }

    /// True for the MyPlate food-group labels
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            FoodAttribute::Vegetables
                | FoodAttribute::Fruits
                | FoodAttribute::Grains
                | FoodAttribute::Protein
                | FoodAttribute::Dairy
                | FoodAttribute::FatsAndOils
        )
    }

    /// True for the dietary restriction labels
    pub fn is_dietary(&self) -> bool {
        !self.is_group()
    }
}
