//! Food record model
//!
//! One food as stored in its flat JSON file under the foods directory.

use serde::{Deserialize, Serialize};

use super::FoodAttribute;

/// A nutrient measurement, normalized per 100 g of the food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    pub name: String,
    pub unit: String,
    pub amount_per100g: f64,
}

impl Nutrient {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, amount_per100g: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            amount_per100g,
        }
    }
}

/// A measurement unit the food can be logged in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitOption {
    pub unit_full_name: String,
    pub unit_abbreviation: String,
    pub portion_in_grams: f64,
}

impl UnitOption {
    /// The 1-gram baseline every record carries so other units can be derived
    pub fn gram_baseline() -> Self {
        Self {
            unit_full_name: "gram".to_string(),
            unit_abbreviation: "g".to_string(),
            portion_in_grams: 1.0,
        }
    }

    pub fn is_gram_baseline(&self) -> bool {
        self.unit_full_name == "gram" && self.portion_in_grams == 1.0
    }
}

/// A food record as stored in its JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub name: String,
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
    #[serde(default)]
    pub unit_options: Vec<UnitOption>,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    /// Fields the tools do not interpret, preserved across rewrites
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FoodRecord {
    /// Create an empty record with just a display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nutrients: Vec::new(),
            unit_options: Vec::new(),
            attributes: Vec::new(),
            annotations: Vec::new(),
            sources: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// True if the attributes array carries this canonical label
    pub fn has_attribute(&self, attr: FoodAttribute) -> bool {
        self.attributes.iter().any(|a| a == attr.as_str())
    }

    /// The canonical food-group labels currently on the record, in stored order
    pub fn group_attributes(&self) -> Vec<FoodAttribute> {
        self.attributes
            .iter()
            .filter_map(|a| FoodAttribute::from_str(a))
            .filter(FoodAttribute::is_group)
            .collect()
    }

    /// Look up a nutrient amount by exact canonical name
    pub fn nutrient_amount(&self, name: &str) -> Option<f64> {
        self.nutrients
            .iter()
            .find(|n| n.name == name)
            .map(|n| n.amount_per100g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trip_preserves_unknown_fields() {
        let json = r#"{
            "name": "Almond butter",
            "attributes": ["vegan", "imported"],
            "servingHint": "2 tbsp",
            "nutrients": [{"name": "calories", "unit": "kcal", "amountPer100g": 614.0}]
        }"#;
        let record: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Almond butter");
        assert_eq!(record.nutrient_amount("calories"), Some(614.0));
        assert!(record.has_attribute(FoodAttribute::Vegan));

        let out = serde_json::to_string(&record).unwrap();
        let back: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(back["servingHint"], "2 tbsp");
        assert_eq!(back["unitOptions"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_arrays_default_empty() {
        let record: FoodRecord = serde_json::from_str(r#"{"name": "Salt"}"#).unwrap();
        assert!(record.nutrients.is_empty());
        assert!(record.unit_options.is_empty());
        assert!(record.attributes.is_empty());
        assert!(record.annotations.is_empty());
        assert!(record.sources.is_empty());
    }

    #[test]
    fn test_group_attributes_keeps_stored_order() {
        let mut record = FoodRecord::new("Cheddar cheese");
        record.attributes = vec![
            "dairy".to_string(),
            "imported".to_string(),
            "protein".to_string(),
            "glutenFree".to_string(),
        ];
        assert_eq!(
            record.group_attributes(),
            vec![FoodAttribute::Dairy, FoodAttribute::Protein]
        );
    }

    #[test]
    fn test_gram_baseline() {
        let baseline = UnitOption::gram_baseline();
        assert!(baseline.is_gram_baseline());
        let cup = UnitOption {
            unit_full_name: "cup".to_string(),
            unit_abbreviation: "c".to_string(),
            portion_in_grams: 240.0,
        };
        assert!(!cup.is_gram_baseline());
    }
}
