//! Record normalization
//!
//! Converts raw FoodData Central detail responses into the flat-file
//! record format.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::models::{FoodRecord, Nutrient, UnitOption};

use super::client::FdcFood;

/// FoodData Central nutrient IDs mapped to canonical names and units,
/// in record emission order
pub const NUTRIENT_TABLE: [(u64, &str, &str); 32] = [
    (1008, "calories", "kcal"),
    (1003, "protein", "g"),
    (1004, "fat", "g"),
    (1005, "carbohydrates", "g"),
    (1079, "fiber", "g"),
    (2000, "sugar", "g"),
    (1087, "calcium", "mg"),
    (1089, "iron", "mg"),
    (1090, "magnesium", "mg"),
    (1091, "phosphorus", "mg"),
    (1092, "potassium", "mg"),
    (1093, "sodium", "mg"),
    (1095, "zinc", "mg"),
    (1098, "copper", "µg"),
    (1103, "selenium", "µg"),
    (1099, "fluoride", "mg"),
    (1162, "vitaminC", "mg"),
    (1165, "thiamin", "mg"),
    (1166, "riboflavin", "mg"),
    (1167, "niacin", "mg"),
    (1170, "pantothenicAcid", "mg"),
    (1175, "vitaminB6", "mg"),
    (1177, "folate", "µg"),
    (1180, "choline", "mg"),
    (1178, "vitaminB12", "µg"),
    (1106, "vitaminA", "µg"),
    (1109, "vitaminE", "mg"),
    (1114, "vitaminD", "µg"),
    (1185, "vitaminK", "µg"),
    (1258, "saturatedFat", "g"),
    (1257, "transFat", "g"),
    (1404, "alphaLinolenicAcid", "g"),
];

/// Build a flat-file record from a detail response.
///
/// Nutrients are emitted in table order with zero placeholders for anything
/// the response lacks; kilojoule energy entries are dropped, not converted.
/// Unit options start with the 1-gram baseline other units derive from.
pub fn normalize(detail: &FdcFood, display_name: &str) -> FoodRecord {
    let mut record = FoodRecord::new(display_name);

    let mut amounts: HashMap<&str, f64> = HashMap::new();
    for raw in &detail.food_nutrients {
        let nutrient = match &raw.nutrient {
            Some(nutrient) => nutrient,
            None => continue,
        };
        if nutrient.unit_name == "kJ" {
            continue;
        }
        if let Some(&(_, name, _)) = NUTRIENT_TABLE.iter().find(|entry| entry.0 == nutrient.id) {
            amounts.insert(name, raw.amount.unwrap_or(0.0));
        }
    }

    for &(_, name, unit) in &NUTRIENT_TABLE {
        match amounts.get(name) {
            Some(&amount) => record.nutrients.push(Nutrient::new(name, unit, amount)),
            None => {
                let unit = if name == "calories" { "kcal" } else { "" };
                record.nutrients.push(Nutrient::new(name, unit, 0.0));
            }
        }
    }

    record.unit_options.push(UnitOption::gram_baseline());
    for portion in &detail.food_portions {
        let grams = match portion.gram_weight {
            Some(grams) => grams,
            None => continue,
        };
        // Foundation and SR Legacy put the unit in different places
        let (full_name, abbreviation) = if detail.data_type == "Foundation" {
            match &portion.measure_unit {
                Some(unit) => (unit.name.clone(), unit.abbreviation.clone()),
                None => (String::new(), String::new()),
            }
        } else {
            (portion.modifier.clone().unwrap_or_default(), String::new())
        };
        record.unit_options.push(UnitOption {
            unit_full_name: full_name,
            unit_abbreviation: abbreviation,
            portion_in_grams: grams,
        });
    }

    match detail.data_type.as_str() {
        "Foundation" => record.annotations.push("foundation".to_string()),
        "SR Legacy" => record.annotations.push("srLegacy".to_string()),
        _ => {}
    }

    record.sources.push(citation(
        display_name,
        &detail.data_type,
        detail.fdc_id,
        Local::now().date_naive(),
    ));

    record
}

/// The provenance string recorded for each fetched food
pub fn citation(display_name: &str, data_type: &str, fdc_id: u64, date: NaiveDate) -> String {
    let source = match data_type {
        "Foundation" => "Foundation Foods",
        "SR Legacy" => "SR Legacy",
        _ => "unspecified",
    };
    format!(
        "U.S. Department of Agriculture, Agricultural Research Service. ({}). {} via {}. \
         USDA FoodData Central. https://api.nal.usda.gov/fdc/v1/food/{}",
        date.format("%Y-%m-%d"),
        display_name,
        source,
        fdc_id
    )
}
