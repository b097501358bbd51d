//! Data-quality checks
//!
//! Each check inspects one record and returns issue strings, empty meaning
//! pass. Blocking checks gate the process exit status; advisory checks are
//! reported only.

use crate::models::{FoodAttribute, FoodRecord};

/// Whether findings from a check gate the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Blocking,
    Advisory,
}

/// One data-quality check over a single record
pub struct Check {
    pub name: &'static str,
    pub severity: Severity,
    pub run: fn(file_stem: &str, record: &FoodRecord) -> Vec<String>,
}

/// The macro nutrients every record must carry
pub const MACRO_NUTRIENTS: [&str; 4] = ["calories", "protein", "fat", "carbohydrates"];

/// File stems allowed to report zero calories
pub const ZERO_CALORIE_EXEMPT: [&str; 3] = ["Salt", "Water", "BakingSoda"];

/// All checks, in report order
pub const CHECKS: [Check; 6] = [
    Check {
        name: "attributes",
        severity: Severity::Blocking,
        run: check_attributes,
    },
    Check {
        name: "macros",
        severity: Severity::Blocking,
        run: check_macros,
    },
    Check {
        name: "classification",
        severity: Severity::Blocking,
        run: check_classification,
    },
    Check {
        name: "unitOptions",
        severity: Severity::Advisory,
        run: check_unit_options,
    },
    Check {
        name: "nutrientUnits",
        severity: Severity::Advisory,
        run: check_nutrient_units,
    },
    Check {
        name: "zeroShare",
        severity: Severity::Advisory,
        run: check_zero_share,
    },
];

/// Look up a check's severity by name
pub fn severity_of(check_name: &str) -> Option<Severity> {
    CHECKS
        .iter()
        .find(|check| check.name == check_name)
        .map(|check| check.severity)
}

fn check_attributes(_stem: &str, record: &FoodRecord) -> Vec<String> {
    record
        .attributes
        .iter()
        .filter(|attr| FoodAttribute::from_str(attr).is_none())
        .map(|attr| format!("unknown attribute \"{}\"", attr))
        .collect()
}

fn check_macros(stem: &str, record: &FoodRecord) -> Vec<String> {
    let mut issues = Vec::new();

    for name in MACRO_NUTRIENTS {
        if record.nutrient_amount(name).is_none() {
            issues.push(format!("missing {} entry", name));
        }
    }

    if let Some(calories) = record.nutrient_amount("calories") {
        if calories == 0.0 {
            if !ZERO_CALORIE_EXEMPT.iter().any(|&exempt| exempt == stem) {
                issues.push("zero calories".to_string());
            }
        } else if ["protein", "fat", "carbohydrates"]
            .iter()
            .all(|&name| record.nutrient_amount(name) == Some(0.0))
        {
            issues.push(format!(
                "{} kcal but protein, fat and carbohydrates are all zero",
                calories
            ));
        }
    }

    issues
}

fn check_classification(_stem: &str, record: &FoodRecord) -> Vec<String> {
    if record.group_attributes().is_empty() {
        vec!["no food group attribute".to_string()]
    } else {
        Vec::new()
    }
}

fn check_unit_options(_stem: &str, record: &FoodRecord) -> Vec<String> {
    let options = &record.unit_options;
    if options.is_empty() {
        vec!["no unit options defined".to_string()]
    } else if options.len() == 1 && options[0].unit_abbreviation == "g" {
        vec!["only has gram units".to_string()]
    } else {
        Vec::new()
    }
}

fn check_nutrient_units(_stem: &str, record: &FoodRecord) -> Vec<String> {
    record
        .nutrients
        .iter()
        .filter(|nutrient| nutrient.unit.is_empty() && nutrient.amount_per100g != 0.0)
        .map(|nutrient| {
            format!(
                "{} has value {} but no unit",
                nutrient.name, nutrient.amount_per100g
            )
        })
        .collect()
}

fn check_zero_share(_stem: &str, record: &FoodRecord) -> Vec<String> {
    if record.nutrients.is_empty() {
        return Vec::new();
    }
    let zeros = record
        .nutrients
        .iter()
        .filter(|nutrient| nutrient.amount_per100g == 0.0)
        .count();
    let share = zeros as f64 / record.nutrients.len() as f64 * 100.0;
    if share > 70.0 {
        vec![format!(
            "{} of {} nutrient amounts are zero ({:.1}%)",
            zeros,
            record.nutrients.len(),
            share
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Nutrient, UnitOption};

    fn record_with_macros(name: &str, calories: f64, protein: f64, fat: f64, carbs: f64) -> FoodRecord {
        let mut record = FoodRecord::new(name);
        record.nutrients = vec![
            Nutrient::new("calories", "kcal", calories),
            Nutrient::new("protein", "g", protein),
            Nutrient::new("fat", "g", fat),
            Nutrient::new("carbohydrates", "g", carbs),
        ];
        record
    }

    #[test]
    fn test_attributes_check_reports_unknown_strings() {
        let mut record = FoodRecord::new("Almond butter");
        record.attributes = vec![
            "vegan".to_string(),
            "imported".to_string(),
            "protein".to_string(),
        ];
        assert_eq!(
            check_attributes("AlmondButter", &record),
            vec!["unknown attribute \"imported\"".to_string()]
        );
    }

    #[test]
    fn test_zero_calories_exemption_is_per_file_stem() {
        let salt = record_with_macros("Salt", 0.0, 0.0, 0.0, 0.0);
        assert!(check_macros("Salt", &salt).is_empty());

        let chicken = record_with_macros("Chicken breast", 0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            check_macros("ChickenBreast", &chicken),
            vec!["zero calories".to_string()]
        );
    }

    #[test]
    fn test_macros_consistency_failure() {
        let record = record_with_macros("Mystery", 120.0, 0.0, 0.0, 0.0);
        let issues = check_macros("Mystery", &record);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("all zero"));
    }

    #[test]
    fn test_missing_macro_entries_are_each_reported() {
        let mut record = FoodRecord::new("Water");
        record.nutrients = vec![Nutrient::new("calories", "kcal", 0.0)];
        let issues = check_macros("Water", &record);
        assert_eq!(
            issues,
            vec![
                "missing protein entry".to_string(),
                "missing fat entry".to_string(),
                "missing carbohydrates entry".to_string(),
            ]
        );
    }

    #[test]
    fn test_classification_requires_a_group() {
        let mut record = FoodRecord::new("Salt");
        record.attributes = vec!["vegan".to_string()];
        assert_eq!(
            check_classification("Salt", &record),
            vec!["no food group attribute".to_string()]
        );

        record.attributes.push("vegetables".to_string());
        assert!(check_classification("Salt", &record).is_empty());
    }

    #[test]
    fn test_unit_options_advisories() {
        let mut record = FoodRecord::new("Salt");
        assert_eq!(
            check_unit_options("Salt", &record),
            vec!["no unit options defined".to_string()]
        );

        record.unit_options = vec![UnitOption::gram_baseline()];
        assert_eq!(
            check_unit_options("Salt", &record),
            vec!["only has gram units".to_string()]
        );

        record.unit_options.push(UnitOption {
            unit_full_name: "teaspoon".to_string(),
            unit_abbreviation: "tsp".to_string(),
            portion_in_grams: 6.0,
        });
        assert!(check_unit_options("Salt", &record).is_empty());
    }

    #[test]
    fn test_nutrient_units_flags_value_without_unit() {
        let mut record = FoodRecord::new("Oats");
        record.nutrients = vec![
            Nutrient::new("iron", "", 4.7),
            Nutrient::new("zinc", "", 0.0),
            Nutrient::new("fiber", "g", 10.0),
        ];
        let issues = check_nutrient_units("Oats", &record);
        assert_eq!(issues, vec!["iron has value 4.7 but no unit".to_string()]);
    }

    #[test]
    fn test_zero_share_threshold_is_strict() {
        let mut record = FoodRecord::new("Spice");
        record.nutrients = (0..10)
            .map(|i| Nutrient::new(format!("n{}", i), "mg", if i < 7 { 0.0 } else { 1.0 }))
            .collect();
        // exactly 70% passes
        assert!(check_zero_share("Spice", &record).is_empty());

        record.nutrients[7].amount_per100g = 0.0;
        let issues = check_zero_share("Spice", &record);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("8 of 10"));
    }

    #[test]
    fn test_severity_lookup() {
        assert_eq!(severity_of("attributes"), Some(Severity::Blocking));
        assert_eq!(severity_of("zeroShare"), Some(Severity::Advisory));
        assert_eq!(severity_of("bogus"), None);
    }
}
