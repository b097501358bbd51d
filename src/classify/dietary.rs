//! Dietary restriction classifier
//!
//! Derives dietary-suitability labels from a food name by substring matching
//! against the rule tables, then applies the special-case overrides.

use crate::models::{FoodAttribute, DIETARY_ATTRIBUTES};

use super::rules::{DietaryRule, DIETARY_RULES, SPECIAL_CASES};

/// Check whether a rule disqualifies the food from the rule's label.
///
/// Matching is unanchored, case-insensitive substring containment. A keyword
/// exception suppresses only its own keyword, and only when the whole trimmed
/// name equals one of the exempt names.
pub fn rule_excludes(food_name: &str, rule: &DietaryRule) -> bool {
    let lower = food_name.to_lowercase();
    let name = lower.trim();

    for excluded in rule.exclude_names {
        if name.contains(excluded) {
            return true;
        }
    }

    for keyword in rule.exclude_keywords {
        if name.contains(keyword) {
            return true;
        }
    }

    for exception in rule.keyword_exceptions {
        if name.contains(exception.keyword)
            && !exception.exempt_names.iter().any(|&exempt| exempt == name)
        {
            return true;
        }
    }

    false
}

/// Dietary labels the food qualifies for, in table order.
///
/// A food qualifies for a label iff it violates none of that rule's checks.
/// Special cases matching the trimmed name then add and remove labels.
/// Empty or whitespace-only names yield no labels.
pub fn classify_dietary(food_name: &str) -> Vec<FoodAttribute> {
    let lower = food_name.to_lowercase();
    let name = lower.trim();
    if name.is_empty() {
        return Vec::new();
    }

    let mut labels: Vec<FoodAttribute> = DIETARY_RULES
        .iter()
        .filter(|rule| !rule_excludes(food_name, rule))
        .map(|rule| rule.label)
        .collect();

    for case in SPECIAL_CASES.iter().filter(|case| case.name == name) {
        for attr in case.add {
            if !labels.contains(attr) {
                labels.push(*attr);
            }
        }
        labels.retain(|label| !case.remove.contains(label));
    }

    // Emit in table order regardless of how the overrides landed
    DIETARY_ATTRIBUTES
        .iter()
        .copied()
        .filter(|attr| labels.contains(attr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(name: &str) -> Vec<&'static str> {
        classify_dietary(name).iter().map(|a| a.as_str()).collect()
    }

    #[test]
    fn test_almond_butter_keeps_vegan_and_lactose() {
        let attrs = classify_dietary("Almond butter");
        assert!(attrs.contains(&FoodAttribute::Vegan));
        assert!(attrs.contains(&FoodAttribute::LactoseIntolerant));
        assert!(!attrs.contains(&FoodAttribute::NutFree));
    }

    #[test]
    fn test_plain_butter_loses_vegan_and_lactose() {
        let attrs = classify_dietary("Butter");
        assert!(!attrs.contains(&FoodAttribute::Vegan));
        assert!(!attrs.contains(&FoodAttribute::LactoseIntolerant));
        assert!(attrs.contains(&FoodAttribute::Vegetarian));
        assert!(attrs.contains(&FoodAttribute::NutFree));
    }

    #[test]
    fn test_coconut_milk_exempted_from_milk_keyword() {
        let attrs = classify_dietary("Coconut milk");
        assert!(attrs.contains(&FoodAttribute::Vegan));
        assert!(attrs.contains(&FoodAttribute::LactoseIntolerant));
        // "nut" inside "coconut" still flags it, conservatively
        assert!(!attrs.contains(&FoodAttribute::NutFree));
    }

    #[test]
    fn test_exception_suppresses_only_its_own_keyword() {
        let vegan = &DIETARY_RULES[1];
        let nut_free = &DIETARY_RULES[4];
        assert_eq!(vegan.label, FoodAttribute::Vegan);
        assert_eq!(nut_free.label, FoodAttribute::NutFree);
        assert!(!rule_excludes("almond butter", vegan));
        assert!(rule_excludes("almond butter", nut_free));
    }

    #[test]
    fn test_exemption_requires_whole_name_match() {
        let vegan = &DIETARY_RULES[1];
        assert!(rule_excludes("almond butter cookie", vegan));
        assert!(rule_excludes("salted butter", vegan));
    }

    #[test]
    fn test_raw_pork_belly() {
        assert_eq!(
            labels("Raw pork belly"),
            vec![
                "glutenFree",
                "lactoseIntolerant",
                "nutFree",
                "soyFree",
                "eggFree",
            ]
        );
    }

    #[test]
    fn test_graham_crackers_not_flagged_as_ham() {
        let attrs = classify_dietary("Graham crackers");
        assert!(attrs.contains(&FoodAttribute::Vegetarian));
        assert!(attrs.contains(&FoodAttribute::Halal));
        assert!(attrs.contains(&FoodAttribute::Kosher));
        // still wheat-based
        assert!(!attrs.contains(&FoodAttribute::GlutenFree));
    }

    #[test]
    fn test_ham_is_excluded_from_meat_sensitive_labels() {
        let attrs = classify_dietary("Ham");
        assert!(!attrs.contains(&FoodAttribute::Vegetarian));
        assert!(!attrs.contains(&FoodAttribute::Vegan));
        assert!(!attrs.contains(&FoodAttribute::Halal));
        assert!(!attrs.contains(&FoodAttribute::Kosher));
    }

    #[test]
    fn test_eggplant_is_egg_free() {
        let attrs = classify_dietary("Raw eggplant");
        assert!(attrs.contains(&FoodAttribute::EggFree));
        assert!(attrs.contains(&FoodAttribute::Vegan));
    }

    #[test]
    fn test_scrambled_eggs_are_not() {
        let attrs = classify_dietary("Scrambled eggs");
        assert!(!attrs.contains(&FoodAttribute::EggFree));
        assert!(!attrs.contains(&FoodAttribute::Vegan));
        assert!(attrs.contains(&FoodAttribute::Vegetarian));
    }

    #[test]
    fn test_special_case_restores_nut_free() {
        let attrs = classify_dietary("Water chestnut");
        assert!(attrs.contains(&FoodAttribute::NutFree));

        let attrs = classify_dietary("Butternut squash");
        assert!(attrs.contains(&FoodAttribute::NutFree));
        assert!(attrs.contains(&FoodAttribute::Vegan));
    }

    #[test]
    fn test_special_case_removals() {
        let attrs = classify_dietary("Gelatin");
        assert!(!attrs.contains(&FoodAttribute::Vegetarian));
        assert!(!attrs.contains(&FoodAttribute::Vegan));

        let attrs = classify_dietary("Oyster sauce");
        assert!(!attrs.contains(&FoodAttribute::Vegetarian));
        assert!(!attrs.contains(&FoodAttribute::Vegan));
        assert!(!attrs.contains(&FoodAttribute::Kosher));
        assert!(attrs.contains(&FoodAttribute::Halal));

        let attrs = classify_dietary("Dashi");
        assert!(!attrs.contains(&FoodAttribute::Vegan));
    }

    #[test]
    fn test_nutmeg_exempted_from_nut_keyword() {
        let attrs = classify_dietary("Nutmeg");
        assert!(attrs.contains(&FoodAttribute::NutFree));
    }

    #[test]
    fn test_empty_name_yields_no_labels() {
        assert!(classify_dietary("").is_empty());
        assert!(classify_dietary("   ").is_empty());
    }

    #[test]
    fn test_output_is_in_table_order() {
        assert_eq!(
            labels("Olive oil"),
            vec![
                "vegetarian",
                "vegan",
                "glutenFree",
                "lactoseIntolerant",
                "nutFree",
                "soyFree",
                "eggFree",
                "halal",
                "kosher",
            ]
        );
    }
}
