//! Attribute merge
//!
//! Combines freshly computed labels with a record's stored attributes.
//! Canonical labels in the run's scope are wholly replaced; everything else
//! passes through with its relative order intact.

use crate::models::{FoodAttribute, FoodRecord};

use super::dietary::classify_dietary;
use super::groups::classify_groups;

/// Which canonical labels a classification run replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyScope {
    Dietary,
    Groups,
    Full,
}

impl ClassifyScope {
    fn replaces(&self, attr: FoodAttribute) -> bool {
        match self {
            ClassifyScope::Dietary => attr.is_dietary(),
            ClassifyScope::Groups => attr.is_group(),
            ClassifyScope::Full => true,
        }
    }
}

/// Merge fresh labels into a stored attribute list.
///
/// The output starts with the fresh labels in classification order, followed
/// by every stored attribute the scope does not replace: non-vocabulary
/// strings always survive, and vocabulary labels outside the scope (group
/// labels on a dietary-only run, and vice versa) are kept where they were
/// relative to each other.
pub fn merge_attributes(
    existing: &[String],
    fresh: &[FoodAttribute],
    scope: ClassifyScope,
) -> Vec<String> {
    let mut merged: Vec<String> = fresh.iter().map(|attr| attr.as_str().to_string()).collect();

    for attr in existing {
        let replaced = FoodAttribute::from_str(attr)
            .map(|known| scope.replaces(known))
            .unwrap_or(false);
        if !replaced && !merged.contains(attr) {
            merged.push(attr.clone());
        }
    }

    merged
}

/// Compute the attribute list a record should carry after classification.
///
/// Pure: the record is not modified. Applying the result and running again
/// yields the same list.
pub fn classify_record(record: &FoodRecord, scope: ClassifyScope) -> Vec<String> {
    let mut fresh: Vec<FoodAttribute> = Vec::new();
    if scope != ClassifyScope::Groups {
        fresh.extend(classify_dietary(&record.name));
    }
    if scope != ClassifyScope::Dietary {
        fresh.extend(classify_groups(&record.name, &record.attributes));
    }
    merge_attributes(&record.attributes, &fresh, scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, attributes: &[&str]) -> FoodRecord {
        let mut record = FoodRecord::new(name);
        record.attributes = attributes.iter().map(|a| a.to_string()).collect();
        record
    }

    #[test]
    fn test_non_vocabulary_attributes_pass_through() {
        let record = record("Almond butter", &["imported", "vegan", "favorite"]);
        let merged = classify_record(&record, ClassifyScope::Full);
        let imported = merged.iter().position(|a| a == "imported");
        let favorite = merged.iter().position(|a| a == "favorite");
        assert!(imported.is_some() && favorite.is_some());
        assert!(imported < favorite);
    }

    #[test]
    fn test_full_scope_replaces_stale_labels() {
        // a stale vegan label on butter is dropped by the fresh set
        let record = record("Butter", &["vegan", "imported"]);
        let merged = classify_record(&record, ClassifyScope::Full);
        assert!(!merged.contains(&"vegan".to_string()));
        assert!(merged.contains(&"imported".to_string()));
        assert!(merged.contains(&"vegetarian".to_string()));
        assert!(merged.contains(&"fatsAndOils".to_string()));
    }

    #[test]
    fn test_dietary_scope_leaves_group_labels_alone() {
        let record = record("Butter", &["dairy", "imported"]);
        let merged = classify_record(&record, ClassifyScope::Dietary);
        assert!(merged.contains(&"dairy".to_string()));
        assert!(merged.contains(&"imported".to_string()));
        assert!(!merged.contains(&"fatsAndOils".to_string()));
    }

    #[test]
    fn test_groups_scope_leaves_dietary_labels_alone() {
        // the stored (wrong) vegan label survives a groups-only run
        let record = record("Butter", &["vegan"]);
        let merged = classify_record(&record, ClassifyScope::Groups);
        assert!(merged.contains(&"vegan".to_string()));
        assert!(merged.contains(&"fatsAndOils".to_string()));
    }

    #[test]
    fn test_group_short_circuit_survives_merge() {
        let record = record("Chicken and rice", &["vegetables"]);
        let merged = classify_record(&record, ClassifyScope::Full);
        assert!(merged.contains(&"vegetables".to_string()));
        assert!(!merged.contains(&"protein".to_string()));
        assert!(!merged.contains(&"grains".to_string()));
    }

    #[test]
    fn test_classification_is_idempotent() {
        for name in [
            "Almond butter",
            "Butter",
            "Coconut milk",
            "Raw pork belly",
            "Chicken and rice",
            "Water chestnut",
            "Graham crackers",
        ] {
            let mut first = record(name, &["imported"]);
            first.attributes = classify_record(&first, ClassifyScope::Full);
            let second = classify_record(&first, ClassifyScope::Full);
            assert_eq!(first.attributes, second, "not idempotent for {name}");
        }
    }

    #[test]
    fn test_empty_name_keeps_passthrough_only() {
        let record = record("  ", &["imported", "vegan"]);
        let merged = classify_record(&record, ClassifyScope::Full);
        assert_eq!(merged, vec!["imported".to_string()]);
    }
}
