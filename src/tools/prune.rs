//! Unit pruning tools
//!
//! Drop cup unit options whose gram portion was never filled in.

use serde::Serialize;

use crate::store::{file_name_of, FoodStore, StoreResult};

/// Abbreviations cup portions were recorded under
const CUP_ABBREVIATIONS: [&str; 2] = ["cup", "c"];

/// One record that would lose unit options
#[derive(Debug, Serialize)]
pub struct PrunedFood {
    pub file: String,
    pub name: String,
    pub removed: usize,
}

/// Response for prune_units
#[derive(Debug, Serialize)]
pub struct PruneUnitsResponse {
    pub total: usize,
    pub skipped: usize,
    pub pruned: Vec<PrunedFood>,
    pub applied: bool,
}

/// Remove cup unit options with a zero gram portion, writing back when `apply` is set
pub fn prune_units(store: &FoodStore, apply: bool) -> StoreResult<PruneUnitsResponse> {
    let loaded = store.load_all()?;
    let total = loaded.records.len();
    let mut pruned = Vec::new();

    for (path, mut record) in loaded.records {
        let before = record.unit_options.len();
        record.unit_options.retain(|unit| {
            !(CUP_ABBREVIATIONS
                .iter()
                .any(|&abbr| abbr == unit.unit_abbreviation)
                && unit.portion_in_grams == 0.0)
        });
        let removed = before - record.unit_options.len();
        if removed == 0 {
            continue;
        }
        if apply {
            store.save(&path, &record)?;
        }
        pruned.push(PrunedFood {
            file: file_name_of(&path),
            name: record.name.clone(),
            removed,
        });
    }

    Ok(PruneUnitsResponse {
        total,
        skipped: loaded.skipped,
        pruned,
        applied: apply,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodRecord, UnitOption};
    use tempfile::tempdir;

    #[test]
    fn test_only_zero_gram_cups_are_removed() {
        let dir = tempdir().unwrap();
        let store = FoodStore::new(dir.path());

        let mut record = FoodRecord::new("Shredded carrots");
        record.unit_options = vec![
            UnitOption::gram_baseline(),
            UnitOption {
                unit_full_name: "cup".to_string(),
                unit_abbreviation: "cup".to_string(),
                portion_in_grams: 0.0,
            },
            UnitOption {
                unit_full_name: "cup".to_string(),
                unit_abbreviation: "c".to_string(),
                portion_in_grams: 110.0,
            },
        ];
        store.create(&record).unwrap();

        let dry = prune_units(&store, false).unwrap();
        assert_eq!(dry.pruned.len(), 1);
        assert_eq!(dry.pruned[0].removed, 1);
        let on_disk = store.load(&store.path_for("Shredded carrots")).unwrap();
        assert_eq!(on_disk.unit_options.len(), 3);

        let applied = prune_units(&store, true).unwrap();
        assert_eq!(applied.pruned.len(), 1);
        let on_disk = store.load(&store.path_for("Shredded carrots")).unwrap();
        assert_eq!(on_disk.unit_options.len(), 2);
        assert_eq!(on_disk.unit_options[1].portion_in_grams, 110.0);
    }
}
