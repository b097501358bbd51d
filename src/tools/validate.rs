//! Validation tools
//!
//! Run the full check table over the food store and collect findings.

use crate::store::{file_name_of, stem_of, FoodStore, StoreResult};
use crate::validate::{Finding, ValidationReport, CHECKS};

/// Validate every stored food and group the findings by check
pub fn validate_foods(store: &FoodStore) -> StoreResult<ValidationReport> {
    let loaded = store.load_all()?;
    let mut report = ValidationReport::new(loaded.records.len(), loaded.skipped);

    for (path, record) in &loaded.records {
        let file = file_name_of(path);
        let stem = stem_of(path);
        for check in &CHECKS {
            for detail in (check.run)(&stem, record) {
                report.add(
                    check.name,
                    Finding {
                        file: file.clone(),
                        name: record.name.clone(),
                        detail,
                    },
                );
            }
        }
    }

    Ok(report)
}
