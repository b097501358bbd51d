//! Import tools
//!
//! Place a fetched record into the store with freshly computed attributes.

use serde::Serialize;
use tracing::info;

use crate::classify::{classify_record, ClassifyScope};
use crate::models::FoodRecord;
use crate::store::{file_name_of, FoodStore, StoreResult};

/// Response for import_food
#[derive(Debug, Serialize)]
pub struct ImportFoodResponse {
    pub file: String,
    pub name: String,
    pub attributes: Vec<String>,
}

/// Classify a fetched record and create its file, refusing collisions
pub fn import_record(store: &FoodStore, mut record: FoodRecord) -> StoreResult<ImportFoodResponse> {
    record.attributes = classify_record(&record, ClassifyScope::Full);
    let path = store.create(&record)?;
    info!("imported {} as {}", record.name, path.display());

    Ok(ImportFoodResponse {
        file: file_name_of(&path),
        name: record.name,
        attributes: record.attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use tempfile::tempdir;

    #[test]
    fn test_import_classifies_and_refuses_collisions() {
        let dir = tempdir().unwrap();
        let store = FoodStore::new(dir.path());

        let response = import_record(&store, FoodRecord::new("Almond butter")).unwrap();
        assert_eq!(response.file, "AlmondButter.json");
        assert!(response.attributes.contains(&"vegan".to_string()));
        assert!(response.attributes.contains(&"protein".to_string()));
        assert!(!response.attributes.contains(&"nutFree".to_string()));

        let collision = import_record(&store, FoodRecord::new("Almond butter"));
        assert!(matches!(collision, Err(StoreError::AlreadyExists { .. })));
    }
}
