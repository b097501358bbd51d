//! Classification tools
//!
//! Batch attribute classification over the food store, plus a group-coverage
//! analysis of what is already on disk.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::classify::{classify_record, ClassifyScope};
use crate::models::GROUP_ATTRIBUTES;
use crate::store::{file_name_of, FoodStore, StoreResult};

/// One record whose attributes differ from a fresh classification
#[derive(Debug, Serialize)]
pub struct ClassifyChange {
    pub file: String,
    pub name: String,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Response for classify_foods
#[derive(Debug, Serialize)]
pub struct ClassifyFoodsResponse {
    pub total: usize,
    pub skipped: usize,
    pub changes: Vec<ClassifyChange>,
    pub applied: bool,
}

/// Response for analyze_groups
#[derive(Debug, Serialize)]
pub struct AnalyzeGroupsResponse {
    pub total: usize,
    pub skipped: usize,
    pub group_counts: BTreeMap<String, usize>,
    pub unclassified: Vec<String>,
}

/// Classify every stored food, writing updates back only when `apply` is set
pub fn classify_foods(
    store: &FoodStore,
    scope: ClassifyScope,
    apply: bool,
) -> StoreResult<ClassifyFoodsResponse> {
    let loaded = store.load_all()?;
    let total = loaded.records.len();
    let mut changes = Vec::new();

    for (path, mut record) in loaded.records {
        let after = classify_record(&record, scope);
        if after == record.attributes {
            continue;
        }
        changes.push(ClassifyChange {
            file: file_name_of(&path),
            name: record.name.clone(),
            before: record.attributes.clone(),
            after: after.clone(),
        });
        if apply {
            record.attributes = after;
            store.save(&path, &record)?;
        }
    }

    if apply {
        info!("classified {} foods, rewrote {}", total, changes.len());
    }

    Ok(ClassifyFoodsResponse {
        total,
        skipped: loaded.skipped,
        changes,
        applied: apply,
    })
}

/// Count stored foods per food group and list the ones carrying no group
pub fn analyze_groups(store: &FoodStore) -> StoreResult<AnalyzeGroupsResponse> {
    let loaded = store.load_all()?;
    let mut group_counts: BTreeMap<String, usize> = BTreeMap::new();
    for group in GROUP_ATTRIBUTES {
        group_counts.insert(group.as_str().to_string(), 0);
    }
    let mut unclassified = Vec::new();

    for (_, record) in &loaded.records {
        let groups = record.group_attributes();
        if groups.is_empty() {
            unclassified.push(record.name.clone());
        }
        for group in groups {
            if let Some(count) = group_counts.get_mut(group.as_str()) {
                *count += 1;
            }
        }
    }

    Ok(AnalyzeGroupsResponse {
        total: loaded.records.len(),
        skipped: loaded.skipped,
        group_counts,
        unclassified,
    })
}
