//! Compilation tools
//!
//! Aggregate every stored food into one combined export document.

use serde::Serialize;

use crate::models::FoodRecord;
use crate::store::{to_pretty_json, FoodStore, StoreResult};

/// Schema version stamped on the combined export
pub const EXPORT_VERSION: &str = "1.0";

/// Combined export document
#[derive(Debug, Serialize)]
pub struct CombinedExport {
    pub version: String,
    pub foods: Vec<FoodRecord>,
}

/// Response for compile_foods
#[derive(Debug, Serialize)]
pub struct CompileFoodsResponse {
    pub foods: usize,
    pub skipped: usize,
    pub json: String,
}

/// Render every stored food into one JSON document.
///
/// The legacy shape is the bare array older consumers still read.
pub fn compile_foods(store: &FoodStore, legacy_array: bool) -> StoreResult<CompileFoodsResponse> {
    let loaded = store.load_all()?;
    let foods: Vec<FoodRecord> = loaded
        .records
        .into_iter()
        .map(|(_, record)| record)
        .collect();
    let count = foods.len();

    let json = if legacy_array {
        to_pretty_json(&foods)?
    } else {
        to_pretty_json(&CombinedExport {
            version: EXPORT_VERSION.to_string(),
            foods,
        })?
    };

    Ok(CompileFoodsResponse {
        foods: count,
        skipped: loaded.skipped,
        json,
    })
}

/// Render the stored food names as a JSON list
pub fn food_names(store: &FoodStore) -> StoreResult<String> {
    let loaded = store.load_all()?;
    let names: Vec<String> = loaded
        .records
        .iter()
        .map(|(_, record)| record.name.clone())
        .collect();
    Ok(to_pretty_json(&names)?)
}
