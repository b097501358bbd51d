//! Data models
//!
//! Rust structs representing flat-file food database entities.

mod attribute;
mod food;

pub use attribute::{FoodAttribute, DIETARY_ATTRIBUTES, GROUP_ATTRIBUTES};
pub use food::{FoodRecord, Nutrient, UnitOption};
