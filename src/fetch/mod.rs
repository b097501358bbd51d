//! FoodData Central Integration
//!
//! Blocking HTTP client for the USDA FoodData Central API and the
//! normalization that turns its responses into flat-file records.

pub mod client;
pub mod normalize;

pub use client::{FdcClient, FdcFood, FetchError, FetchResult, SearchHit, DEFAULT_BASE_URL};
pub use normalize::{citation, normalize, NUTRIENT_TABLE};
