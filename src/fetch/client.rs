//! FoodData Central client
//!
//! Blocking HTTP client for the USDA FoodData Central API, plus the raw
//! response shapes the normalizer consumes.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::FoodRecord;

use super::normalize;

/// Fetch error types
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("FoodData Central returned status {0}")]
    Status(u16),

    #[error("no matching food found")]
    NotFound,

    #[error("response missing field {0}")]
    MissingField(&'static str),
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One hit from the food search endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub fdc_id: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data_type: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchHit>,
}

/// A food detail response, reduced to the fields the normalizer reads
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcFood {
    #[serde(default)]
    pub fdc_id: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub food_nutrients: Vec<FdcFoodNutrient>,
    #[serde(default)]
    pub food_portions: Vec<FdcPortion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcFoodNutrient {
    pub nutrient: Option<FdcNutrient>,
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcNutrient {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit_name: String,
}

/// Serving portion; Foundation and SR Legacy expose units differently
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcPortion {
    pub measure_unit: Option<FdcMeasureUnit>,
    pub modifier: Option<String>,
    pub gram_weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdcMeasureUnit {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
}

/// Blocking FoodData Central API client
pub struct FdcClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl FdcClient {
    pub fn new(api_key: impl Into<String>) -> FetchResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Search Foundation and SR Legacy foods, returning the first hit
    pub fn search(&self, query: &str) -> FetchResult<Option<SearchHit>> {
        let url = format!("{}/foods/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("query", query),
                ("api_key", self.api_key.as_str()),
                ("dataType", "Foundation,SR Legacy"),
                ("pageSize", "5"),
            ])
            .send()?;
        let response = check_status(response)?;
        let parsed: SearchResponse = response.json()?;
        Ok(parsed.foods.into_iter().next())
    }

    /// Fetch the detail record for an FDC ID
    pub fn food_detail(&self, fdc_id: u64) -> FetchResult<FdcFood> {
        let url = format!("{}/food/{}", self.base_url, fdc_id);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()?;
        let response = check_status(response)?;
        Ok(response.json()?)
    }

    /// Search by query, fetch the detail record and normalize it
    pub fn fetch_by_query(&self, query: &str, display_name: &str) -> FetchResult<FoodRecord> {
        let hit = self.search(query)?.ok_or(FetchError::NotFound)?;
        let fdc_id = hit.fdc_id.ok_or(FetchError::MissingField("fdcId"))?;
        let detail = self.food_detail(fdc_id)?;
        Ok(normalize::normalize(&detail, display_name))
    }

    /// Fetch a known FDC ID and normalize it
    pub fn fetch_by_id(&self, fdc_id: u64, display_name: &str) -> FetchResult<FoodRecord> {
        let detail = self.food_detail(fdc_id)?;
        Ok(normalize::normalize(&detail, display_name))
    }
}

fn check_status(
    response: reqwest::blocking::Response,
) -> FetchResult<reqwest::blocking::Response> {
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(response)
}
