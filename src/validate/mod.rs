//! Data-quality validation
//!
//! Per-record checks and the aggregated report.

pub mod checks;
pub mod report;

pub use checks::{severity_of, Check, Severity, CHECKS, MACRO_NUTRIENTS, ZERO_CALORIE_EXEMPT};
pub use report::{Finding, ValidationReport};
