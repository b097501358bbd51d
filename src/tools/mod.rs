//! HFFC Tools module
//!
//! Batch operations over the food store, one module per command-line tool.

pub mod classify;
pub mod compile;
pub mod import;
pub mod prune;
pub mod validate;
