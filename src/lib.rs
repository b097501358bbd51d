//! Healthy Family Food Curator (HFFC) Library
//!
//! Core functionality for curating a flat-file food database.

pub mod classify;
pub mod fetch;
pub mod models;
pub mod store;
pub mod tools;
pub mod validate;
