//! Attribute classification
//!
//! Derives dietary-restriction and food-group labels from food names.

pub mod dietary;
pub mod groups;
pub mod merge;
pub mod rules;

pub use dietary::{classify_dietary, rule_excludes};
pub use groups::classify_groups;
pub use merge::{classify_record, merge_attributes, ClassifyScope};
pub use rules::{DietaryRule, GroupPattern, GroupRule, KeywordException, SpecialCase};
