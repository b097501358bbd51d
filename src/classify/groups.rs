//! MyPlate food-group classifier
//!
//! Assigns food-group labels by pattern matching against lowercased names,
//! honoring per-group exclusions and short-circuiting for records that
//! already carry a group label.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::FoodAttribute;

use super::rules::GROUP_RULES;

struct CompiledPattern {
    pattern: Regex,
    unless: Option<Regex>,
}

struct CompiledGroup {
    label: FoodAttribute,
    exclusions: Vec<Regex>,
    patterns: Vec<CompiledPattern>,
}

// The rule tables are fixed strings, so compilation cannot fail at runtime
static COMPILED_GROUPS: Lazy<Vec<CompiledGroup>> = Lazy::new(|| {
    GROUP_RULES
        .iter()
        .map(|rule| CompiledGroup {
            label: rule.label,
            exclusions: rule
                .exclusions
                .iter()
                .map(|pattern| Regex::new(pattern).expect("valid exclusion pattern"))
                .collect(),
            patterns: rule
                .patterns
                .iter()
                .map(|candidate| CompiledPattern {
                    pattern: Regex::new(candidate.pattern).expect("valid group pattern"),
                    unless: candidate
                        .unless
                        .map(|counter| Regex::new(counter).expect("valid counter-pattern")),
                })
                .collect(),
        })
        .collect()
});

/// Food-group labels for a name, honoring existing classifications.
///
/// If the attributes already carry any group label, that intersection is
/// returned unchanged in stored order. Otherwise each group's exclusions are
/// checked before its patterns; the first surviving pattern claims the group
/// and the scan moves on to the next group. Multiple groups may apply.
pub fn classify_groups(food_name: &str, existing_attributes: &[String]) -> Vec<FoodAttribute> {
    let existing: Vec<FoodAttribute> = existing_attributes
        .iter()
        .filter_map(|attr| FoodAttribute::from_str(attr))
        .filter(FoodAttribute::is_group)
        .collect();
    if !existing.is_empty() {
        return existing;
    }

    let lower = food_name.to_lowercase();
    let name = lower.trim();
    if name.is_empty() {
        return Vec::new();
    }

    let mut groups = Vec::new();
    'group: for group in COMPILED_GROUPS.iter() {
        for exclusion in &group.exclusions {
            if exclusion.is_match(name) {
                continue 'group;
            }
        }
        for candidate in &group.patterns {
            if candidate.pattern.is_match(name) {
                let vetoed = candidate
                    .unless
                    .as_ref()
                    .map(|counter| counter.is_match(name))
                    .unwrap_or(false);
                if !vetoed {
                    groups.push(group.label);
                    break;
                }
            }
        }
    }

    groups
}
