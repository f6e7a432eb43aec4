//! Menu Category Model

use serde::{Deserialize, Serialize};

/// Selection rule for a category
///
/// A category carries exactly one rule. Exclusion sub-groups are a
/// second, orthogonal dimension: items tag themselves with an
/// `exclusion_group` (see [`crate::models::MenuItem`]), and at most one
/// item per tag may be selected regardless of which rule the category
/// carries. `MaxCount` combined with item tags gives e.g. "max 3
/// antipasti, at most 1 of {pizza, pizza rossa, focaccia}".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind", content = "limit")]
pub enum CategoryRule {
    /// Any number of items may be selected
    #[default]
    Unbounded,
    /// At most `n` items may be selected at once
    MaxCount(u32),
    /// Exactly one item at a time; selecting another replaces it
    SingleChoice,
}

impl CategoryRule {
    /// Count cap for this rule, if it has one
    pub fn limit(&self) -> Option<u32> {
        match self {
            CategoryRule::Unbounded => None,
            CategoryRule::MaxCount(n) => Some(*n),
            CategoryRule::SingleChoice => Some(1),
        }
    }
}

/// Menu category entity
///
/// Supplied read-only by the catalog collaborator; the engine never
/// creates or mutates categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub sort_order: i32,
    pub rule: CategoryRule,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
