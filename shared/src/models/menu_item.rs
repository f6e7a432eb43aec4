//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Supplied read-only by the catalog collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    /// Category reference (String ID, required)
    pub category: String,
    pub name: String,
    /// Unit price in currency units (non-negative, 2 decimal places)
    pub price: f64,
    /// Exclusion sub-group tag: at most one item carrying the same tag
    /// within one category may be selected at a time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_group: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Whether this item and `other` are rivals within one exclusion group
    pub fn excludes(&self, other: &MenuItem) -> bool {
        self.category == other.category
            && self.id != other.id
            && match (&self.exclusion_group, &other.exclusion_group) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
    }
}
