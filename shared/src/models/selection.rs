//! Menu Selection Model

use serde::{Deserialize, Serialize};

/// Ordered set of distinct menu item IDs attached to one booking
///
/// Created empty when a draft is opened and mutated only through the
/// selection engine, which guarantees every category rule holds after
/// each completed operation. Insertion order is preserved so the UI can
/// render picks in the order the guest made them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MenuSelection {
    items: Vec<String>,
}

impl MenuSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|id| id == item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Append an item ID; no-op if already present
    pub fn insert(&mut self, item_id: impl Into<String>) {
        let id = item_id.into();
        if !self.contains(&id) {
            self.items.push(id);
        }
    }

    /// Remove an item ID, returning whether it was present
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|id| id != item_id);
        before != self.items.len()
    }
}

impl<S: Into<String>> FromIterator<S> for MenuSelection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut selection = Self::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}
