//! Toggle operation over a menu selection
//!
//! A single entry point mutates selections: [`toggle`]. Removal always
//! succeeds. Insertion first resolves one-of-N conflicts by silent
//! substitution (single-choice categories and exclusion groups), then
//! enforces the category count cap. The returned selection always
//! satisfies every rule; a cap rejection carries the category name and
//! limit and leaves the selection untouched.
//!
//! Substitution instead of rejection for exclusive picks is deliberate:
//! swapping one drink for another is an expected one-of-N choice, while
//! exceeding a count cap needs the caller to decide what to remove.

use serde::Serialize;
use shared::models::{CategoryRule, MenuItem, MenuSelection};
use shared::{AppError, AppResult};

use crate::catalog::CatalogService;

/// A count cap was reached; the selection is unchanged
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuleViolation {
    /// Display name of the capped category
    pub category: String,
    /// The configured cap
    pub limit: u32,
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} allows at most {} selection{}",
            self.category,
            self.limit,
            if self.limit == 1 { "" } else { "s" }
        )
    }
}

/// Result of a toggle operation
///
/// `selection` is the state to keep either way: the new state when the
/// toggle applied, the unchanged input when it was rejected.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub selection: MenuSelection,
    /// Items silently deselected to make room for the toggled one
    pub deselected: Vec<String>,
    /// Present when a count cap rejected the toggle
    pub rejection: Option<RuleViolation>,
}

impl ToggleOutcome {
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

/// Toggle one item in a selection
///
/// Errors only on unknown or inactive items; every rule outcome,
/// including a cap rejection, is a result value the caller can continue
/// from.
pub fn toggle(
    catalog: &CatalogService,
    selection: &MenuSelection,
    item_id: &str,
) -> AppResult<ToggleOutcome> {
    let item = catalog
        .item(item_id)
        .ok_or_else(|| AppError::not_found(format!("menu item {}", item_id)))?;

    // Removal is always safe: it can only free capacity. It also works
    // for items deactivated while selected.
    if selection.contains(item_id) {
        let mut next = selection.clone();
        next.remove(item_id);
        return Ok(ToggleOutcome {
            selection: next,
            deselected: Vec::new(),
            rejection: None,
        });
    }

    // Deactivating the item or its whole category makes it unavailable
    let category_active = catalog
        .category(&item.category)
        .is_some_and(|c| c.is_active);
    if !item.is_active || !category_active {
        return Err(AppError::validation(format!(
            "menu item {} is not available",
            item_id
        )));
    }
    // Catalog construction guarantees the category resolves
    let meta = catalog
        .item_meta(item_id)
        .ok_or_else(|| AppError::internal(format!("no metadata for item {}", item_id)))?;

    // Insertion: resolve one-of-N conflicts first, freeing their slots,
    // then check the count cap against the resulting state
    let mut next = selection.clone();
    let single_choice = meta.rule == CategoryRule::SingleChoice;
    let deselected = deselect_rivals(catalog, &mut next, item, single_choice);

    if let CategoryRule::MaxCount(limit) = meta.rule {
        let in_category = count_in_category(catalog, &next, &meta.category_id);
        if in_category >= limit {
            tracing::debug!(
                category = %meta.category_name,
                limit,
                item = item_id,
                "toggle rejected: category cap reached"
            );
            return Ok(ToggleOutcome {
                selection: selection.clone(),
                deselected: Vec::new(),
                rejection: Some(RuleViolation {
                    category: meta.category_name,
                    limit,
                }),
            });
        }
    }

    if !deselected.is_empty() {
        tracing::debug!(
            item = item_id,
            replaced = ?deselected,
            "toggle substituted exclusive picks"
        );
    }
    next.insert(item_id);
    Ok(ToggleOutcome {
        selection: next,
        deselected,
        rejection: None,
    })
}

/// Remove selected items the new pick is exclusive with
///
/// Single-choice categories treat every selected item of the category
/// as a rival; otherwise only members of the same exclusion group are.
/// Items of the category outside any group stay selected.
fn deselect_rivals(
    catalog: &CatalogService,
    selection: &mut MenuSelection,
    new_item: &MenuItem,
    single_choice: bool,
) -> Vec<String> {
    let rivals: Vec<String> = selection
        .iter()
        .filter(|&id| {
            catalog.item(id).is_some_and(|selected| {
                if single_choice {
                    selected.category == new_item.category && selected.id != new_item.id
                } else {
                    selected.excludes(new_item)
                }
            })
        })
        .map(String::from)
        .collect();

    for id in &rivals {
        selection.remove(id);
    }
    rivals
}

fn count_in_category(catalog: &CatalogService, selection: &MenuSelection, category_id: &str) -> u32 {
    selection
        .iter()
        .filter(|&id| catalog.item(id).is_some_and(|i| i.category == category_id))
        .count() as u32
}
