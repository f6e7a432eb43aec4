//! Catalog Service - in-memory indexed view of the menu catalog
//!
//! The catalog collaborator hands over plain category and item lists;
//! this service indexes them by id and validates referential integrity
//! once, at build time, so the engines can assume every selected item
//! resolves.

use std::collections::HashMap;

use shared::models::{CategoryRule, MenuCategory, MenuItem, MenuSelection};
use shared::{AppError, AppResult};

/// Item metadata for rule evaluation
#[derive(Debug, Clone)]
pub struct ItemMeta {
    pub category_id: String,
    pub category_name: String,
    pub rule: CategoryRule,
    pub exclusion_group: Option<String>,
}

/// Indexed, read-only menu catalog
#[derive(Debug, Clone)]
pub struct CatalogService {
    categories: HashMap<String, MenuCategory>,
    items: HashMap<String, MenuItem>,
}

impl CatalogService {
    /// Build the catalog from collaborator-supplied lists
    ///
    /// Validates ids are unique, item prices are sane and every item
    /// references an existing category.
    pub fn new(categories: Vec<MenuCategory>, items: Vec<MenuItem>) -> AppResult<Self> {
        let mut category_index = HashMap::with_capacity(categories.len());
        for category in categories {
            if category_index
                .insert(category.id.clone(), category)
                .is_some()
            {
                return Err(AppError::conflict("duplicate category id in catalog"));
            }
        }

        let mut item_index = HashMap::with_capacity(items.len());
        for item in items {
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(AppError::validation(format!(
                    "item {} price must be non-negative, got {}",
                    item.id, item.price
                )));
            }
            if !category_index.contains_key(&item.category) {
                return Err(AppError::validation(format!(
                    "item {} references unknown category {}",
                    item.id, item.category
                )));
            }
            if item_index.insert(item.id.clone(), item).is_some() {
                return Err(AppError::conflict("duplicate item id in catalog"));
            }
        }

        Ok(Self {
            categories: category_index,
            items: item_index,
        })
    }

    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.get(id)
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.get(id)
    }

    /// Metadata for rule evaluation, `None` for unknown items
    pub fn item_meta(&self, id: &str) -> Option<ItemMeta> {
        let item = self.items.get(id)?;
        let category = self.categories.get(&item.category)?;
        Some(ItemMeta {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            rule: category.rule,
            exclusion_group: item.exclusion_group.clone(),
        })
    }

    /// Active categories in display order
    pub fn categories_sorted(&self) -> Vec<&MenuCategory> {
        let mut list: Vec<&MenuCategory> =
            self.categories.values().filter(|c| c.is_active).collect();
        list.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.id.cmp(&b.id)));
        list
    }

    /// Active items of one category in display order
    pub fn items_in_category(&self, category_id: &str) -> Vec<&MenuItem> {
        let mut list: Vec<&MenuItem> = self
            .items
            .values()
            .filter(|i| i.category == category_id && i.is_active)
            .collect();
        list.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.id.cmp(&b.id)));
        list
    }

    /// Resolve every id in a selection to its item
    ///
    /// Fails if the selection references an item the catalog no longer
    /// knows (stale draft after a catalog change).
    pub fn resolve_selection<'a>(
        &'a self,
        selection: &MenuSelection,
    ) -> AppResult<Vec<&'a MenuItem>> {
        selection
            .iter()
            .map(|id| {
                self.items
                    .get(id)
                    .ok_or_else(|| AppError::not_found(format!("menu item {}", id)))
            })
            .collect()
    }
}
