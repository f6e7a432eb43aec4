//! Menu catalog access
//!
//! Read-only, in-memory view over the category and item lists supplied
//! by the persistence collaborator.

pub mod service;

pub use service::{CatalogService, ItemMeta};
