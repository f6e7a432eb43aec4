//! Shared types for the booking back office
//!
//! Data model and error types used across crates: menu catalog entities,
//! booking/draft types, time-slot definitions and the unified error type.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
