//! Unified error handling
//!
//! Application-level error type shared by every crate in the workspace.
//!
//! # Error classes
//!
//! | Class | Meaning |
//! |-------|---------|
//! | Validation | Malformed or out-of-bounds input |
//! | InvalidTime | Start time outside the serviceable day |
//! | NotFound | Unknown catalog or booking reference |
//! | Conflict | Resource state forbids the operation |
//! | Internal | Programming or configuration error |
//!
//! Business outcomes that the caller is expected to continue from
//! (a max-count rejection, a failed admission check) are NOT errors;
//! they are structured result values returned by the engines.
//!
//! # Example
//!
//! ```ignore
//! // Reject bad input
//! Err(AppError::validation("guest_count must be positive"))
//!
//! // Reject a start time outside service hours
//! Err(AppError::invalid_time("start time 03:00 is outside service hours"))
//! ```

use serde::Serialize;

/// Result alias used throughout the workspace
pub type AppResult<T> = Result<T, AppError>;

/// Application error enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppError {
    // ========== Input errors ==========
    #[error("Validation failed: {0}")]
    /// Malformed or out-of-bounds input
    Validation(String),

    #[error("Invalid time input: {0}")]
    /// Start time outside the serviceable range
    InvalidTime(String),

    // ========== Reference errors ==========
    #[error("Resource not found: {0}")]
    /// Unknown catalog or booking reference
    NotFound(String),

    #[error("Conflict: {0}")]
    /// Resource state forbids the operation
    Conflict(String),

    // ========== System errors ==========
    #[error("Internal error: {0}")]
    /// Programming or configuration error
    Internal(String),
}

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid time input error
    pub fn invalid_time(msg: impl Into<String>) -> Self {
        Self::InvalidTime(msg.into())
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(format!("{} not found", resource.into()))
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("menu item fritto_misto");
        assert_eq!(
            err.to_string(),
            "Resource not found: menu item fritto_misto not found"
        );
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let err = AppError::invalid_time("start time 03:00 is outside service hours");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "INVALID_TIME");
    }
}
