//! Input validation helpers
//!
//! Centralized limits and validation functions for the booking fields
//! the engine sees. Storage enforces nothing, so lengths and bounds are
//! checked here before a draft is frozen.

use shared::{AppError, AppResult};

// ── Limits ──────────────────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Notes and special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers and other short identifiers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Largest party a single booking may hold
pub const MAX_GUEST_COUNT: i32 = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a guest count is positive and within bounds.
pub fn validate_guest_count(count: i32) -> AppResult<()> {
    if count <= 0 {
        return Err(AppError::validation(format!(
            "guest_count must be positive, got {count}"
        )));
    }
    if count > MAX_GUEST_COUNT {
        return Err(AppError::validation(format!(
            "guest_count exceeds maximum allowed ({MAX_GUEST_COUNT}), got {count}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        assert!(validate_required_text("  ", "customer_name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Rossi", "customer_name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text_length() {
        let long = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&long, "note", MAX_NOTE_LEN).is_err());
        assert!(validate_optional_text(&None, "note", MAX_NOTE_LEN).is_ok());
    }

    #[test]
    fn test_guest_count_bounds() {
        assert!(validate_guest_count(0).is_err());
        assert!(validate_guest_count(-3).is_err());
        assert!(validate_guest_count(1).is_ok());
        assert!(validate_guest_count(MAX_GUEST_COUNT).is_ok());
        assert!(validate_guest_count(MAX_GUEST_COUNT + 1).is_err());
    }
}
