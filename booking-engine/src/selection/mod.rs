//! Selection constraint engine
//!
//! Governs which combinations of menu items a booking may contain.

pub mod engine;

pub use engine::{RuleViolation, ToggleOutcome, toggle};
