//! Price derivation
//!
//! Per-person and total prices derived from a valid selection.

pub mod calculator;

pub use calculator::{Totals, compute_totals};
