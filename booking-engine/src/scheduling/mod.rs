//! Slot assignment and capacity accounting
//!
//! Both the calendar display grouping and the admission check resolve a
//! booking's slot through the same assignment function, so a booking
//! can never display under one slot while counting against another.

pub mod assigner;
pub mod occupancy;

pub use assigner::assign;
pub use occupancy::{AdmissionReport, SlotUsage, check_admission, occupancy};
