//! Booking Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::MenuSelection;

/// Booking kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingKind {
    /// Plain table booking, menu optional, no cover charge
    #[default]
    Table,
    /// Reception-style booking (multi-course, e.g. graduation dinner):
    /// requires a non-empty menu selection, fixed per-person cover charge
    Reception,
}

impl BookingKind {
    /// Whether submission requires a non-empty menu selection
    pub fn requires_menu(&self) -> bool {
        matches!(self, BookingKind::Reception)
    }

    /// Whether the per-person cover charge applies
    pub fn has_cover_charge(&self) -> bool {
        matches!(self, BookingKind::Reception)
    }
}

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Submitted, awaiting a staff decision
    #[default]
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    /// Whether the booking occupies seats in its slot
    ///
    /// Only accepted bookings count toward occupancy; pending requests
    /// have not been admitted and rejected/cancelled ones contribute
    /// zero.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Accepted)
    }
}

/// In-progress booking draft held by the caller
///
/// The selection is mutated only through the selection engine; prices
/// are derived fields recomputed on every selection or guest-count
/// change. Discarded if abandoned, frozen into a [`BookingRequest`] on
/// submission.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookingDraft {
    pub kind: BookingKind,
    pub guest_count: i32,
    pub customer_name: String,
    pub phone: Option<String>,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    /// Expected end time, for staff planning only; slot assignment and
    /// capacity accounting depend on the start time alone
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub selection: MenuSelection,
    /// Derived: sum of selected unit prices plus any cover charge
    #[serde(default)]
    pub per_person: f64,
    /// Derived: per_person * guest_count
    #[serde(default)]
    pub total: f64,
}

impl BookingDraft {
    pub fn new(kind: BookingKind, guest_count: i32) -> Self {
        Self {
            kind,
            guest_count,
            ..Default::default()
        }
    }
}

/// Submitted booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Option<String>,
    pub kind: BookingKind,
    pub status: BookingStatus,
    pub guest_count: i32,
    pub customer_name: String,
    pub phone: Option<String>,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// Expected end time; never participates in slot assignment
    pub end_time: Option<NaiveTime>,
    pub selection: MenuSelection,
    pub per_person: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reception_requires_menu_and_cover() {
        assert!(BookingKind::Reception.requires_menu());
        assert!(BookingKind::Reception.has_cover_charge());
        assert!(!BookingKind::Table.requires_menu());
        assert!(!BookingKind::Table.has_cover_charge());
    }

    #[test]
    fn test_only_accepted_is_active() {
        assert!(BookingStatus::Accepted.is_active());
        assert!(!BookingStatus::Pending.is_active());
        assert!(!BookingStatus::Rejected.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }
}
