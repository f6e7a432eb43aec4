//! Slot occupancy and admission control
//!
//! Occupancy is never stored: it is recomputed on demand as a pure
//! function of the booking snapshot for a date. Admission control is a
//! check-then-act soft limit; concurrent submissions may transiently
//! overbook a slot and staff resolve that manually.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use shared::AppResult;
use shared::models::{BookingRequest, SlotPlan, TimeSlot};

use super::assigner::assign;
use crate::core::SlotCapacities;
use crate::utils::validation::validate_guest_count;

/// Occupancy of one slot on one date
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SlotUsage {
    /// Sum of guest counts of active bookings starting in the slot
    pub occupied: i32,
    /// Configured maximum guests for the slot
    pub capacity: i32,
}

impl SlotUsage {
    pub fn remaining(&self) -> i32 {
        self.capacity - self.occupied
    }
}

/// Compute per-slot occupancy for a date
///
/// Every slot is present in the result, with zero occupancy when no
/// booking starts in it. Only active bookings on `date` count;
/// a booking spanning several slots is counted once, in the slot of its
/// start time. Stored bookings with an out-of-range start time are
/// skipped with a warning rather than failing the whole day view.
pub fn occupancy(
    date: NaiveDate,
    bookings: &[BookingRequest],
    plan: &SlotPlan,
    capacities: &SlotCapacities,
) -> BTreeMap<TimeSlot, SlotUsage> {
    let mut usage: BTreeMap<TimeSlot, SlotUsage> = TimeSlot::ALL
        .into_iter()
        .map(|slot| {
            (
                slot,
                SlotUsage {
                    occupied: 0,
                    capacity: capacities.capacity(slot),
                },
            )
        })
        .collect();

    for booking in bookings {
        if booking.date != date || !booking.status.is_active() {
            continue;
        }
        match plan.slot_for(booking.start_time) {
            Some(slot) => {
                if let Some(entry) = usage.get_mut(&slot) {
                    entry.occupied += booking.guest_count;
                }
            }
            None => {
                tracing::warn!(
                    booking = booking.id.as_deref().unwrap_or("<draft>"),
                    start_time = %booking.start_time.format("%H:%M"),
                    "booking start time outside service hours, skipped in occupancy"
                );
            }
        }
    }

    usage
}

/// Advisory admission check for a proposed booking
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdmissionReport {
    /// Whether the projected occupancy stays within capacity
    pub allowed: bool,
    /// Slot the proposed start time resolves to
    pub slot: TimeSlot,
    /// Current occupancy of that slot
    pub occupied: i32,
    /// Configured capacity of that slot
    pub capacity: i32,
    /// occupied + proposed guest count
    pub projected: i32,
}

/// Check whether a proposed booking fits its target slot
///
/// Resolves the slot from the proposed start time through the same
/// assignment rule the display uses. The result is advisory: staff may
/// still accept an overbooked slot.
pub fn check_admission(
    date: NaiveDate,
    bookings: &[BookingRequest],
    plan: &SlotPlan,
    capacities: &SlotCapacities,
    start_time: NaiveTime,
    guest_count: i32,
) -> AppResult<AdmissionReport> {
    validate_guest_count(guest_count)?;
    let slot = assign(plan, start_time)?;
    let usage = occupancy(date, bookings, plan, capacities)
        .get(&slot)
        .copied()
        .unwrap_or_default();

    let projected = usage.occupied + guest_count;
    let allowed = projected <= usage.capacity;
    if !allowed {
        tracing::info!(
            %date,
            %slot,
            occupied = usage.occupied,
            capacity = usage.capacity,
            projected,
            "admission check over capacity"
        );
    }

    Ok(AdmissionReport {
        allowed,
        slot,
        occupied: usage.occupied,
        capacity: usage.capacity,
        projected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BookingKind, BookingStatus, MenuSelection};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 12).unwrap()
    }

    fn booking(start: NaiveTime, guests: i32, status: BookingStatus) -> BookingRequest {
        BookingRequest {
            id: Some(format!("bk-{}-{}", start.format("%H%M"), guests)),
            kind: BookingKind::Table,
            status,
            guest_count: guests,
            customer_name: "Rossi".to_string(),
            phone: None,
            note: None,
            date: date(),
            start_time: start,
            end_time: None,
            selection: MenuSelection::new(),
            per_person: 0.0,
            total: 0.0,
        }
    }

    #[test]
    fn test_occupancy_groups_by_start_slot() {
        // Two morning bookings (4 + 6 guests at 11:00) and one evening
        // (10 guests at 19:00), capacity 30 everywhere.
        let bookings = vec![
            booking(hm(11, 0), 4, BookingStatus::Accepted),
            booking(hm(11, 0), 6, BookingStatus::Accepted),
            booking(hm(19, 0), 10, BookingStatus::Accepted),
        ];
        let usage = occupancy(
            date(),
            &bookings,
            &SlotPlan::default(),
            &SlotCapacities::uniform(30),
        );

        assert_eq!(usage[&TimeSlot::Morning].occupied, 10);
        assert_eq!(usage[&TimeSlot::Afternoon].occupied, 0);
        assert_eq!(usage[&TimeSlot::Evening].occupied, 10);
        for slot in TimeSlot::ALL {
            assert_eq!(usage[&slot].capacity, 30);
        }
    }

    #[test]
    fn test_inactive_bookings_contribute_zero() {
        let bookings = vec![
            booking(hm(12, 0), 8, BookingStatus::Accepted),
            booking(hm(12, 0), 5, BookingStatus::Pending),
            booking(hm(12, 0), 6, BookingStatus::Rejected),
            booking(hm(12, 0), 7, BookingStatus::Cancelled),
        ];
        let usage = occupancy(
            date(),
            &bookings,
            &SlotPlan::default(),
            &SlotCapacities::default(),
        );
        assert_eq!(usage[&TimeSlot::Morning].occupied, 8);
    }

    #[test]
    fn test_other_dates_are_ignored() {
        let mut other_day = booking(hm(12, 0), 9, BookingStatus::Accepted);
        other_day.date = NaiveDate::from_ymd_opt(2026, 6, 13).unwrap();
        let usage = occupancy(
            date(),
            &[other_day],
            &SlotPlan::default(),
            &SlotCapacities::default(),
        );
        assert_eq!(usage[&TimeSlot::Morning].occupied, 0);
    }

    #[test]
    fn test_long_booking_counts_once_in_start_slot() {
        // 12:00-22:00 runs through all three slots but occupies Morning only
        let mut long = booking(hm(12, 0), 12, BookingStatus::Accepted);
        long.end_time = Some(hm(22, 0));
        let bookings = vec![long];
        let usage = occupancy(
            date(),
            &bookings,
            &SlotPlan::default(),
            &SlotCapacities::default(),
        );
        assert_eq!(usage[&TimeSlot::Morning].occupied, 12);
        assert_eq!(usage[&TimeSlot::Afternoon].occupied, 0);
        assert_eq!(usage[&TimeSlot::Evening].occupied, 0);
    }

    #[test]
    fn test_admission_allows_within_capacity() {
        let bookings = vec![booking(hm(11, 0), 20, BookingStatus::Accepted)];
        let report = check_admission(
            date(),
            &bookings,
            &SlotPlan::default(),
            &SlotCapacities::uniform(30),
            hm(12, 30),
            10,
        )
        .unwrap();

        assert!(report.allowed);
        assert_eq!(report.slot, TimeSlot::Morning);
        assert_eq!(report.occupied, 20);
        assert_eq!(report.projected, 30);
    }

    #[test]
    fn test_admission_refuses_over_capacity() {
        let bookings = vec![booking(hm(11, 0), 25, BookingStatus::Accepted)];
        let report = check_admission(
            date(),
            &bookings,
            &SlotPlan::default(),
            &SlotCapacities::uniform(30),
            hm(13, 0),
            6,
        )
        .unwrap();

        assert!(!report.allowed);
        assert_eq!(report.projected, 31);
        assert_eq!(report.capacity, 30);
    }

    #[test]
    fn test_admission_uses_display_assignment() {
        // A proposal at 14:31 counts against Afternoon, not Morning,
        // exactly as the calendar displays it.
        let bookings = vec![
            booking(hm(11, 0), 30, BookingStatus::Accepted), // fills Morning
        ];
        let report = check_admission(
            date(),
            &bookings,
            &SlotPlan::default(),
            &SlotCapacities::uniform(30),
            hm(14, 31),
            4,
        )
        .unwrap();
        assert!(report.allowed);
        assert_eq!(report.slot, TimeSlot::Afternoon);
    }

    #[test]
    fn test_admission_rejects_invalid_inputs() {
        let plan = SlotPlan::default();
        let caps = SlotCapacities::default();
        assert!(check_admission(date(), &[], &plan, &caps, hm(3, 0), 4).is_err());
        assert!(check_admission(date(), &[], &plan, &caps, hm(12, 0), 0).is_err());
    }
}
