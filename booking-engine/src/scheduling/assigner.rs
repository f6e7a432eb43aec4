//! Time-slot assignment
//!
//! Maps a booking's start time to exactly one service slot. Assignment
//! depends only on the start time, never on end time or duration: a
//! booking running 12:00-22:00 belongs to Morning and is never shown
//! fragmented across slot views.

use chrono::NaiveTime;
use shared::models::{SlotPlan, TimeSlot};
use shared::{AppError, AppResult};

/// Assign a start time to its service slot
///
/// A start time outside the serviceable day is an input error, reported
/// rather than clamped.
pub fn assign(plan: &SlotPlan, start_time: NaiveTime) -> AppResult<TimeSlot> {
    plan.slot_for(start_time).ok_or_else(|| {
        AppError::invalid_time(format!(
            "start time {} is outside service hours ({}-{})",
            start_time.format("%H:%M"),
            plan.service_start().format("%H:%M"),
            plan.service_end().format("%H:%M"),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_assigns_each_window() {
        let plan = SlotPlan::default();
        assert_eq!(assign(&plan, hm(10, 0)).unwrap(), TimeSlot::Morning);
        assert_eq!(assign(&plan, hm(12, 0)).unwrap(), TimeSlot::Morning);
        assert_eq!(assign(&plan, hm(16, 0)).unwrap(), TimeSlot::Afternoon);
        assert_eq!(assign(&plan, hm(19, 0)).unwrap(), TimeSlot::Evening);
        assert_eq!(assign(&plan, hm(23, 30)).unwrap(), TimeSlot::Evening);
    }

    #[test]
    fn test_boundaries_fall_on_opposite_sides() {
        let plan = SlotPlan::default();
        assert_eq!(assign(&plan, hm(14, 30)).unwrap(), TimeSlot::Morning);
        assert_eq!(assign(&plan, hm(14, 31)).unwrap(), TimeSlot::Afternoon);
        assert_eq!(assign(&plan, hm(18, 30)).unwrap(), TimeSlot::Afternoon);
        assert_eq!(assign(&plan, hm(18, 31)).unwrap(), TimeSlot::Evening);
    }

    #[test]
    fn test_out_of_range_is_invalid_time() {
        let plan = SlotPlan::default();
        for t in [hm(0, 0), hm(9, 59), hm(23, 31)] {
            match assign(&plan, t) {
                Err(AppError::InvalidTime(_)) => {}
                other => panic!("expected InvalidTime for {}, got {:?}", t, other),
            }
        }
    }
}
