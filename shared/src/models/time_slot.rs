//! Time Slot Model
//!
//! Three fixed daily service windows used for both calendar display
//! grouping and capacity accounting. The windows themselves are
//! configuration data ([`SlotPlan`]), not persisted entities.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Daily service slot
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeSlot {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// All slots in service order
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn name(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One service window, minute granularity, both bounds inclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl SlotWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// The three daily service windows, in service order
///
/// Windows must be ordered and non-overlapping. Assignment is by start
/// time only: within the serviceable day a time belongs to the first
/// window whose end it does not pass, so the windows partition
/// [service start, service end] with no gaps even between minute
/// boundaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotPlan {
    pub morning: SlotWindow,
    pub afternoon: SlotWindow,
    pub evening: SlotWindow,
}

impl SlotPlan {
    /// Window for a given slot
    pub fn window(&self, slot: TimeSlot) -> SlotWindow {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
        }
    }

    /// First serviceable time of the day
    pub fn service_start(&self) -> NaiveTime {
        self.morning.start
    }

    /// Last serviceable start time of the day
    pub fn service_end(&self) -> NaiveTime {
        self.evening.end
    }

    /// Slot for a start time, `None` outside the serviceable day
    ///
    /// Depends only on the start time; end time and duration never
    /// participate, so a long booking is never fragmented across slots.
    pub fn slot_for(&self, start_time: NaiveTime) -> Option<TimeSlot> {
        if start_time < self.service_start() || start_time > self.service_end() {
            return None;
        }
        if start_time <= self.morning.end {
            Some(TimeSlot::Morning)
        } else if start_time <= self.afternoon.end {
            Some(TimeSlot::Afternoon)
        } else {
            Some(TimeSlot::Evening)
        }
    }

    /// Check window ordering (each window starts after the previous ends)
    pub fn is_ordered(&self) -> bool {
        self.morning.start < self.morning.end
            && self.morning.end < self.afternoon.start
            && self.afternoon.start < self.afternoon.end
            && self.afternoon.end < self.evening.start
            && self.evening.start < self.evening.end
    }
}

impl Default for SlotPlan {
    /// Morning [10:00,14:30], Afternoon [14:31,18:30], Evening [18:31,23:30]
    fn default() -> Self {
        let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        Self {
            morning: SlotWindow::new(hm(10, 0), hm(14, 30)),
            afternoon: SlotWindow::new(hm(14, 31), hm(18, 30)),
            evening: SlotWindow::new(hm(18, 31), hm(23, 30)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_plan_is_ordered() {
        assert!(SlotPlan::default().is_ordered());
    }

    #[test]
    fn test_boundary_minutes_fall_on_opposite_sides() {
        let plan = SlotPlan::default();
        assert_eq!(plan.slot_for(hm(14, 30)), Some(TimeSlot::Morning));
        assert_eq!(plan.slot_for(hm(14, 31)), Some(TimeSlot::Afternoon));
        assert_eq!(plan.slot_for(hm(18, 30)), Some(TimeSlot::Afternoon));
        assert_eq!(plan.slot_for(hm(18, 31)), Some(TimeSlot::Evening));
    }

    #[test]
    fn test_outside_service_day_is_none() {
        let plan = SlotPlan::default();
        assert_eq!(plan.slot_for(hm(9, 59)), None);
        assert_eq!(plan.slot_for(hm(23, 31)), None);
        assert_eq!(plan.slot_for(hm(0, 0)), None);
    }

    #[test]
    fn test_every_serviceable_minute_has_exactly_one_slot() {
        let plan = SlotPlan::default();
        let mut t = plan.service_start();
        while t <= plan.service_end() {
            assert!(plan.slot_for(t).is_some(), "no slot for {}", t);
            t += chrono::Duration::minutes(1);
        }
    }
}
