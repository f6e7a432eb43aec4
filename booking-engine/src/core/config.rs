//! Engine configuration
//!
//! Slot boundaries and capacities are configuration data, never
//! hard-coded in the engines, so the admission soft-limit policy can be
//! tuned without code changes.

use serde::{Deserialize, Serialize};
use shared::models::{SlotPlan, SlotWindow, TimeSlot};
use shared::{AppError, AppResult};

use crate::utils::time::parse_clock;

/// Configured maximum guests per slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotCapacities {
    pub morning: i32,
    pub afternoon: i32,
    pub evening: i32,
}

impl SlotCapacities {
    /// Same capacity for all three slots
    pub fn uniform(capacity: i32) -> Self {
        Self {
            morning: capacity,
            afternoon: capacity,
            evening: capacity,
        }
    }

    pub fn capacity(&self, slot: TimeSlot) -> i32 {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
        }
    }
}

impl Default for SlotCapacities {
    fn default() -> Self {
        Self::uniform(DEFAULT_SLOT_CAPACITY)
    }
}

const DEFAULT_SLOT_CAPACITY: i32 = 30;
const DEFAULT_COVER_CHARGE: f64 = 2.0;

/// Engine configuration
///
/// # Environment variables
///
/// All values can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MORNING_WINDOW | 10:00-14:30 | Morning slot boundaries (HH:MM-HH:MM) |
/// | AFTERNOON_WINDOW | 14:31-18:30 | Afternoon slot boundaries |
/// | EVENING_WINDOW | 18:31-23:30 | Evening slot boundaries |
/// | MORNING_CAPACITY | 30 | Max guests in the morning slot |
/// | AFTERNOON_CAPACITY | 30 | Max guests in the afternoon slot |
/// | EVENING_CAPACITY | 30 | Max guests in the evening slot |
/// | COVER_CHARGE | 2.00 | Per-person cover charge for reception bookings |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// The three daily service windows
    pub slot_plan: SlotPlan,
    /// Maximum guests per slot (soft limit, see admission control)
    pub capacities: SlotCapacities,
    /// Per-person cover charge for booking kinds that carry one
    pub cover_charge: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot_plan: SlotPlan::default(),
            capacities: SlotCapacities::default(),
            cover_charge: DEFAULT_COVER_CHARGE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = SlotPlan::default();
        Self {
            slot_plan: SlotPlan {
                morning: env_window("MORNING_WINDOW", defaults.morning),
                afternoon: env_window("AFTERNOON_WINDOW", defaults.afternoon),
                evening: env_window("EVENING_WINDOW", defaults.evening),
            },
            capacities: SlotCapacities {
                morning: env_parse("MORNING_CAPACITY", DEFAULT_SLOT_CAPACITY),
                afternoon: env_parse("AFTERNOON_CAPACITY", DEFAULT_SLOT_CAPACITY),
                evening: env_parse("EVENING_CAPACITY", DEFAULT_SLOT_CAPACITY),
            },
            cover_charge: env_parse("COVER_CHARGE", DEFAULT_COVER_CHARGE),
        }
    }

    /// Validate configuration invariants
    pub fn validate(&self) -> AppResult<()> {
        if !self.slot_plan.is_ordered() {
            return Err(AppError::internal(
                "slot plan windows must be ordered and non-overlapping",
            ));
        }
        for slot in TimeSlot::ALL {
            if self.capacities.capacity(slot) <= 0 {
                return Err(AppError::internal(format!(
                    "{} capacity must be positive",
                    slot
                )));
            }
        }
        if !self.cover_charge.is_finite() || self.cover_charge < 0.0 {
            return Err(AppError::internal(format!(
                "cover_charge must be a non-negative number, got {}",
                self.cover_charge
            )));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(var: &str, default: T) -> T {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parse a window override ("HH:MM-HH:MM"), falling back on any error
fn env_window(var: &str, default: SlotWindow) -> SlotWindow {
    match std::env::var(var) {
        Ok(raw) => match parse_window(&raw) {
            Ok(window) => window,
            Err(e) => {
                tracing::warn!("Ignoring {}='{}': {}, using default", var, raw, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_window(raw: &str) -> AppResult<SlotWindow> {
    let (start, end) = raw
        .split_once('-')
        .ok_or_else(|| AppError::validation(format!("expected HH:MM-HH:MM, got {}", raw)))?;
    let window = SlotWindow::new(parse_clock(start.trim())?, parse_clock(end.trim())?);
    if window.start >= window.end {
        return Err(AppError::validation(format!(
            "window start {} is not before end {}",
            window.start, window.end
        )));
    }
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        let mut config = Config::default();
        config.capacities.afternoon = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_cover_charge() {
        let mut config = Config::default();
        config.cover_charge = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_window() {
        let window = parse_window("10:00-14:30").unwrap();
        assert_eq!(window.start, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(window.end, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert!(parse_window("14:30").is_err());
        assert!(parse_window("18:00-10:00").is_err());
    }
}
