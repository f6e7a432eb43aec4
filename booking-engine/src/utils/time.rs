//! Time parsing helpers
//!
//! Date and clock-time parsing happens once at the caller boundary;
//! engine functions only receive `NaiveDate` / `NaiveTime`.

use chrono::{NaiveDate, NaiveTime};
use shared::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a clock time string (HH:MM)
pub fn parse_clock(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}
