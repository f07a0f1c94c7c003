//! Time utilities: parsing HH:MM, minute arithmetic, display formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Parse a "HH:MM" 24-hour clock time. Returns None on malformed input;
/// callers decide whether absence is an error.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Minutes elapsed from `start` to `end` on the same day.
/// Negative when `end` precedes `start`; shifts never cross midnight here.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Format a time range for display, e.g. "08:00 AM - 05:00 PM".
pub fn format_time_range(start: NaiveTime, end: NaiveTime) -> String {
    format!(
        "{} - {}",
        start.format("%I:%M %p"),
        end.format("%I:%M %p")
    )
}

/// A missing value is fine; a present but malformed one is an error.
pub fn parse_optional_time(input: Option<&str>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Same as [`parse_optional_time`] but the value is mandatory.
pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

/// Build a NaiveTime from minutes since midnight, None past 23:59.
pub fn time_from_minutes(mins: i64) -> Option<NaiveTime> {
    if !(0..1440).contains(&mins) {
        return None;
    }
    NaiveTime::from_hms_opt((mins / 60) as u32, (mins % 60) as u32, 0)
}

/// Minutes since midnight for a clock time.
pub fn minutes_from_midnight(t: NaiveTime) -> i64 {
    minutes_between(NaiveTime::MIN, t)
}
