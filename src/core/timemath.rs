//! Pure work/break time rules: ordering validation, payable-hours
//! calculation with the flat break deduction, and the break-window
//! suggestion helper. No I/O.
//!
//! Known limitation: shifts crossing midnight are not supported. An end
//! time at or before the start time is always rejected, night shifts
//! included.

use crate::errors::{AppError, AppResult};
use crate::models::day_summary::HoursSummary;
use crate::utils::time::{minutes_between, minutes_from_midnight, time_from_minutes};
use chrono::NaiveTime;

/// Breaks at or under this many minutes cost nothing.
const FREE_BREAK_MINUTES: i64 = 30;

/// Flat deduction flagged once a break exceeds the free allowance.
const FLAT_DEDUCTION_MINUTES: i64 = 30;

/// Work spans shorter than this get no suggested break.
const MIN_SPAN_FOR_BREAK_MINUTES: i64 = 360;

/// Validate work and break ordering. Rules are checked in a fixed order and
/// the first violation is reported alone; later rules are not evaluated.
pub fn validate_times(
    work_start: NaiveTime,
    break_start: Option<NaiveTime>,
    break_end: Option<NaiveTime>,
    work_end: NaiveTime,
) -> AppResult<()> {
    if work_start >= work_end {
        return Err(AppError::TimeOrdering(
            "Work start time must be before work end time".into(),
        ));
    }

    if break_start.is_some() != break_end.is_some() {
        return Err(AppError::TimeOrdering(
            "Both break start and end times must be set".into(),
        ));
    }

    if let (Some(bs), Some(be)) = (break_start, break_end) {
        if bs >= be {
            return Err(AppError::TimeOrdering(
                "Break start time must be before break end time".into(),
            ));
        }
        if bs <= work_start {
            return Err(AppError::TimeOrdering(
                "Break cannot start before work starts".into(),
            ));
        }
        if be >= work_end {
            return Err(AppError::TimeOrdering(
                "Break cannot end after work ends".into(),
            ));
        }
    }

    Ok(())
}

/// Flat deduction for a break: 0 when the break stays within the free
/// allowance, otherwise a fixed 30 minutes regardless of length.
pub fn break_deduction(break_start: NaiveTime, break_end: NaiveTime) -> i64 {
    let break_duration = minutes_between(break_start, break_end);
    if break_duration <= FREE_BREAK_MINUTES {
        0
    } else {
        FLAT_DEDUCTION_MINUTES
    }
}

/// Worked hours and deduction flag for one entry.
/// Total minutes subtract the *actual* break duration; the flat deduction
/// is reported alongside for display and is never applied to the total.
pub fn calculate_hours(
    work_start: NaiveTime,
    break_start: Option<NaiveTime>,
    break_end: Option<NaiveTime>,
    work_end: NaiveTime,
) -> HoursSummary {
    let mut total_minutes = minutes_between(work_start, work_end);
    let mut deduction_minutes = 0;

    if let (Some(bs), Some(be)) = (break_start, break_end) {
        total_minutes -= minutes_between(bs, be);
        deduction_minutes = break_deduction(bs, be);
    }

    HoursSummary {
        hours_worked: (total_minutes as f64 / 60.0 * 100.0).round() / 100.0,
        deduction_minutes,
    }
}

/// Suggest a 60-minute break centered on the workday midpoint, used only to
/// prefill form defaults. Spans under 6 hours get no suggestion.
///
/// Intentionally independent of [`validate_times`]: the suggestion is not
/// re-checked against the break rules before display.
pub fn suggest_break_window(
    work_start: NaiveTime,
    work_end: NaiveTime,
) -> Option<(NaiveTime, NaiveTime)> {
    let start_minutes = minutes_from_midnight(work_start);
    let total_minutes = minutes_between(work_start, work_end);

    if total_minutes < MIN_SPAN_FOR_BREAK_MINUTES {
        return None;
    }

    let mid_minutes = start_minutes + total_minutes / 2;
    let break_start = time_from_minutes(mid_minutes - 30)?;
    let break_end = time_from_minutes(mid_minutes + 30)?;

    Some((break_start, break_end))
}
