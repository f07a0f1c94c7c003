use chrono::NaiveTime;
use sitelog::core::timemath::{
    break_deduction, calculate_hours, suggest_break_window, validate_times,
};
use sitelog::errors::AppError;
use sitelog::utils::time::{format_minutes, format_time_range, parse_time};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// ---------------------------------------------------------------------------
// parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_time_valid_and_invalid() {
    assert_eq!(parse_time("08:00"), Some(t(8, 0)));
    assert_eq!(parse_time("23:59"), Some(t(23, 59)));

    assert_eq!(parse_time("24:00"), None);
    assert_eq!(parse_time("12:60"), None);
    assert_eq!(parse_time("0800"), None);
    assert_eq!(parse_time("ab:cd"), None);
    assert_eq!(parse_time(""), None);
    assert_eq!(parse_time("08:00:00"), None);
}

#[test]
fn test_display_formatting() {
    assert_eq!(format_minutes(495), "08:15");
    assert_eq!(format_minutes(-30), "-00:30");
    assert_eq!(format_time_range(t(8, 0), t(17, 0)), "08:00 AM - 05:00 PM");
}

// ---------------------------------------------------------------------------
// validation priority order
// ---------------------------------------------------------------------------

fn ordering_msg(err: AppError) -> String {
    match err {
        AppError::TimeOrdering(msg) => msg,
        other => panic!("expected TimeOrdering, got {other:?}"),
    }
}

#[test]
fn test_validate_work_span_checked_first() {
    // Inverted work span wins even when break fields are also broken
    let err = validate_times(t(17, 0), Some(t(12, 0)), None, t(8, 0)).unwrap_err();
    assert_eq!(
        ordering_msg(err),
        "Work start time must be before work end time"
    );

    let err = validate_times(t(9, 0), None, None, t(9, 0)).unwrap_err();
    assert_eq!(
        ordering_msg(err),
        "Work start time must be before work end time"
    );
}

#[test]
fn test_validate_break_fields_both_or_neither() {
    let err = validate_times(t(8, 0), Some(t(12, 0)), None, t(17, 0)).unwrap_err();
    assert_eq!(
        ordering_msg(err),
        "Both break start and end times must be set"
    );

    let err = validate_times(t(8, 0), None, Some(t(12, 30)), t(17, 0)).unwrap_err();
    assert_eq!(
        ordering_msg(err),
        "Both break start and end times must be set"
    );
}

#[test]
fn test_validate_break_ordering() {
    let err = validate_times(t(8, 0), Some(t(13, 0)), Some(t(12, 0)), t(17, 0)).unwrap_err();
    assert_eq!(
        ordering_msg(err),
        "Break start time must be before break end time"
    );

    let err = validate_times(t(8, 0), Some(t(8, 0)), Some(t(12, 0)), t(17, 0)).unwrap_err();
    assert_eq!(ordering_msg(err), "Break cannot start before work starts");

    let err = validate_times(t(8, 0), Some(t(12, 0)), Some(t(17, 0)), t(17, 0)).unwrap_err();
    assert_eq!(ordering_msg(err), "Break cannot end after work ends");
}

#[test]
fn test_validate_accepts_good_entries() {
    assert!(validate_times(t(8, 0), None, None, t(17, 0)).is_ok());
    assert!(validate_times(t(8, 0), Some(t(12, 0)), Some(t(12, 30)), t(17, 0)).is_ok());
}

// ---------------------------------------------------------------------------
// hours + deduction
// ---------------------------------------------------------------------------

#[test]
fn test_hours_without_break() {
    let s = calculate_hours(t(9, 0), None, None, t(17, 30));
    assert_eq!(s.hours_worked, 8.5);
    assert_eq!(s.deduction_minutes, 0);
}

#[test]
fn test_short_break_costs_nothing_extra() {
    // 480 minute span, 30 minute break: actual break excluded, no deduction
    let s = calculate_hours(t(8, 0), Some(t(12, 0)), Some(t(12, 30)), t(16, 0));
    assert_eq!(s.hours_worked, 7.5);
    assert_eq!(s.deduction_minutes, 0);
}

#[test]
fn test_long_break_flags_flat_deduction_only() {
    // 540 - 45 = 495 minutes = 8.25 h; deduction is flagged as 30 but the
    // total subtracts the actual 45, never 45 + 30
    let s = calculate_hours(t(8, 0), Some(t(12, 0)), Some(t(12, 45)), t(17, 0));
    assert_eq!(s.hours_worked, 8.25);
    assert_eq!(s.deduction_minutes, 30);
}

#[test]
fn test_deduction_boundary_at_30_minutes() {
    assert_eq!(break_deduction(t(12, 0), t(12, 30)), 0);
    assert_eq!(break_deduction(t(12, 0), t(12, 31)), 30);
    assert_eq!(break_deduction(t(12, 0), t(14, 0)), 30);

    // 31 minute break: total drops by the actual 31 minutes
    let s = calculate_hours(t(8, 0), Some(t(12, 0)), Some(t(12, 31)), t(16, 0));
    assert_eq!(s.hours_worked, 7.48); // (480 - 31) / 60 rounded to 2 dp
    assert_eq!(s.deduction_minutes, 30);
}

// ---------------------------------------------------------------------------
// break window suggestion
// ---------------------------------------------------------------------------

#[test]
fn test_no_suggestion_under_six_hours() {
    assert_eq!(suggest_break_window(t(9, 0), t(14, 59)), None);
}

#[test]
fn test_suggestion_centered_on_midpoint() {
    // 08:00-16:00, midpoint 12:00
    assert_eq!(
        suggest_break_window(t(8, 0), t(16, 0)),
        Some((t(11, 30), t(12, 30)))
    );

    // exactly six hours still qualifies
    assert_eq!(
        suggest_break_window(t(8, 0), t(14, 0)),
        Some((t(10, 30), t(11, 30)))
    );

    // odd span truncates the midpoint to the minute: 540 / 2 = 270
    assert_eq!(
        suggest_break_window(t(8, 0), t(17, 0)),
        Some((t(12, 0), t(13, 0)))
    );
}
