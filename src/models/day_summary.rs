use serde::Serialize;

/// Result of the payable-hours calculation for one entry.
/// `deduction_minutes` is informational: the actual break duration is
/// already excluded from `hours_worked`, the flat deduction is not
/// subtracted a second time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoursSummary {
    pub hours_worked: f64,
    pub deduction_minutes: i64,
}
