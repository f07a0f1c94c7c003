use super::location::Location;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One user's work record for one day.
/// Exactly one row exists per (user_id, entry_date); saving again replaces
/// the times and the whole location sequence.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: i64,
    pub entry_date: NaiveDate,  // ⇔ daily_entries.entry_date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime,  // ⇔ daily_entries.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,    // ⇔ daily_entries.end_time (TEXT "HH:MM")
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub updated_at: String,     // ⇔ daily_entries.updated_at (TEXT, store clock)
    pub locations: Vec<SequencedLocation>,
}

/// A location visited on a given day, with its 1-based rank in the route.
#[derive(Debug, Clone, Serialize)]
pub struct SequencedLocation {
    pub position: i64,
    pub location: Location,
}

impl TimeEntry {
    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    pub fn date_str(&self) -> String {
        self.entry_date.format("%Y-%m-%d").to_string()
    }

    /// Ids in visit order, e.g. to prefill a sequencer for editing.
    pub fn location_ids(&self) -> Vec<i64> {
        self.locations.iter().map(|sl| sl.location.id).collect()
    }
}
