use super::event_kind::EventKind;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A single time-clock action for one subject (agent).
/// Immutable once created; never deleted in normal operation.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub id: i64,
    pub subject_id: i64,
    pub date: NaiveDate,  // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,  // ⇔ events.time (TEXT "HH:MM")
    pub kind: EventKind,  // ⇔ events.kind ('login' | 'logout')
    pub source: String,   // ⇔ events.source (TEXT, default 'cli')
    pub created_at: String, // ⇔ events.created_at (TEXT, ISO8601)
}

impl AttendanceEvent {
    /// High-level constructor for events created from the CLI.
    pub fn new(id: i64, subject_id: i64, date: NaiveDate, time: NaiveTime, kind: EventKind) -> Self {
        Self {
            id,
            subject_id,
            date,
            time,
            kind,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
