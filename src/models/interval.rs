use chrono::NaiveDateTime;
use serde::Serialize;

/// One paired login/logout span. `end` is absent only for the most recent
/// interval of the day, denoting an open/active session.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceInterval {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub duration_minutes: i64,
}

/// Result of pairing one day's events: chronological intervals plus the
/// derived totals the persistence layer writes back.
#[derive(Debug, Default, Clone)]
pub struct DayTimeline {
    pub intervals: Vec<AttendanceInterval>,
    pub total_minutes: i64,
    pub has_active_session: bool,
    pub first_login: Option<NaiveDateTime>,
    pub last_logout: Option<NaiveDateTime>,
}
