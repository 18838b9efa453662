use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DayStatus {
    Present,
    Absent,
}

impl DayStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DayStatus::Present => "present",
            DayStatus::Absent => "absent",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "present" => Some(DayStatus::Present),
            "absent" => Some(DayStatus::Absent),
            _ => None,
        }
    }
}

/// Persisted per-(subject, date) summary. One row per key, rewritten each
/// time the day's events are re-accumulated.
/// Invariant: status = Present iff the day's closed intervals sum to > 0.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceDay {
    pub subject_id: i64,
    pub date: NaiveDate,
    pub status: DayStatus,
    pub first_login: Option<NaiveTime>,
    pub last_logout: Option<NaiveTime>,
}
