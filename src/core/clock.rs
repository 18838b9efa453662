use crate::core::accumulator;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, load_events_for_day, upsert_attendance_day};
use crate::errors::{AppError, AppResult};
use crate::models::attendance_day::{AttendanceDay, DayStatus};
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventKind;
use crate::models::interval::DayTimeline;
use crate::ui::messages::success;
use crate::utils::formatting::mins2readable;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `clock` command.
pub struct ClockLogic;

impl ClockLogic {
    /// Record login and/or logout events for a subject-day, then rebuild
    /// and persist the derived attendance_days row.
    ///
    /// Events are append-only: no validation of ordering against what is
    /// already stored. A doubled login or an orphan logout is tolerated
    /// and resolved by the accumulator at read time.
    pub fn apply(
        pool: &mut DbPool,
        subject_id: i64,
        date: NaiveDate,
        login: Option<NaiveTime>,
        logout: Option<NaiveTime>,
    ) -> AppResult<DayTimeline> {
        if login.is_none() && logout.is_none() {
            return Err(AppError::InvalidTime(
                "Nothing to do: specify at least --in or --out.".into(),
            ));
        }

        if let Some(t) = login {
            let ev = AttendanceEvent::new(0, subject_id, date, t, EventKind::Login);
            insert_event(&pool.conn, &ev)?;
            success(format!(
                "Recorded login at {} for subject {} on {}.",
                t.format("%H:%M"),
                subject_id,
                date
            ));
        }

        if let Some(t) = logout {
            let ev = AttendanceEvent::new(0, subject_id, date, t, EventKind::Logout);
            insert_event(&pool.conn, &ev)?;
            success(format!(
                "Recorded logout at {} for subject {} on {}.",
                t.format("%H:%M"),
                subject_id,
                date
            ));
        }

        Self::rebuild_day(pool, subject_id, date)
    }

    /// Re-accumulate one subject-day from its events and upsert the
    /// attendance_days summary.
    pub fn rebuild_day(
        pool: &mut DbPool,
        subject_id: i64,
        date: NaiveDate,
    ) -> AppResult<DayTimeline> {
        let events = load_events_for_day(pool, subject_id, &date)?;
        let timeline = accumulator::accumulate(&events);

        let day = AttendanceDay {
            subject_id,
            date,
            status: if timeline.total_minutes > 0 {
                DayStatus::Present
            } else {
                DayStatus::Absent
            },
            first_login: timeline.first_login.map(|ts| ts.time()),
            last_logout: timeline.last_logout.map(|ts| ts.time()),
        };

        upsert_attendance_day(&pool.conn, &day)?;

        Ok(timeline)
    }

    /// One-line console rendering of a day, used by `clock` and `day`.
    pub fn describe(timeline: &DayTimeline) -> String {
        let worked = mins2readable(timeline.total_minutes, true);
        let sessions = timeline.intervals.len();
        let active = if timeline.has_active_session {
            " (active session)"
        } else {
            ""
        };
        format!("{} worked over {} session(s){}", worked, sessions, active)
    }
}
