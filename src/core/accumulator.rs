//! Pairing of login/logout events into intervals for one subject-day.

use crate::models::event::AttendanceEvent;
use crate::models::interval::{AttendanceInterval, DayTimeline};
use chrono::NaiveDateTime;

/// Pair one day's events into intervals and compute the worked total.
///
/// The caller supplies events already filtered to a single
/// (subject, date); they are re-sorted here by timestamp with a stable
/// sort, so same-minute events keep their insertion order.
///
/// Malformed sequences never fail:
/// - a login while another login is open discards the open one and takes
///   its place (no interval is emitted for the discarded login);
/// - a logout with no open login is ignored;
/// - a login left open at the end of the day becomes an interval with no
///   end, contributes 0 to the total and flags the day as having an
///   active session.
pub fn accumulate(events: &[AttendanceEvent]) -> DayTimeline {
    if events.is_empty() {
        return DayTimeline::default();
    }

    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.timestamp());

    let mut intervals: Vec<AttendanceInterval> = Vec::new();
    let mut total = 0;
    let mut open_login: Option<NaiveDateTime> = None;

    for ev in &sorted {
        if ev.kind.is_login() {
            // Double login: the previous open login is dropped as observed
            // in the source system, not closed.
            open_login = Some(ev.timestamp());
        } else if let Some(start) = open_login.take() {
            let end = ev.timestamp();
            let duration = (end - start).num_minutes();
            total += duration;

            intervals.push(AttendanceInterval {
                start,
                end: Some(end),
                duration_minutes: duration,
            });
        }
        // Orphan logout: no open login, nothing to emit.
    }

    let has_active_session = if let Some(start) = open_login {
        intervals.push(AttendanceInterval {
            start,
            end: None,
            duration_minutes: 0,
        });
        true
    } else {
        false
    };

    let first_login = intervals.first().map(|iv| iv.start);
    let last_logout = intervals.iter().filter_map(|iv| iv.end).next_back();

    DayTimeline {
        intervals,
        total_minutes: total,
        has_active_session,
        first_login,
        last_logout,
    }
}
