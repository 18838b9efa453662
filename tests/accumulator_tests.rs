use agentledger::core::accumulator::accumulate;
use agentledger::models::event::AttendanceEvent;
use agentledger::models::event_kind::EventKind;
use chrono::{NaiveDate, NaiveTime};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 2).unwrap()
}

fn t(hm: &str) -> NaiveTime {
    NaiveTime::parse_from_str(hm, "%H:%M").unwrap()
}

fn ev(id: i64, hm: &str, kind: EventKind) -> AttendanceEvent {
    AttendanceEvent::new(id, 7, day(), t(hm), kind)
}

#[test]
fn empty_events_yield_default_timeline() {
    let timeline = accumulate(&[]);

    assert!(timeline.intervals.is_empty());
    assert_eq!(timeline.total_minutes, 0);
    assert!(!timeline.has_active_session);
    assert!(timeline.first_login.is_none());
    assert!(timeline.last_logout.is_none());
}

#[test]
fn balanced_pairs_sum_durations() {
    let events = vec![
        ev(1, "09:00", EventKind::Login),
        ev(2, "12:00", EventKind::Logout),
        ev(3, "13:00", EventKind::Login),
        ev(4, "17:30", EventKind::Logout),
    ];

    let timeline = accumulate(&events);

    assert_eq!(timeline.intervals.len(), 2);
    assert_eq!(timeline.intervals[0].duration_minutes, 180);
    assert_eq!(timeline.intervals[1].duration_minutes, 270);
    assert_eq!(timeline.total_minutes, 450);
    assert!(!timeline.has_active_session);
    assert_eq!(timeline.first_login, Some(day().and_time(t("09:00"))));
    assert_eq!(timeline.last_logout, Some(day().and_time(t("17:30"))));
}

#[test]
fn double_login_discards_the_open_one() {
    let events = vec![
        ev(1, "09:00", EventKind::Login),
        ev(2, "09:05", EventKind::Login),
        ev(3, "09:30", EventKind::Logout),
    ];

    let timeline = accumulate(&events);

    assert_eq!(timeline.intervals.len(), 1);
    assert_eq!(timeline.intervals[0].start, day().and_time(t("09:05")));
    assert_eq!(timeline.intervals[0].end, Some(day().and_time(t("09:30"))));
    assert_eq!(timeline.total_minutes, 25);
    assert!(!timeline.has_active_session);
}

#[test]
fn orphan_logout_is_ignored() {
    let events = vec![
        ev(1, "08:00", EventKind::Logout),
        ev(2, "09:00", EventKind::Login),
        ev(3, "10:00", EventKind::Logout),
    ];

    let timeline = accumulate(&events);

    assert_eq!(timeline.intervals.len(), 1);
    assert_eq!(timeline.total_minutes, 60);
    assert_eq!(timeline.first_login, Some(day().and_time(t("09:00"))));
}

#[test]
fn logout_only_day_has_no_intervals() {
    let events = vec![ev(1, "10:00", EventKind::Logout)];

    let timeline = accumulate(&events);

    assert!(timeline.intervals.is_empty());
    assert_eq!(timeline.total_minutes, 0);
    assert!(!timeline.has_active_session);
}

#[test]
fn trailing_login_leaves_an_open_interval() {
    let events = vec![
        ev(1, "09:00", EventKind::Login),
        ev(2, "12:00", EventKind::Logout),
        ev(3, "13:00", EventKind::Login),
    ];

    let timeline = accumulate(&events);

    assert_eq!(timeline.intervals.len(), 2);
    assert!(timeline.intervals[1].end.is_none());
    assert_eq!(timeline.intervals[1].duration_minutes, 0);
    // Open interval contributes nothing to the total.
    assert_eq!(timeline.total_minutes, 180);
    assert!(timeline.has_active_session);
    assert_eq!(timeline.last_logout, Some(day().and_time(t("12:00"))));
}

#[test]
fn unsorted_input_is_paired_in_time_order() {
    let events = vec![
        ev(3, "13:00", EventKind::Login),
        ev(1, "09:00", EventKind::Login),
        ev(4, "17:00", EventKind::Logout),
        ev(2, "12:00", EventKind::Logout),
    ];

    let timeline = accumulate(&events);

    assert_eq!(timeline.intervals.len(), 2);
    assert_eq!(timeline.total_minutes, 180 + 240);
    assert!(!timeline.has_active_session);
}

#[test]
fn same_minute_events_keep_insertion_order() {
    // Login and logout in the same minute: the stable sort keeps the
    // insertion order, so the pair closes with a zero duration.
    let events = vec![
        ev(1, "09:00", EventKind::Login),
        ev(2, "09:00", EventKind::Logout),
    ];

    let timeline = accumulate(&events);

    assert_eq!(timeline.intervals.len(), 1);
    assert_eq!(timeline.intervals[0].duration_minutes, 0);
    assert_eq!(timeline.total_minutes, 0);
    assert!(!timeline.has_active_session);
}
