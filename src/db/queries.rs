use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attendance_day::{AttendanceDay, DayStatus};
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventKind;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Events for one (subject, date), ascending by time; ties keep insertion
/// order via the id column so the accumulator sees a stable sequence.
pub fn load_events_for_day(
    pool: &mut DbPool,
    subject_id: i64,
    date: &NaiveDate,
) -> AppResult<Vec<AttendanceEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE subject_id = ?1 AND date = ?2
         ORDER BY time ASC, id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![subject_id, date_str], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_event_row(row: &Row) -> Result<AttendanceEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventKind(kind_str.clone())),
        )
    })?;

    Ok(AttendanceEvent {
        id: row.get("id")?,
        subject_id: row.get("subject_id")?,
        date,
        time,
        kind,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &AttendanceEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO events (subject_id, date, time, kind, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.subject_id,
            ev.date.format("%Y-%m-%d").to_string(),
            ev.time.format("%H:%M").to_string(),
            ev.kind.to_db_str(),
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(())
}

/// Rewrite the derived attendance_days row for one (subject, date).
/// One row per key; the summary is always recomputed from events, never
/// edited in place.
pub fn upsert_attendance_day(conn: &Connection, day: &AttendanceDay) -> AppResult<()> {
    conn.execute(
        "INSERT INTO attendance_days (subject_id, date, status, first_login, last_logout, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(subject_id, date) DO UPDATE SET
             status = excluded.status,
             first_login = excluded.first_login,
             last_logout = excluded.last_logout,
             updated_at = excluded.updated_at",
        params![
            day.subject_id,
            day.date.format("%Y-%m-%d").to_string(),
            day.status.to_db_str(),
            day.first_login.map(|t| t.format("%H:%M").to_string()),
            day.last_logout.map(|t| t.format("%H:%M").to_string()),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn load_attendance_day(
    conn: &Connection,
    subject_id: i64,
    date: &NaiveDate,
) -> AppResult<Option<AttendanceDay>> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let row = conn
        .query_row(
            "SELECT status, first_login, last_logout FROM attendance_days
             WHERE subject_id = ?1 AND date = ?2",
            params![subject_id, date_str],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            },
        )
        .optional()?;

    let Some((status_str, first, last)) = row else {
        return Ok(None);
    };

    let status = DayStatus::from_db_str(&status_str)
        .ok_or_else(|| AppError::Other(format!("Unknown day status: {}", status_str)))?;

    let parse_opt = |s: Option<String>| -> Option<NaiveTime> {
        s.and_then(|t| NaiveTime::parse_from_str(&t, "%H:%M").ok())
    };

    Ok(Some(AttendanceDay {
        subject_id,
        date: *date,
        status,
        first_login: parse_opt(first),
        last_logout: parse_opt(last),
    }))
}

/// Distinct subjects with at least one event on the given date.
pub fn subjects_with_events(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<i64>> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let mut stmt = pool.conn.prepare(
        "SELECT DISTINCT subject_id FROM events WHERE date = ?1 ORDER BY subject_id ASC",
    )?;

    let rows = stmt.query_map([date_str], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
