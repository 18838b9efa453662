use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EventExport, PayoutExport};
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use rusqlite::{Row, params};
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export attendance events or payout summaries.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or `YYYY` / `YYYY-MM` / `YYYY-MM-DD`
    ///   forms, with `start:end` intervals (events only; payouts carry
    ///   their own month/year key)
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        payouts: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        if payouts {
            let rows = load_payouts(pool)?;

            if rows.is_empty() {
                warning("No payout summaries to export.");
                return Ok(());
            }

            match format {
                ExportFormat::Csv => export_csv(&rows, path)?,
                ExportFormat::Json => export_json(&rows, path)?,
            }
            return Ok(());
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_events(pool, date_bounds)?;

        if rows.is_empty() {
            warning("No events found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

fn load_events(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EventExport>> {
    let conn = &mut pool.conn;

    let mut events = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, subject_id, date, time, kind, source
                 FROM events
                 ORDER BY date ASC, time ASC, id ASC",
            )?;

            let rows = stmt.query_map([], map_event_row)?;

            for r in rows {
                events.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT id, subject_id, date, time, kind, source
                 FROM events
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC, time ASC, id ASC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_event_row)?;

            for r in rows {
                events.push(r?);
            }
        }
    }

    Ok(events)
}

fn map_event_row(row: &Row<'_>) -> rusqlite::Result<EventExport> {
    Ok(EventExport {
        id: row.get(0)?,
        subject_id: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        kind: row.get(4)?,
        source: row.get(5)?,
    })
}

fn load_payouts(pool: &mut DbPool) -> AppResult<Vec<PayoutExport>> {
    let mut stmt = pool.conn.prepare(
        "SELECT partner_id, month, year, total_count, total_amount, status
         FROM payout_summaries
         ORDER BY partner_id ASC, year ASC, month ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(PayoutExport {
            partner_id: row.get(0)?,
            month: row.get(1)?,
            year: row.get(2)?,
            total_count: row.get(3)?,
            total_amount: row.get(4)?,
            status: row.get(5)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
