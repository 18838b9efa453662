use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::commission::CommissionRecord;
use crate::models::partner::Partner;
use crate::models::payout::{PayoutStatus, PayoutSummary};
use crate::utils::date::month_abbrev;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------
// Partners
// ---------------------------------------------------------------

pub fn insert_partner(conn: &Connection, name: &str, rate: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO partners (name, commission_rate, created_at) VALUES (?1, ?2, ?3)",
        params![name, rate, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_partner(conn: &Connection, partner_id: i64) -> AppResult<Option<Partner>> {
    let partner = conn
        .query_row(
            "SELECT id, name, commission_rate, created_at FROM partners WHERE id = ?1",
            [partner_id],
            |row| {
                Ok(Partner {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    commission_rate: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(partner)
}

pub fn list_partners(pool: &mut DbPool) -> AppResult<Vec<Partner>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, name, commission_rate, created_at FROM partners ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Partner {
            id: row.get(0)?,
            name: row.get(1)?,
            commission_rate: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_partner_rate(conn: &Connection, partner_id: i64, rate: &str) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE partners SET commission_rate = ?1 WHERE id = ?2",
        params![rate, partner_id],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------
// Commission records
// ---------------------------------------------------------------

fn parse_decimal_col(raw: String) -> Result<Decimal> {
    raw.parse::<Decimal>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAmount(raw)),
        )
    })
}

pub fn map_commission_row(row: &Row) -> Result<CommissionRecord> {
    let sale_date_str: String = row.get("sale_date")?;
    let sale_date = NaiveDate::parse_from_str(&sale_date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(sale_date_str.clone())),
        )
    })?;

    Ok(CommissionRecord {
        id: row.get("id")?,
        partner_id: row.get("partner_id")?,
        booking_id: row.get("booking_id")?,
        booking_total: parse_decimal_col(row.get("booking_total")?)?,
        amount: parse_decimal_col(row.get("amount")?)?,
        sale_date,
        month: row.get("month")?,
        year: row.get("year")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_commission(conn: &Connection, rec: &CommissionRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO commissions (partner_id, booking_id, booking_total, amount, sale_date, month, year, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            rec.partner_id,
            rec.booking_id,
            rec.booking_total.to_string(),
            rec.amount.to_string(),
            rec.sale_date.format("%Y-%m-%d").to_string(),
            rec.month,
            rec.year,
            rec.created_at,
        ],
    )?;
    Ok(())
}

/// Records for one (partner, month, year) key. The month filter matches
/// both the canonical name and the 3-letter form: historical rows may
/// carry either.
pub fn load_commissions_for_key(
    conn: &Connection,
    partner_id: i64,
    month: &str,
    year: i32,
) -> AppResult<Vec<CommissionRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM commissions
         WHERE partner_id = ?1 AND year = ?2 AND month IN (?3, ?4)
         ORDER BY sale_date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![partner_id, year, month, month_abbrev(month)],
        map_commission_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_commissions_for_partner(
    conn: &Connection,
    partner_id: i64,
) -> AppResult<Vec<CommissionRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM commissions
         WHERE partner_id = ?1
         ORDER BY year ASC, sale_date ASC, id ASC",
    )?;

    let rows = stmt.query_map([partner_id], map_commission_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_commissions_for_partner(conn: &Connection, partner_id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM commissions WHERE partner_id = ?1", [partner_id])?;
    Ok(n)
}

/// Every distinct (partner, month, year) key present in the commissions
/// table, for bulk refresh.
pub fn distinct_commission_keys(conn: &Connection) -> AppResult<Vec<(i64, String, i32)>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT partner_id, month, year FROM commissions
         ORDER BY partner_id ASC, year ASC, month ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, i32>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------
// Payout summaries
// ---------------------------------------------------------------

fn map_summary_row(row: &Row) -> Result<PayoutSummary> {
    let status_str: String = row.get("status")?;
    let status = PayoutStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(PayoutSummary {
        partner_id: row.get("partner_id")?,
        month: row.get("month")?,
        year: row.get("year")?,
        total_count: row.get("total_count")?,
        total_amount: parse_decimal_col(row.get("total_amount")?)?,
        status,
    })
}

pub fn load_summary(
    conn: &Connection,
    partner_id: i64,
    month: &str,
    year: i32,
) -> AppResult<Option<PayoutSummary>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM payout_summaries
         WHERE partner_id = ?1 AND year = ?2 AND month IN (?3, ?4)",
    )?;

    let summary = stmt
        .query_row(
            params![partner_id, year, month, month_abbrev(month)],
            map_summary_row,
        )
        .optional()?;
    Ok(summary)
}

pub fn insert_summary(conn: &Connection, summary: &PayoutSummary) -> AppResult<()> {
    conn.execute(
        "INSERT INTO payout_summaries (partner_id, month, year, total_count, total_amount, status, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            summary.partner_id,
            summary.month,
            summary.year,
            summary.total_count,
            summary.total_amount.to_string(),
            summary.status.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Overwrite only count/amount of an existing summary; status is left as
/// stored. The month filter matches both forms so a legacy "Dec" row is
/// updated in place rather than duplicated under "December".
pub fn update_summary_totals(
    conn: &Connection,
    partner_id: i64,
    month: &str,
    year: i32,
    total_count: i64,
    total_amount: Decimal,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE payout_summaries
         SET total_count = ?1, total_amount = ?2, updated_at = ?3
         WHERE partner_id = ?4 AND year = ?5 AND month IN (?6, ?7)",
        params![
            total_count,
            total_amount.to_string(),
            Local::now().to_rfc3339(),
            partner_id,
            year,
            month,
            month_abbrev(month),
        ],
    )?;
    Ok(n)
}

pub fn update_summary_status(
    conn: &Connection,
    partner_id: i64,
    month: &str,
    year: i32,
    status: PayoutStatus,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE payout_summaries
         SET status = ?1, updated_at = ?2
         WHERE partner_id = ?3 AND year = ?4 AND month IN (?5, ?6)",
        params![
            status.to_db_str(),
            Local::now().to_rfc3339(),
            partner_id,
            year,
            month,
            month_abbrev(month),
        ],
    )?;
    Ok(n)
}

/// Bulk administrative reset: put every summary for a (month, year) back
/// to Pending, regardless of the current status.
pub fn reset_summaries_for_month(
    conn: &Connection,
    month: &str,
    year: i32,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE payout_summaries
         SET status = 'pending', updated_at = ?1
         WHERE year = ?2 AND month IN (?3, ?4)",
        params![Local::now().to_rfc3339(), year, month, month_abbrev(month)],
    )?;
    Ok(n)
}

pub fn list_summaries(pool: &mut DbPool) -> AppResult<Vec<PayoutSummary>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM payout_summaries ORDER BY partner_id ASC, year ASC, month ASC",
    )?;

    let rows = stmt.query_map([], map_summary_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
