use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id   INTEGER NOT NULL,
            date         TEXT NOT NULL,
            time         TEXT NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN ('login','logout')),
            source       TEXT NOT NULL DEFAULT 'cli',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_subject_date ON events(subject_id, date, time);
        CREATE INDEX IF NOT EXISTS idx_events_date_kind ON events(date, kind);
        "#,
    )?;
    Ok(())
}

fn create_attendance_days_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance_days (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id   INTEGER NOT NULL,
            date         TEXT NOT NULL,
            status       TEXT NOT NULL CHECK(status IN ('present','absent')),
            first_login  TEXT,
            last_logout  TEXT,
            updated_at   TEXT NOT NULL,
            UNIQUE(subject_id, date)
        );
        "#,
    )?;
    Ok(())
}

fn create_partners_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS partners (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL,
            commission_rate TEXT NOT NULL DEFAULT '0',
            created_at      TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_commissions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS commissions (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            partner_id    INTEGER NOT NULL,
            booking_id    INTEGER NOT NULL,
            booking_total TEXT NOT NULL,
            amount        TEXT NOT NULL,
            sale_date     TEXT NOT NULL,
            month         TEXT NOT NULL,
            year          INTEGER NOT NULL,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_commissions_key ON commissions(partner_id, year, month);
        "#,
    )?;
    Ok(())
}

fn create_payout_summaries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS payout_summaries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            partner_id   INTEGER NOT NULL,
            month        TEXT NOT NULL,
            year         INTEGER NOT NULL,
            total_count  INTEGER NOT NULL DEFAULT 0,
            total_amount TEXT NOT NULL DEFAULT '0',
            status       TEXT NOT NULL DEFAULT 'pending' CHECK(status IN ('pending','approved','paid')),
            updated_at   TEXT NOT NULL,
            UNIQUE(partner_id, month, year)
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a marker-based migration has already been applied.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn commissions_has_booking_total(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('commissions')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "booking_total" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Pre-0.4 databases stored only the derived amount; recomputation needs
/// the source booking total, so backfill the column with the amount.
fn migrate_add_booking_total(conn: &Connection) -> Result<()> {
    let version = "20250712_0003_add_booking_total";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !commissions_has_booking_total(conn)? {
        conn.execute_batch(
            r#"
            ALTER TABLE commissions ADD COLUMN booking_total TEXT NOT NULL DEFAULT '0';
            UPDATE commissions SET booking_total = amount WHERE booking_total = '0';
            "#,
        )?;
        success("Added 'booking_total' column to commissions table.");
    }

    mark_migration_applied(conn, version, "Added booking_total to commissions")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and by `agentledger db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (migration markers live there)
    ensure_log_table(conn)?;

    // 2) Base schema, idempotent
    create_events_table(conn)?;
    create_attendance_days_table(conn)?;
    create_partners_table(conn)?;
    create_commissions_table(conn)?;
    create_payout_summaries_table(conn)?;

    // 3) Column-level upgrades
    migrate_add_booking_total(conn)?;

    Ok(())
}
