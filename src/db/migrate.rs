use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{info, warn};

/// Ensure that the `log` table exists.
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

/// Create the `kilometers` table (one row of odometer readings per day).
fn create_kilometers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kilometers (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            date     TEXT NOT NULL,
            begin    INTEGER NOT NULL DEFAULT 0,
            eerste   INTEGER NOT NULL DEFAULT 0,
            laatste  INTEGER NOT NULL DEFAULT 0,
            terug    INTEGER NOT NULL DEFAULT 0,
            comment  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Create the `times` table (one row of punches per day, epoch seconds, 0 = unset).
fn create_times_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS times (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            begin      INTEGER NOT NULL DEFAULT 0,
            check_in   INTEGER NOT NULL DEFAULT 0,
            check_out  INTEGER NOT NULL DEFAULT 0,
            laatste    INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Enforce one record per date on both tables.
fn migrate_unique_day_index(conn: &Connection) -> AppResult<()> {
    let version = "20140115_0001_unique_day_index";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    for table in ["kilometers", "times"] {
        let duplicates: i64 = conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM (SELECT date FROM {table} GROUP BY date HAVING COUNT(*) > 1)"
            ),
            [],
            |row| row.get(0),
        )?;
        if duplicates > 0 {
            warn!(table, duplicates, "duplicate dates block the unique index");
            return Err(AppError::Migration(format!(
                "{} dates in '{}' have more than one row; clean them up before migrating",
                duplicates, table
            )));
        }
    }

    conn.execute_batch(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_kilometers_date ON kilometers(date);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_times_date ON times(date);
        "#,
    )?;

    mark_applied(conn, version, "Unique date index on kilometers and times")?;
    info!(version, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    create_kilometers_table(conn)?;
    create_times_table(conn)?;
    migrate_unique_day_index(conn)?;
    Ok(())
}
