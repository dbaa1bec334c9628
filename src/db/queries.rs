use crate::errors::{AppError, AppResult};
use crate::models::{Kilometers, KmColumn, TimeColumn, Times};
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn row_date(row: &Row) -> Result<NaiveDate> {
    let date_str: String = row.get("date")?;
    date::from_db(&date_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })
}

pub fn map_kilometers(row: &Row) -> Result<Kilometers> {
    let mut km = Kilometers::new(row_date(row)?);
    km.id = row.get("id")?;
    for col in KmColumn::ALL {
        km.set(col, row.get(col.to_db_str())?);
    }
    km.comment = row.get("comment")?;
    Ok(km)
}

pub fn map_times(row: &Row) -> Result<Times> {
    let mut t = Times::new(row_date(row)?);
    t.id = row.get("id")?;
    for col in TimeColumn::ALL {
        t.set(col, row.get(col.to_db_str())?);
    }
    Ok(t)
}

fn km_columns() -> [&'static str; 4] {
    KmColumn::ALL.map(|c| c.to_db_str())
}

fn time_columns() -> [&'static str; 4] {
    TimeColumn::ALL.map(|c| c.to_db_str())
}

/// `col = ?2, col = ?3, ...`: placeholders follow `date = ?1`.
fn set_clause(cols: &[&str]) -> String {
    cols.iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ?{}", col, i + 2))
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// kilometers
// ---------------------------------------------------------------------------

pub fn load_kilometers_by_date(conn: &Connection, day: &NaiveDate) -> AppResult<Option<Kilometers>> {
    let km = conn
        .query_row(
            "SELECT * FROM kilometers WHERE date = ?1",
            [date::to_db(*day)],
            map_kilometers,
        )
        .optional()?;
    Ok(km)
}

/// Row with the highest date; ties (only possible without the unique
/// index) break on the highest id.
pub fn load_latest_kilometers(conn: &Connection) -> AppResult<Option<Kilometers>> {
    let km = conn
        .query_row(
            "SELECT * FROM kilometers ORDER BY date DESC, id DESC LIMIT 1",
            [],
            map_kilometers,
        )
        .optional()?;
    Ok(km)
}

pub fn load_kilometers_for_month(conn: &Connection, month_key: &str) -> AppResult<Vec<Kilometers>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM kilometers
         WHERE strftime('%Y-%m', date) = ?1
         ORDER BY date DESC, id DESC",
    )?;

    let rows = stmt.query_map([month_key], map_kilometers)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_kilometers(conn: &Connection, km: &Kilometers) -> AppResult<i64> {
    let [a, b, c, d] = KmColumn::ALL.map(|col| km.get(col));
    conn.execute(
        &format!(
            "INSERT INTO kilometers (date, {}, comment)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            km_columns().join(", ")
        ),
        params![date::to_db(km.date), a, b, c, d, km.comment],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update all columns except id. Returns the number of rows affected.
pub fn update_kilometers(conn: &Connection, km: &Kilometers) -> AppResult<usize> {
    let mut cols = km_columns().to_vec();
    cols.push("comment");
    let [a, b, c, d] = KmColumn::ALL.map(|col| km.get(col));
    let n = conn.execute(
        &format!(
            "UPDATE kilometers SET date = ?1, {} WHERE id = ?7",
            set_clause(&cols)
        ),
        params![date::to_db(km.date), a, b, c, d, km.comment, km.id],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// times
// ---------------------------------------------------------------------------

pub fn load_times_by_date(conn: &Connection, day: &NaiveDate) -> AppResult<Option<Times>> {
    let t = conn
        .query_row(
            "SELECT * FROM times WHERE date = ?1",
            [date::to_db(*day)],
            map_times,
        )
        .optional()?;
    Ok(t)
}

/// Most recent rows first (date, then id, descending).
pub fn load_latest_times(conn: &Connection, limit: u32) -> AppResult<Vec<Times>> {
    let mut stmt = conn.prepare("SELECT * FROM times ORDER BY date DESC, id DESC LIMIT ?1")?;

    let rows = stmt.query_map([i64::from(limit)], map_times)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_times_for_month(conn: &Connection, month_key: &str) -> AppResult<Vec<Times>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM times
         WHERE strftime('%Y-%m', date) = ?1
         ORDER BY date DESC, id DESC",
    )?;

    let rows = stmt.query_map([month_key], map_times)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_times(conn: &Connection, t: &Times) -> AppResult<i64> {
    let [a, b, c, d] = TimeColumn::ALL.map(|col| t.get(col));
    conn.execute(
        &format!(
            "INSERT INTO times (date, {}) VALUES (?1, ?2, ?3, ?4, ?5)",
            time_columns().join(", ")
        ),
        params![date::to_db(t.date), a, b, c, d],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update all columns except id. Returns the number of rows affected.
pub fn update_times(conn: &Connection, t: &Times) -> AppResult<usize> {
    let [a, b, c, d] = TimeColumn::ALL.map(|col| t.get(col));
    let n = conn.execute(
        &format!(
            "UPDATE times SET date = ?1, {} WHERE id = ?6",
            set_clause(&time_columns())
        ),
        params![date::to_db(t.date), a, b, c, d, t.id],
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// both
// ---------------------------------------------------------------------------

/// Delete the kilometers and times rows of a date.
/// Returns the number of rows deleted from each table.
pub fn delete_by_date(conn: &Connection, day: &NaiveDate) -> AppResult<(usize, usize)> {
    let d = date::to_db(*day);
    let km = conn.execute("DELETE FROM kilometers WHERE date = ?1", params![d])?;
    let times = conn.execute("DELETE FROM times WHERE date = ?1", params![d])?;
    Ok((km, times))
}
