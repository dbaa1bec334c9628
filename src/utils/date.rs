use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Storage format of the `date` column.
pub const DB_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of dates in URL segments and path hints.
pub const URL_DATE_FORMAT: &str = "%d%m%Y";

fn url_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{8}$").expect("static regex"))
}

/// Parse a `DDMMYYYY` URL segment.
pub fn parse_url_date(s: &str) -> AppResult<NaiveDate> {
    if !url_date_regex().is_match(s) {
        return Err(AppError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, URL_DATE_FORMAT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Client-side route of the entry form for `date`, e.g. `input/01012014`.
pub fn input_path(date: NaiveDate) -> String {
    format!("input/{}", date.format(URL_DATE_FORMAT))
}

pub fn to_db(date: NaiveDate) -> String {
    date.format(DB_DATE_FORMAT).to_string()
}

pub fn from_db(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DB_DATE_FORMAT).ok()
}

/// `YYYY-MM` key matched against `strftime('%Y-%m', date)`.
pub fn month_key(year: i32, month: u32) -> AppResult<String> {
    if !(1..=12).contains(&month) || !(1..=9999).contains(&year) {
        return Err(AppError::InvalidUrl(format!("{}/{}", year, month)));
    }
    Ok(format!("{:04}-{:02}", year, month))
}
