//! Storage seam used by the core logic.
//!
//! Implemented for `rusqlite::Connection`, so a `Transaction` (which derefs
//! to a connection) can be handed to the core as well.

use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{Kilometers, Times};
use chrono::NaiveDate;
use rusqlite::Connection;

pub trait Store {
    fn kilometers_by_date(&self, date: NaiveDate) -> AppResult<Option<Kilometers>>;
    fn latest_kilometers(&self) -> AppResult<Option<Kilometers>>;
    fn kilometers_for_month(&self, month_key: &str) -> AppResult<Vec<Kilometers>>;
    fn insert_kilometers(&self, km: &Kilometers) -> AppResult<i64>;
    fn update_kilometers(&self, km: &Kilometers) -> AppResult<usize>;

    fn times_by_date(&self, date: NaiveDate) -> AppResult<Option<Times>>;
    fn latest_times(&self, limit: u32) -> AppResult<Vec<Times>>;
    fn times_for_month(&self, month_key: &str) -> AppResult<Vec<Times>>;
    fn insert_times(&self, t: &Times) -> AppResult<i64>;
    fn update_times(&self, t: &Times) -> AppResult<usize>;

    fn delete_day(&self, date: NaiveDate) -> AppResult<(usize, usize)>;
}

impl Store for Connection {
    fn kilometers_by_date(&self, date: NaiveDate) -> AppResult<Option<Kilometers>> {
        queries::load_kilometers_by_date(self, &date)
    }

    fn latest_kilometers(&self) -> AppResult<Option<Kilometers>> {
        queries::load_latest_kilometers(self)
    }

    fn kilometers_for_month(&self, month_key: &str) -> AppResult<Vec<Kilometers>> {
        queries::load_kilometers_for_month(self, month_key)
    }

    fn insert_kilometers(&self, km: &Kilometers) -> AppResult<i64> {
        queries::insert_kilometers(self, km)
    }

    fn update_kilometers(&self, km: &Kilometers) -> AppResult<usize> {
        queries::update_kilometers(self, km)
    }

    fn times_by_date(&self, date: NaiveDate) -> AppResult<Option<Times>> {
        queries::load_times_by_date(self, &date)
    }

    fn latest_times(&self, limit: u32) -> AppResult<Vec<Times>> {
        queries::load_latest_times(self, limit)
    }

    fn times_for_month(&self, month_key: &str) -> AppResult<Vec<Times>> {
        queries::load_times_for_month(self, month_key)
    }

    fn insert_times(&self, t: &Times) -> AppResult<i64> {
        queries::insert_times(self, t)
    }

    fn update_times(&self, t: &Times) -> AppResult<usize> {
        queries::update_times(self, t)
    }

    fn delete_day(&self, date: NaiveDate) -> AppResult<(usize, usize)> {
        queries::delete_by_date(self, &date)
    }
}
