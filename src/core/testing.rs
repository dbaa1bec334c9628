//! Fixtures shared by the core unit tests.

use crate::db::{DbPool, Store};
use crate::errors::{AppError, AppResult};
use crate::models::{Kilometers, Times};
use chrono::NaiveDate;
use std::cell::Cell;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn pool() -> DbPool {
    DbPool::in_memory().unwrap()
}

/// In-memory store with canned answers, for conditions SQLite will not
/// produce on its own.
#[derive(Default)]
pub struct MockStore {
    pub kilometers: Option<Kilometers>,
    pub times: Option<Times>,
    pub update_count: usize,
    pub fail_reads: bool,
    /// Fail only `latest_kilometers`.
    pub fail_latest_kilometers: bool,
    /// Fail only `latest_times`.
    pub fail_latest_times: bool,
    pub writes: Cell<usize>,
}

impl MockStore {
    pub fn with_times(times: Times, update_count: usize) -> Self {
        Self {
            times: Some(times),
            update_count,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    fn read<T>(&self, value: T) -> AppResult<T> {
        self.read_or_fail(self.fail_reads, value)
    }

    fn read_or_fail<T>(&self, fail: bool, value: T) -> AppResult<T> {
        if self.fail_reads || fail {
            Err(AppError::Storage("connection lost".into()))
        } else {
            Ok(value)
        }
    }

    fn write<T>(&self, value: T) -> AppResult<T> {
        self.writes.set(self.writes.get() + 1);
        Ok(value)
    }
}

impl Store for MockStore {
    fn kilometers_by_date(&self, _date: NaiveDate) -> AppResult<Option<Kilometers>> {
        self.read(self.kilometers.clone())
    }

    fn latest_kilometers(&self) -> AppResult<Option<Kilometers>> {
        self.read_or_fail(self.fail_latest_kilometers, self.kilometers.clone())
    }

    fn kilometers_for_month(&self, _month_key: &str) -> AppResult<Vec<Kilometers>> {
        self.read(self.kilometers.iter().cloned().collect())
    }

    fn insert_kilometers(&self, _km: &Kilometers) -> AppResult<i64> {
        self.write(1)
    }

    fn update_kilometers(&self, _km: &Kilometers) -> AppResult<usize> {
        self.write(self.update_count)
    }

    fn times_by_date(&self, _date: NaiveDate) -> AppResult<Option<Times>> {
        self.read(self.times.clone())
    }

    fn latest_times(&self, _limit: u32) -> AppResult<Vec<Times>> {
        self.read_or_fail(self.fail_latest_times, self.times.iter().cloned().collect())
    }

    fn times_for_month(&self, _month_key: &str) -> AppResult<Vec<Times>> {
        self.read(self.times.iter().cloned().collect())
    }

    fn insert_times(&self, _t: &Times) -> AppResult<i64> {
        self.write(1)
    }

    fn update_times(&self, _t: &Times) -> AppResult<usize> {
        self.write(self.update_count)
    }

    fn delete_day(&self, _date: NaiveDate) -> AppResult<(usize, usize)> {
        self.write((0, 0))
    }
}
