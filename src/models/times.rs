use super::field::Field;
use super::slot::TimeColumn;
use crate::errors::AppResult;
use crate::utils::time::{UNSET_TIME, epoch_to_hhmm, hours_between, local_to_epoch};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

/// One day of punches (row of the `times` table). Timestamps are UTC epoch
/// seconds; `0` means not punched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Times {
    pub id: i64,
    pub date: NaiveDate,
    pub begin: i64,
    pub check_in: i64,
    pub check_out: i64,
    pub laatste: i64,
}

impl Times {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: 0,
            date,
            begin: 0,
            check_in: 0,
            check_out: 0,
            laatste: 0,
        }
    }

    pub fn get(&self, col: TimeColumn) -> i64 {
        match col {
            TimeColumn::Begin => self.begin,
            TimeColumn::CheckIn => self.check_in,
            TimeColumn::CheckOut => self.check_out,
            TimeColumn::Laatste => self.laatste,
        }
    }

    pub fn set(&mut self, col: TimeColumn, secs: i64) {
        match col {
            TimeColumn::Begin => self.begin = secs,
            TimeColumn::CheckIn => self.check_in = secs,
            TimeColumn::CheckOut => self.check_out = secs,
            TimeColumn::Laatste => self.laatste = secs,
        }
    }

    /// Merge posted times, interpreted as wall-clock times in `tz` on this
    /// record's date.
    ///
    /// All times are parsed before anything is assigned, so on error the
    /// record is left untouched.
    pub fn update_object(&mut self, tz: &Tz, fields: &[Field]) -> AppResult<()> {
        let mut updates = Vec::with_capacity(fields.len());
        for field in fields {
            let Some(time) = field.time_value() else {
                continue;
            };
            let secs = local_to_epoch(tz, self.date, time)?;
            if let Some(slot) = field.slot() {
                updates.push((slot.time_column(), secs));
            }
        }

        for (col, secs) in updates {
            self.set(col, secs);
        }
        Ok(())
    }

    /// Day is incomplete when either check-in or check-out is missing.
    pub fn is_incomplete(&self) -> bool {
        self.check_in == 0 || self.check_out == 0
    }

    pub fn display(&self, tz: &Tz, col: TimeColumn) -> Option<String> {
        epoch_to_hhmm(tz, self.get(col))
    }
}

/// A `times` row as shown in the monthly overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeRow {
    pub id: i64,
    pub date: NaiveDate,
    pub begin: String,
    pub check_in: String,
    pub check_out: String,
    pub laatste: String,
    pub hours: f64,
}

impl TimeRow {
    pub fn from_times(t: &Times, tz: &Tz) -> Self {
        let show = |col| t.display(tz, col).unwrap_or_else(|| UNSET_TIME.to_string());
        Self {
            id: t.id,
            date: t.date,
            begin: show(TimeColumn::Begin),
            check_in: show(TimeColumn::CheckIn),
            check_out: show(TimeColumn::CheckOut),
            laatste: show(TimeColumn::Laatste),
            hours: hours_between(t.check_in, t.check_out),
        }
    }
}
