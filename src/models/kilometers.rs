use super::field::Field;
use super::slot::KmColumn;
use chrono::NaiveDate;
use serde::Serialize;

/// One day of odometer readings (row of the `kilometers` table).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Kilometers {
    pub id: i64,         // ⇔ kilometers.id
    pub date: NaiveDate, // ⇔ kilometers.date (TEXT "YYYY-MM-DD", unique)
    pub begin: i32,
    pub eerste: i32,
    pub laatste: i32,
    pub terug: i32,
    pub comment: String,
}

impl Kilometers {
    /// Fresh, not yet stored record (`id == 0`).
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: 0,
            date,
            begin: 0,
            eerste: 0,
            laatste: 0,
            terug: 0,
            comment: String::new(),
        }
    }

    pub fn get(&self, col: KmColumn) -> i32 {
        match col {
            KmColumn::Begin => self.begin,
            KmColumn::Eerste => self.eerste,
            KmColumn::Laatste => self.laatste,
            KmColumn::Terug => self.terug,
        }
    }

    pub fn set(&mut self, col: KmColumn, km: i32) {
        match col {
            KmColumn::Begin => self.begin = km,
            KmColumn::Eerste => self.eerste = km,
            KmColumn::Laatste => self.laatste = km,
            KmColumn::Terug => self.terug = km,
        }
    }

    /// Merge posted readings. Later fields win, unknown names are skipped.
    pub fn add_fields(&mut self, fields: &[Field]) {
        for field in fields {
            if let Some(slot) = field.slot() {
                self.set(slot.km_column(), field.km);
            }
        }
    }

    /// Highest stage of the day that has a reading: Terug, Laatste, Eerste,
    /// Begin, else 0.
    pub fn best_reading(&self) -> i32 {
        [self.terug, self.laatste, self.eerste, self.begin]
            .into_iter()
            .find(|km| *km > 0)
            .unwrap_or(0)
    }
}
