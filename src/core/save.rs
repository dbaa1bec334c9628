use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{Field, Kilometers, Times};
use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::debug;

/// Upserts for the two per-day records.
///
/// Each call reads the row for the date, merges the posted fields into it in
/// memory and then issues exactly one UPDATE or INSERT, so a failing merge
/// never reaches storage.
pub struct SaveLogic;

impl SaveLogic {
    /// Merge the odometer part of `fields` into the day's kilometers record.
    pub fn kilometers<S: Store + ?Sized>(
        store: &S,
        date: NaiveDate,
        fields: &[Field],
    ) -> AppResult<()> {
        match store.kilometers_by_date(date)? {
            Some(mut kms) => {
                debug!(?kms, "kilometers before merge");
                kms.add_fields(fields);
                store.update_kilometers(&kms)?;
                debug!(?kms, "kilometers updated");
            }
            None => {
                let mut kms = Kilometers::new(date);
                kms.add_fields(fields);
                let id = store.insert_kilometers(&kms)?;
                debug!(id, ?kms, "kilometers inserted");
            }
        }
        Ok(())
    }

    /// Merge the time part of `fields` into the day's times record.
    ///
    /// Any unparsable time fails the whole call before anything is written.
    /// An update that does not report exactly one affected row is a storage
    /// error.
    pub fn times<S: Store + ?Sized>(
        store: &S,
        tz: &Tz,
        date: NaiveDate,
        fields: &[Field],
    ) -> AppResult<()> {
        match store.times_by_date(date)? {
            Some(mut times) => {
                debug!(?times, "times before merge");
                times.update_object(tz, fields)?;
                let count = store.update_times(&times)?;
                if count != 1 {
                    return Err(AppError::Storage(format!(
                        "update of times for {} affected {} rows, expected 1",
                        date, count
                    )));
                }
                debug!(?times, "times updated");
            }
            None => {
                let mut times = Times::new(date);
                times.update_object(tz, fields)?;
                let id = store.insert_times(&times)?;
                debug!(id, ?times, "times inserted");
            }
        }
        Ok(())
    }
}
