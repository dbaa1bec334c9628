use crate::db::Store;
use crate::errors::AppResult;
use crate::models::{Kilometers, TimeRow};
use crate::utils::date::month_key;
use chrono_tz::Tz;
use tracing::debug;

/// Monthly listings, most recent date first.
pub struct OverviewLogic;

impl OverviewLogic {
    /// Every times row of the month, rendered for display.
    pub fn time_rows<S: Store + ?Sized>(
        store: &S,
        tz: &Tz,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<TimeRow>> {
        let key = month_key(year, month)?;
        let all = store.times_for_month(&key)?;
        debug!(month = %key, rows = all.len(), "times overview");

        Ok(all.iter().map(|t| TimeRow::from_times(t, tz)).collect())
    }

    /// Raw kilometers records of the month.
    pub fn kilometers<S: Store + ?Sized>(
        store: &S,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<Kilometers>> {
        let key = month_key(year, month)?;
        let all = store.kilometers_for_month(&key)?;
        debug!(month = %key, rows = all.len(), "kilometers overview");
        Ok(all)
    }
}
