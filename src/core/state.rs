use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::models::{DayState, Field, Slot, Times};
use crate::utils::date::input_path;
use crate::utils::time::UNSET_TIME;
use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::debug;

/// Builds the entry form state for a date.
pub struct StateLogic;

impl StateLogic {
    pub fn apply<S: Store + ?Sized>(store: &S, tz: &Tz, date: NaiveDate) -> AppResult<DayState> {
        let Some(today) = store.kilometers_by_date(date)? else {
            // nothing saved for this date yet: empty form plus defaults
            let mut state = DayState::blank();

            if let Some(last_day) = store.latest_kilometers()? {
                state.last_day_km = last_day.best_reading();
            }
            if let Some(last_times) = store.latest_times(1)?.first() {
                state.last_day_error = incomplete_hint(last_times);
            }

            debug!(%date, ?state, "no record for date");
            return Ok(state);
        };

        let times = store.times_by_date(date)?.ok_or_else(|| {
            AppError::Storage(format!("kilometers saved for {} but no times row", date))
        })?;

        let fields = Slot::ALL
            .iter()
            .map(|slot| {
                let time = times
                    .display(tz, slot.time_column())
                    .unwrap_or_else(|| UNSET_TIME.to_string());
                Field::new(*slot, today.get(slot.km_column()), time)
            })
            .collect();

        let mut state = DayState {
            fields,
            ..Default::default()
        };

        // the newest row is expected to be today's, so the one after it is
        // the previous working day
        let recent = store.latest_times(2)?;
        if let Some(previous) = recent.get(1) {
            state.last_day_error = incomplete_hint(previous);
        }

        debug!(%date, ?state, "state for date");
        Ok(state)
    }
}

fn incomplete_hint(t: &Times) -> String {
    if t.is_incomplete() {
        input_path(t.date)
    } else {
        String::new()
    }
}
