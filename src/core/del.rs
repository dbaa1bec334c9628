use crate::db::Store;
use crate::errors::AppResult;
use chrono::NaiveDate;
use tracing::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove both records of a date. Deleting a date without records is not
    /// an error. Returns the number of rows removed.
    pub fn apply<S: Store + ?Sized>(store: &S, date: NaiveDate) -> AppResult<usize> {
        let (km, times) = store.delete_day(date)?;
        info!(%date, kilometers = km, times, "deleted day");
        Ok(km + times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::save::SaveLogic;
    use crate::core::testing::{date, pool};
    use crate::models::{Field, Slot};
    use chrono_tz::Europe::Amsterdam;

    #[test]
    fn removes_both_rows_of_the_date_only() {
        let pool = pool();
        let fields = [Field::new(Slot::Begin, 10, "08:00")];
        for d in [date(2014, 1, 1), date(2014, 1, 2)] {
            SaveLogic::kilometers(&pool.conn, d, &fields).unwrap();
            SaveLogic::times(&pool.conn, &Amsterdam, d, &fields).unwrap();
        }

        assert_eq!(DeleteLogic::apply(&pool.conn, date(2014, 1, 1)).unwrap(), 2);
        assert!(pool.conn.kilometers_by_date(date(2014, 1, 1)).unwrap().is_none());
        assert!(pool.conn.times_by_date(date(2014, 1, 1)).unwrap().is_none());
        assert!(pool.conn.kilometers_by_date(date(2014, 1, 2)).unwrap().is_some());

        assert_eq!(DeleteLogic::apply(&pool.conn, date(2014, 1, 1)).unwrap(), 0);
    }
}
