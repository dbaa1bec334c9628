//! SQLite connection wrapper. One connection serves the whole app.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Run `func` inside a transaction. Committed only if `func` succeeds;
    /// on error the transaction is dropped and rolled back.
    pub fn with_transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn failed_transaction_rolls_back() {
        let mut pool = DbPool::in_memory().unwrap();
        let res: AppResult<()> = pool.with_transaction(|conn| {
            conn.execute("INSERT INTO kilometers (date) VALUES ('2014-01-01')", [])?;
            Err(AppError::Storage("boom".into()))
        });
        assert!(res.is_err());

        let n: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM kilometers", [], |r| r.get(0))
            .unwrap();
        assert_eq!(n, 0);
    }
}
