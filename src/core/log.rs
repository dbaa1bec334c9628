use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub struct LogLogic;

impl LogLogic {
    /// Print the internal audit log, newest first.
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The log is empty.");
            return Ok(());
        }

        header("Internal log");

        let width = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(0)
            .min(60);

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(e.date);

            let op_target = if e.target.is_empty() {
                e.operation
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            println!("{:<19}  {:<width$}  {}", date, op_target, e.message);
        }

        Ok(())
    }
}
