use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::PathBuf;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (kept if it already exists)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    if path.exists() {
        warning(format!("Config file {} already exists, keeping it.", path.display()));
        if let Some(db) = &cli.db {
            warning(format!(
                "--db {} applies to this run only; edit the config file to make it permanent.",
                db
            ));
        }
    } else {
        cfg.save(&path)?;
        success(format!("Config file: {}", path.display()));
    }

    let db_path = cfg.database_path();
    if let Some(dir) = db_path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }

    let pool = DbPool::new(&db_path.to_string_lossy())?;
    success(format!("Database:    {}", db_path.display()));

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    Ok(())
}
