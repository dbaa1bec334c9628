use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber: `RUST_LOG` or `info`, written to
/// the configured log file (appending) or to stderr.
pub fn init_tracing(cfg: &Config) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = match cfg.log_path() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    AppError::Config(format!("could not open logfile {}: {}", path.display(), e))
                })?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => fmt().with_env_filter(filter).try_init(),
    };

    installed.map_err(|e| AppError::Config(format!("logging already initialised: {}", e)))
}
