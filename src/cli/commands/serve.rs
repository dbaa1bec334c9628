use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::server::{self, AppState, logging};

/// Handle the `serve` command: open the database and run the HTTP server.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut cfg = cfg.clone();
    if let Commands::Serve { port: Some(port) } = cmd {
        cfg.port = *port;
    }

    logging::init_tracing(&cfg)?;

    let pool = DbPool::new(&cfg.database_path().to_string_lossy())?;
    let state = AppState::new(cfg, pool)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(state))
}
