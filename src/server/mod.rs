//! HTTP façade: routes, shared state, and error → status mapping.

pub mod assets;
pub mod handlers;
pub mod logging;
pub mod response;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use axum::Router;
use axum::routing::{get, post};
use chrono_tz::Tz;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::info;

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<DbPool>>,
    pub config: Arc<Config>,
    pub tz: Tz,
    /// Rendered index page; only cached outside the testing env.
    index_page: Option<Arc<String>>,
}

impl AppState {
    pub fn new(config: Config, pool: DbPool) -> AppResult<Self> {
        let tz = config.tz()?;
        let index_page = if config.is_testing() {
            None
        } else {
            Some(Arc::new(assets::load_index(&config)?))
        };

        Ok(Self {
            db: Arc::new(Mutex::new(pool)),
            config: Arc::new(config),
            tz,
            index_page,
        })
    }

    /// Run `func` on the connection without a transaction (reads).
    pub async fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        self.blocking(move |pool| func(&pool.conn)).await
    }

    /// Run `func` in a single transaction (writes).
    pub async fn with_transaction<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        self.blocking(move |pool| pool.with_transaction(func)).await
    }

    /// Lock the pool and run `func` on tokio's blocking thread pool.
    async fn blocking<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || {
            let mut pool = db
                .lock()
                .map_err(|_| AppError::Storage("database lock poisoned".into()))?;
            func(&mut *pool)
        })
        .await
        .map_err(|e| AppError::Storage(format!("database task failed: {}", e)))?
    }
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::home))
        .route("/state/{date}", get(handlers::day_state))
        .route("/save/{date}", post(handlers::save))
        .route("/overview/{category}/{year}/{month}", get(handlers::overview))
        .route("/delete/{date}", get(handlers::delete));

    // static files are served by the front proxy in production
    if state.config.is_testing() {
        for dir in assets::STATIC_DIRS {
            router = router.route(&format!("/{dir}/{{*path}}"), assets::static_route(dir));
        }
        router = router.route("/favicon.ico", get(assets::favicon));
    }

    router.fallback(handlers::not_found).with_state(state)
}

/// Bind `0.0.0.0:port` and serve until the process is stopped.
pub async fn serve(state: AppState) -> AppResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let env = state.config.env.clone();
    let listener = TcpListener::bind(addr).await?;

    info!("started on {} ({})", addr, env);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
