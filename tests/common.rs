#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use kmlog::config::Config;
use kmlog::db::DbPool;
use kmlog::server::{AppState, router};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

pub fn kmlog() -> Command {
    cargo_bin_cmd!("kmlog")
}

/// Unique scratch directory inside the system temp dir, emptied first.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kmlog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Config for the testing env with an index page and one static file.
pub fn testing_config(dir: &Path) -> Config {
    fs::write(dir.join("index.html"), "<html data-env=\"{{env}}\"></html>").expect("index");
    fs::create_dir_all(dir.join("js")).expect("js dir");
    fs::write(dir.join("js").join("app.js"), "console.log('km');").expect("app.js");

    Config {
        database: ":memory:".into(),
        env: "testing".into(),
        workdir: dir.to_string_lossy().to_string(),
        ..Default::default()
    }
}

/// Serve the router on an ephemeral port; returns the base url.
pub async fn spawn_app(name: &str) -> String {
    let dir = setup_test_dir(name);
    let cfg = testing_config(&dir);
    let pool = DbPool::in_memory().expect("in-memory db");
    let state = AppState::new(cfg, pool).expect("state");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.expect("serve");
    });

    format!("http://{}", addr)
}
