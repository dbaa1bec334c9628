//! The single HTML page and, in the testing env, the static files next to it.

use super::AppState;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};
use std::path::{Component, PathBuf};

pub const STATIC_DIRS: [&str; 4] = ["js", "img", "css", "partials"];

const INDEX_FILE: &str = "index.html";

fn render_index(raw: &str, cfg: &Config) -> String {
    raw.replace("{{env}}", &cfg.env)
}

/// Read and render `index.html` from the workdir.
pub fn load_index(cfg: &Config) -> AppResult<String> {
    let path = cfg.workdir_path().join(INDEX_FILE);
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    Ok(render_index(&raw, cfg))
}

pub async fn load_index_async(cfg: &Config) -> AppResult<String> {
    let path = cfg.workdir_path().join(INDEX_FILE);
    let raw = tokio::fs::read_to_string(&path).await?;
    Ok(render_index(&raw, cfg))
}

/// Resolve `rel` below `dir` in the workdir, refusing anything that could
/// leave it.
fn resolve(cfg: &Config, dir: &str, rel: &str) -> Option<PathBuf> {
    let rel = std::path::Path::new(rel);
    if !rel.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(cfg.workdir_path().join(dir).join(rel))
}

fn content_type(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript",
        "css" => "text/css",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

async fn send_file(path: PathBuf) -> AppResult<Response> {
    let bytes = tokio::fs::read(&path).await.map_err(|_| AppError::NotFound)?;
    Ok(([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response())
}

/// GET handler for `/<dir>/*path`.
pub fn static_route(dir: &'static str) -> MethodRouter<AppState> {
    get(
        move |State(state): State<AppState>, Path(rel): Path<String>| async move {
            match resolve(&state.config, dir, &rel) {
                Some(path) => send_file(path).await,
                None => Err(AppError::NotFound),
            }
        },
    )
}

pub async fn favicon(State(state): State<AppState>) -> AppResult<Response> {
    send_file(state.config.workdir_path().join("favicon.ico")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_is_refused() {
        let cfg = Config::default();
        assert!(resolve(&cfg, "js", "app.js").is_some());
        assert!(resolve(&cfg, "js", "lib/angular.js").is_some());
        assert!(resolve(&cfg, "js", "../index.html").is_none());
        assert!(resolve(&cfg, "js", "/etc/passwd").is_none());
    }

    #[test]
    fn env_is_rendered_into_page() {
        let cfg = Config {
            env: "testing".into(),
            ..Default::default()
        };
        assert_eq!(
            render_index("<body data-env=\"{{env}}\">", &cfg),
            "<body data-env=\"testing\">"
        );
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type(std::path::Path::new("a.css")), "text/css");
        assert_eq!(content_type(std::path::Path::new("a")), "application/octet-stream");
    }
}
