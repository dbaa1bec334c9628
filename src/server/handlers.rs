use super::AppState;
use super::assets;
use crate::core::{DeleteLogic, OverviewLogic, SaveLogic, StateLogic};
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::{DayState, Field};
use crate::utils::date::{parse_url_date, to_db};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use tracing::info;

pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    match &state.index_page {
        Some(page) => Ok(Html(page.as_str().to_owned())),
        None => {
            let page = assets::load_index_async(&state.config).await?;
            Ok(Html(page))
        }
    }
}

pub async fn day_state(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<DayState>> {
    let date = parse_url_date(&date)?;
    let tz = state.tz;
    let day = state
        .with_conn(move |conn| StateLogic::apply(conn, &tz, date))
        .await?;
    Ok(Json(day))
}

pub fn parse_json_body(body: &[u8]) -> AppResult<Vec<Field>> {
    serde_json::from_slice(body).map_err(|e| AppError::NotParsable(e.to_string()))
}

pub async fn save(
    State(state): State<AppState>,
    Path(date): Path<String>,
    body: Bytes,
) -> AppResult<&'static str> {
    let date = parse_url_date(&date)?;
    let fields = parse_json_body(&body)?;
    let count = fields.len();
    let tz = state.tz;

    state
        .with_transaction(move |conn| {
            SaveLogic::kilometers(conn, date, &fields)?;
            SaveLogic::times(conn, &tz, date, &fields)?;
            ttlog(
                conn,
                "save",
                &to_db(date),
                &format!("{} field(s) saved", count),
            )
        })
        .await?;

    info!(%date, fields = count, "saved");
    Ok("ok\n")
}

pub async fn overview(
    State(state): State<AppState>,
    Path((category, year, month)): Path<(String, String, String)>,
) -> AppResult<Response> {
    let bad_url = || AppError::InvalidUrl(format!("/overview/{}/{}/{}", category, year, month));
    let y: i32 = year.parse().map_err(|_| bad_url())?;
    let m: u32 = month.parse().map_err(|_| bad_url())?;

    let tz = state.tz;
    match category.as_str() {
        "kilometers" => {
            let rows = state
                .with_conn(move |conn| OverviewLogic::kilometers(conn, y, m))
                .await?;
            Ok(Json(rows).into_response())
        }
        "tijden" => {
            let rows = state
                .with_conn(move |conn| OverviewLogic::time_rows(conn, &tz, y, m))
                .await?;
            Ok(Json(rows).into_response())
        }
        _ => Err(bad_url()),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<&'static str> {
    let date = parse_url_date(&date)?;

    state
        .with_transaction(move |conn| {
            let removed = DeleteLogic::apply(conn, date)?;
            ttlog(
                conn,
                "delete",
                &to_db(date),
                &format!("{} row(s) deleted", removed),
            )
        })
        .await?;

    Ok("ok\n")
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
