use crate::errors::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status =
            StatusCode::from_u16(kind.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = if kind.is_client_error() {
            warn!(status = status.as_u16(), "{}", self);
            match self.cause() {
                Some(cause) => format!("{}: {}\n", kind.message(), cause),
                None => format!("{}\n", kind.message()),
            }
        } else {
            error!(status = status.as_u16(), "{}", self);
            format!("{}\n", kind.message())
        };

        (status, body).into_response()
    }
}
