//! Unified application error type.
//! All modules (db, core, server, cli) return AppError so the HTTP façade can
//! pick a status code from a single place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Request errors
    // ---------------------------
    #[error("Route not found")]
    NotFound,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Could not parse request: {0}")]
    NotParsable(String),

    #[error("Unknown field name: {0}")]
    UnknownField(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Coarse classification of an [`AppError`], used to choose the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidDate,
    InvalidUrl,
    NotParsable,
    UnknownField,
    Storage,
    Internal,
}

impl ErrorKind {
    pub fn status(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidDate
            | ErrorKind::InvalidUrl
            | ErrorKind::NotParsable
            | ErrorKind::UnknownField => 400,
            ErrorKind::Storage | ErrorKind::Internal => 500,
        }
    }

    /// Short plain-text body written to the client.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "404 page not found",
            ErrorKind::InvalidDate => "invalid date",
            ErrorKind::InvalidUrl => "invalid url",
            ErrorKind::NotParsable => "could not parse request",
            ErrorKind::UnknownField => "invalid fieldname",
            ErrorKind::Storage => "database error",
            ErrorKind::Internal => "internal error",
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status() < 500
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound => ErrorKind::NotFound,
            AppError::InvalidDate(_) => ErrorKind::InvalidDate,
            AppError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            AppError::NotParsable(_) => ErrorKind::NotParsable,
            AppError::UnknownField(_) => ErrorKind::UnknownField,
            AppError::Db(_) | AppError::Storage(_) => ErrorKind::Storage,
            AppError::Io(_) | AppError::Migration(_) | AppError::Config(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Underlying cause, if the variant carries one.
    pub fn cause(&self) -> Option<String> {
        match self {
            AppError::NotFound => None,
            AppError::Io(e) => Some(e.to_string()),
            AppError::Db(e) => Some(e.to_string()),
            AppError::Storage(s)
            | AppError::Migration(s)
            | AppError::InvalidDate(s)
            | AppError::InvalidUrl(s)
            | AppError::NotParsable(s)
            | AppError::UnknownField(s)
            | AppError::Config(s) => Some(s.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_kind() {
        assert_eq!(AppError::NotFound.kind().status(), 404);
        assert_eq!(AppError::InvalidDate("x".into()).kind().status(), 400);
        assert_eq!(AppError::InvalidUrl("x".into()).kind().status(), 400);
        assert_eq!(AppError::NotParsable("x".into()).kind().status(), 400);
        assert_eq!(AppError::UnknownField("x".into()).kind().status(), 400);
        assert_eq!(AppError::Storage("x".into()).kind().status(), 500);
        assert_eq!(
            AppError::Db(rusqlite::Error::QueryReturnedNoRows).kind(),
            ErrorKind::Storage
        );
        assert_eq!(AppError::Config("x".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn cause_is_kept() {
        let e = AppError::Storage("update touched 2 rows".into());
        assert_eq!(e.cause().as_deref(), Some("update touched 2 rows"));
        assert!(AppError::NotFound.cause().is_none());
        assert!(!e.kind().is_client_error());
    }
}
