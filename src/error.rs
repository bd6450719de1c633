//! Error types for guess-number.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for guess-number operations.
#[derive(Error, Debug)]
pub enum GameError {
    /// Session with the given ID was not found.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// Text that is not a well-formed session ID.
    #[error("invalid session id: {0:?}")]
    InvalidSessionId(String),

    /// Internal lock was poisoned.
    #[error("internal lock poisoned")]
    LockPoisoned,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for guess-number operations.
pub type Result<T> = std::result::Result<T, GameError>;

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
