//! Error types for the HTTP layer.
//!
//! [`ApiError`] unifies all request failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Failure bodies are plain text. Successful responses are the only JSON
//! the API emits.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use emoji_db::DbError;
use emoji_types::{EmojiId, ParseEmojiIdError};

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was not JSON or did not have the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The `id` path segment is not an integer.
    #[error("{0}")]
    InvalidId(#[from] ParseEmojiIdError),

    /// No emoji has the requested id.
    #[error("emoji {0} not found")]
    NotFound(EmojiId),

    /// A database statement failed.
    #[error("database error: {0}")]
    Database(DbError),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { id } => Self::NotFound(id),
            other => Self::Database(other),
        }
    }
}

impl ApiError {
    /// The HTTP status this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::InvalidBody(e) => {
                tracing::warn!(error = %e, "Error decoding request body");
                e.to_string()
            }
            Self::InvalidId(e) => {
                tracing::warn!(error = %e, "Error parsing id");
                String::from("Invalid ID")
            }
            Self::NotFound(id) => {
                tracing::warn!(%id, "Emoji not found");
                String::from("Emoji not found")
            }
            // The raw driver message goes back to the client unredacted.
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                e.to_string()
            }
        };

        (status, body).into_response()
    }
}
