//! Error types for the data layer.
//!
//! [`DbError::Postgres`] is rendered transparently so callers that surface
//! the message (the HTTP 500 body) show the driver's own text.

use emoji_types::EmojiId;

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` statement or connection failed.
    #[error(transparent)]
    Postgres(#[from] sqlx::Error),

    /// A delete matched no row.
    #[error("emoji {id} not found")]
    NotFound {
        /// The id that matched nothing.
        id: EmojiId,
    },

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
