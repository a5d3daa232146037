//! Shared application state for the HTTP server.

use axum::http::HeaderValue;
use emoji_db::EmojiRepository;

/// Origin of the browser client allowed by default.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. The repository is the only thing handlers touch; the
/// allowed origin is read once when the router is built.
pub struct AppState<R> {
    /// Persistence for emoji records.
    pub repo: R,
    /// The single origin the CORS layer admits.
    pub allowed_origin: HeaderValue,
}

impl<R: EmojiRepository> AppState<R> {
    /// Create state around a repository, admitting [`DEFAULT_ALLOWED_ORIGIN`].
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        }
    }

    /// Replace the allowed CORS origin.
    #[must_use]
    pub fn with_allowed_origin(mut self, origin: HeaderValue) -> Self {
        self.allowed_origin = origin;
        self
    }
}
