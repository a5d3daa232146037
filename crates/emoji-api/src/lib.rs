//! HTTP API for the emoji board backend.
//!
//! This crate provides an Axum HTTP server that exposes three REST
//! endpoints over the `emojis` table:
//!
//! - `GET /emojis` -- list every emoji as a JSON array
//! - `POST /emojis` -- insert an emoji from a `{"character": ...}` body
//! - `DELETE /emojis/{id}` -- delete one emoji by id
//!
//! # Architecture
//!
//! ```text
//! request -> TraceLayer -> CorsLayer -> Router -> handler -> EmojiRepository
//! ```
//!
//! The repository is injected through [`AppState`], so the router can be
//! driven against `PostgreSQL` in production and against an in-memory
//! double in tests. CORS (including every pre-flight `OPTIONS`) is handled
//! entirely by the middleware; handlers never touch CORS headers.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::{AppState, DEFAULT_ALLOWED_ORIGIN};
