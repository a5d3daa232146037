//! REST API endpoint handlers.
//!
//! Each handler performs at most one repository call and maps its result
//! straight onto a response. Errors are converted by [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/emojis` | 200, JSON array |
//! | `POST` | `/emojis` | 201, empty |
//! | `DELETE` | `/emojis/{id}` | 204, empty |

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use emoji_db::EmojiRepository;
use emoji_types::{Emoji, EmojiId, NewEmoji};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /emojis
// ---------------------------------------------------------------------------

/// List every emoji.
///
/// An empty table is returned as `[]`.
pub async fn get_emojis<R: EmojiRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<Emoji>>, ApiError> {
    let emojis = state.repo.list_all().await?;
    tracing::debug!(count = emojis.len(), "Listed emojis");
    Ok(Json(emojis))
}

// ---------------------------------------------------------------------------
// POST /emojis
// ---------------------------------------------------------------------------

/// Insert an emoji.
///
/// The body is decoded as JSON whatever `Content-Type` the client sent.
/// The response carries no representation of the new record.
pub async fn add_emoji<R: EmojiRepository>(
    State(state): State<Arc<AppState<R>>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let new_emoji: NewEmoji = serde_json::from_slice(&body)?;
    state.repo.insert(&new_emoji.character).await?;
    Ok(StatusCode::CREATED)
}

// ---------------------------------------------------------------------------
// DELETE /emojis/{id}
// ---------------------------------------------------------------------------

/// Delete one emoji by id.
///
/// The id is parsed by hand rather than through `Path<EmojiId>` so that a
/// malformed segment reports the plain-text `Invalid ID` body.
pub async fn delete_emoji<R: EmojiRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: EmojiId = raw_id.parse()?;
    state.repo.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
