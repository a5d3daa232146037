//! The emoji record and its insert payload.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EmojiId;

/// A persisted emoji.
///
/// `character` is intended to hold a single emoji glyph, but nothing
/// enforces that: any string the client sent is stored and returned
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Emoji {
    /// Database-assigned primary key.
    pub id: EmojiId,
    /// The stored glyph.
    pub character: String,
}

/// Body of `POST /emojis`.
///
/// Clients commonly echo back a full [`Emoji`] including an `id`; unknown
/// fields are ignored so that shape is accepted and the id discarded.
///
/// `character` is required: a body without it, or with `null`, is
/// rejected rather than stored as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewEmoji {
    /// The glyph to store.
    pub character: String,
}
