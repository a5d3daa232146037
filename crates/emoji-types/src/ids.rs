//! Type-safe identifier for emoji records.
//!
//! Emoji ids are assigned by `PostgreSQL` (`SERIAL` primary key), so unlike
//! most identifiers there is no client-side constructor. The only ways to
//! obtain an [`EmojiId`] are reading a row back or parsing one from a
//! request path.

use core::num::ParseIntError;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Database-assigned identifier of an emoji record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct EmojiId(pub i32);

impl EmojiId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for EmojiId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EmojiId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<EmojiId> for i32 {
    fn from(id: EmojiId) -> Self {
        id.0
    }
}

/// Error returned when a path segment is not a valid emoji id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid emoji id {input:?}: {source}")]
pub struct ParseEmojiIdError {
    /// The rejected input.
    pub input: String,
    /// The underlying integer parse failure.
    pub source: ParseIntError,
}

impl FromStr for EmojiId {
    type Err = ParseEmojiIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Self).map_err(|source| ParseEmojiIdError {
            input: s.to_owned(),
            source,
        })
    }
}
