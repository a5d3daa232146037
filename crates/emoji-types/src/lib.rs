//! Shared type definitions for the emoji board backend.
//!
//! This crate is the single source of truth for the record shapes that
//! cross the HTTP boundary. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the browser client.
//!
//! # Modules
//!
//! - [`ids`] -- The database-assigned emoji identifier
//! - [`emoji`] -- The emoji record and its insert payload

pub mod emoji;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use emoji::{Emoji, NewEmoji};
pub use ids::{EmojiId, ParseEmojiIdError};
