//! `PostgreSQL` data layer for the emoji board backend.
//!
//! A single `emojis(id, character)` table holds every record. This crate
//! owns the connection pool and the three statements issued against it.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler
//!     |
//!     +-- EmojiRepository (trait, injected into the API state)
//!         |
//!         +-- PostgresPool ---> EmojiStore ---> emojis table
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`emoji_store`] -- List, insert and delete statements
//! - [`repository`] -- The [`EmojiRepository`] seam used by the HTTP layer
//! - [`error`] -- Shared error types

pub mod emoji_store;
pub mod error;
pub mod postgres;
pub mod repository;

// Re-export primary types for convenience.
pub use emoji_store::{EmojiRow, EmojiStore};
pub use error::DbError;
pub use postgres::PostgresPool;
pub use repository::EmojiRepository;
