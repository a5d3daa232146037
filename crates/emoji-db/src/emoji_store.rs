//! Statements against the `emojis` table.
//!
//! Each operation is exactly one parameterized statement. There are no
//! transactions: a handler issues at most one of these per request.
//!
//! ```sql
//! CREATE TABLE emojis (
//!     id        SERIAL PRIMARY KEY,
//!     character TEXT
//! );
//! ```

use emoji_types::{Emoji, EmojiId};
use sqlx::PgPool;

use crate::error::DbError;

/// Operations on the `emojis` table.
pub struct EmojiStore<'a> {
    pool: &'a PgPool,
}

impl<'a> EmojiStore<'a> {
    /// Create a new emoji store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every emoji in database-default order.
    ///
    /// A row that fails to decode fails the whole call; no partial list
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query or row decoding fails.
    pub async fn list_all(&self) -> Result<Vec<Emoji>, DbError> {
        let rows = sqlx::query_as::<_, EmojiRow>(r"SELECT id, character FROM emojis")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Emoji::from).collect())
    }

    /// Insert a new emoji. The assigned id is not read back.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert(&self, character: &str) -> Result<(), DbError> {
        sqlx::query(r"INSERT INTO emojis (character) VALUES ($1)")
            .bind(character)
            .execute(self.pool)
            .await?;

        tracing::debug!(character, "Inserted emoji");
        Ok(())
    }

    /// Delete the emoji with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] if no row has that id.
    /// Returns [`DbError::Postgres`] if the delete fails.
    pub async fn delete_by_id(&self, id: EmojiId) -> Result<(), DbError> {
        let result = sqlx::query(r"DELETE FROM emojis WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tracing::debug!(%id, "Deleted emoji");
        Ok(())
    }
}

/// A row from the `emojis` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmojiRow {
    /// Primary key.
    pub id: i32,
    /// Stored glyph.
    pub character: String,
}

impl From<EmojiRow> for Emoji {
    fn from(row: EmojiRow) -> Self {
        Self {
            id: EmojiId(row.id),
            character: row.character,
        }
    }
}
