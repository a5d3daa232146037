//! The persistence seam between the HTTP layer and `PostgreSQL`.
//!
//! Handlers depend on [`EmojiRepository`] rather than on a concrete pool
//! so the API state can be built with an in-memory double in tests. The
//! production implementation is [`PostgresPool`], which delegates each
//! call to an [`EmojiStore`] borrowed from the pool.

use core::future::Future;

use emoji_types::{Emoji, EmojiId};

use crate::emoji_store::EmojiStore;
use crate::error::DbError;
use crate::postgres::PostgresPool;

/// Access to persisted emoji records.
///
/// Implementations must be safe to share across concurrently running
/// request handlers.
pub trait EmojiRepository: Send + Sync + 'static {
    /// List every emoji.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] (or an equivalent failure) if the
    /// records cannot be read.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Emoji>, DbError>> + Send;

    /// Store a new emoji with a database-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] (or an equivalent failure) if the
    /// record cannot be written.
    fn insert(&self, character: &str) -> impl Future<Output = Result<(), DbError>> + Send;

    /// Remove the emoji with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::NotFound`] if no record has that id, or
    /// [`DbError::Postgres`] if the delete itself fails.
    fn delete_by_id(&self, id: EmojiId) -> impl Future<Output = Result<(), DbError>> + Send;
}

impl EmojiRepository for PostgresPool {
    async fn list_all(&self) -> Result<Vec<Emoji>, DbError> {
        EmojiStore::new(self.pool()).list_all().await
    }

    async fn insert(&self, character: &str) -> Result<(), DbError> {
        EmojiStore::new(self.pool()).insert(character).await
    }

    async fn delete_by_id(&self, id: EmojiId) -> Result<(), DbError> {
        EmojiStore::new(self.pool()).delete_by_id(id).await
    }
}
