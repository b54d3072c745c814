//! Storage contract shared by the Postgres and in-memory stores

use async_trait::async_trait;

use crate::models::{Book, NewBook};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn book_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "book",
            id: id.to_string(),
        }
    }
}

/// Persistence operations over the `books` table.
///
/// `update` and `delete` do not report a missing id as an error; they return
/// the number of rows touched, which is zero in that case.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Book, DbError>;

    /// All books in storage order. Rows that fail to decode are skipped.
    async fn get_all(&self) -> Result<Vec<Book>, DbError>;

    /// Insert a book, returning the id assigned by storage.
    async fn insert(&self, book: &NewBook) -> Result<i64, DbError>;

    async fn update(&self, book: &Book) -> Result<u64, DbError>;

    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}
