//! Postgres book repository
//!
//! Every operation is a single parameterized statement against `books`.
//! The id is cast to BIGINT on the way out so tables created with a
//! SERIAL (INT4) key decode as well as BIGSERIAL ones.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::db::store::{BookStore, DbError};
use crate::models::{Book, NewBook};

/// Book repository backed by a Postgres pool
#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn get_by_id(&self, id: i64) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            "SELECT id::BIGINT AS id, title, description FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::book_not_found(id))
    }

    /// Decodes row by row so a single bad row (e.g. a NULL title) is logged
    /// and dropped instead of failing the whole listing.
    async fn get_all(&self) -> Result<Vec<Book>, DbError> {
        let rows = sqlx::query("SELECT id::BIGINT AS id, title, description FROM books")
            .fetch_all(&self.pool)
            .await?;

        let books = rows
            .iter()
            .filter_map(|row| match Book::from_row(row) {
                Ok(book) => Some(book),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping undecodable book row");
                    None
                }
            })
            .collect();

        Ok(books)
    }

    async fn insert(&self, book: &NewBook) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO books (title, description) VALUES ($1, $2) RETURNING id::BIGINT",
        )
        .bind(&book.title)
        .bind(&book.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, book: &Book) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE books SET title = $1, description = $2 WHERE id = $3")
            .bind(&book.title)
            .bind(&book.description)
            .bind(book.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
