//! In-memory book store
//!
//! Mirrors the Postgres contract: ids start at 1 and are never reused,
//! update/delete of a missing id touch zero rows.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::store::{BookStore, DbError};
use crate::models::{Book, NewBook};

#[derive(Default)]
struct Inner {
    last_id: i64,
    books: BTreeMap<i64, Book>,
}

/// Book store held entirely in process memory
#[derive(Default)]
pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn get_by_id(&self, id: i64) -> Result<Book, DbError> {
        self.inner
            .read()
            .await
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::book_not_found(id))
    }

    async fn get_all(&self) -> Result<Vec<Book>, DbError> {
        Ok(self.inner.read().await.books.values().cloned().collect())
    }

    async fn insert(&self, book: &NewBook) -> Result<i64, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.books.insert(id, book.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, book: &Book) -> Result<u64, DbError> {
        let mut inner = self.inner.write().await;
        match inner.books.get_mut(&book.id) {
            Some(existing) => {
                existing.title.clone_from(&book.title);
                existing.description.clone_from(&book.description);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let removed = self.inner.write().await.books.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
