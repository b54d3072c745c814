//! Book records and payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `books` table.
///
/// Also the body of `PUT /update`, where `id` selects the row to replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /create`.
///
/// The id is assigned by storage, so an `id` field in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewBook {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Attach a storage-assigned id.
    pub fn with_id(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            description: self.description,
        }
    }
}
