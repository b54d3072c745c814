//! bookshelf-server: HTTP CRUD service for a single `books` table
//!
//! Five routes map one-to-one onto five parameterized SQL statements.
//! Handlers receive their storage through [`AppState`], so the Postgres
//! store can be swapped for [`MemoryBookStore`] in tests and local runs.

pub mod db;
pub mod http;
pub mod models;

pub use db::{BookStore, DbError, MemoryBookStore, PgBookStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{Book, NewBook, ValidationError};
