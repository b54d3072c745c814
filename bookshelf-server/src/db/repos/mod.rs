//! `BookStore` implementations
//!
//! - books: sqlx/Postgres, the production store
//! - memory: in-process map for tests and `serve --memory`

pub mod books;
pub mod memory;

pub use books::PgBookStore;
pub use memory::MemoryBookStore;
