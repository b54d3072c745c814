//! Database layer - connection pool and book stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One parameterized statement per operation, no transactions
//! - Handlers depend on the `BookStore` trait, not on a concrete pool

pub mod pool;
pub mod repos;
pub mod store;

pub use pool::{create_pool, create_pool_with_options, DatabaseConfig, DEFAULT_MAX_CONNECTIONS};
pub use repos::{MemoryBookStore, PgBookStore};
pub use store::{BookStore, DbError};
