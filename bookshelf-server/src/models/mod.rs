//! Domain models
//!
//! Book payloads are validated by type only: anything that deserializes is
//! accepted and handed to the store as-is.

pub mod book;
pub mod validation;

pub use book::{Book, NewBook};
pub use validation::ValidationError;
