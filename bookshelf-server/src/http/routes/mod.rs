//! Route handlers organized by resource

pub mod books;
pub mod docs;
pub mod health;
