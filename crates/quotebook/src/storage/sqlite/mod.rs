//! SQLite storage backend implementation.
//!
//! The embedded relational store. Uses `rusqlite` for synchronous operations
//! and `tokio-rusqlite` to run them off the async executor.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
