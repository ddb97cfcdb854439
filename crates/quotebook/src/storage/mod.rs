//! Storage backend implementations.
//!
//! Concrete implementations of `quotebook_core::storage::QuoteRepository`.
//! Each networked or embedded backend sits behind a cargo feature; any
//! combination can be compiled in and the active one is picked at startup.
//!
//! # Feature Flags
//!
//! - `sqlite`: embedded relational store via `rusqlite` / `tokio-rusqlite`
//! - `postgres`: external relational store via `sqlx`
//! - `mongo`: document store via `mongodb`

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "mongo")]
pub mod mongo;

#[cfg(test)]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;

#[cfg(feature = "mongo")]
pub use mongo::MongoRepository;

#[cfg(test)]
pub use inmemory::InMemoryRepository;
