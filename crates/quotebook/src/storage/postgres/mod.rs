//! Postgres storage backend implementation.
//!
//! The external relational store, reached over the network through a lazily
//! connected `sqlx` pool. Nothing is dialled until the first query, so an
//! unreachable server surfaces as `ConnectionFailed` on each operation
//! instead of failing startup.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
