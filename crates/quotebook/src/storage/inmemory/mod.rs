//! In-memory storage backend for testing.
//!
//! Stores quotes in a `Vec` behind an `Arc<RwLock<_>>` and can be switched
//! into an unavailable state to exercise degradation paths.

mod repository;

pub use repository::InMemoryRepository;
