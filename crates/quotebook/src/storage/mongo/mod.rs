//! MongoDB storage backend implementation.
//!
//! The document store. Quotes live in the `quotes` collection with
//! driver-generated ObjectId keys, exposed to callers as hex strings.

mod conversions;
mod error;
mod repository;

pub use repository::MongoRepository;
