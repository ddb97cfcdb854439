//! Domain core for the quotebook service.
//!
//! Holds the quote model, backend selection and the storage contract. Nothing
//! here performs I/O; storage adapters live in the `quotebook` crate.

pub mod backend;
pub mod quote;
pub mod storage;
