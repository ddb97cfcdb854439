mod admin;
mod quote;

pub use admin::{RequestedBackend, SetDbType};
pub use quote::CreateQuote;
