mod error;
mod selector;

pub use error::UnknownBackend;
pub use selector::{select_backend, BackendKind};
