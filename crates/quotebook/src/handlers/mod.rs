pub mod admin;
pub mod error;
pub mod health;
pub mod quotes;
pub mod status;

pub use error::AppError;
