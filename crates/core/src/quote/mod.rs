mod operations;
mod types;

pub use operations::{latest_quote, next_sequence_number, origin_address, submission_timestamp};
pub use types::{NewQuote, Quote, QuoteId};
