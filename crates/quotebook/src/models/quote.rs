use serde::Deserialize;

/// Request payload for submitting a quote.
#[derive(Debug, Deserialize)]
pub struct CreateQuote {
    pub quote: String,
}
