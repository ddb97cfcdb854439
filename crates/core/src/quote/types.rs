use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned identifier of a stored quote.
///
/// Relational backends hand out integers, the document backend hands out
/// opaque strings. Serialized untagged so the JSON carries a plain number or
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteId {
    Int(i64),
    Text(String),
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteId::Int(id) => write!(f, "{id}"),
            QuoteId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for QuoteId {
    fn from(id: i64) -> Self {
        QuoteId::Int(id)
    }
}

impl From<String> for QuoteId {
    fn from(id: String) -> Self {
        QuoteId::Text(id)
    }
}

/// A stored quote.
///
/// Field names on the wire follow the contract the web frontend reads
/// (`quote`, `timestamp`, `ip`, `quoteNumber`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    #[serde(rename = "quote")]
    pub text: String,
    #[serde(rename = "timestamp")]
    pub submitted_at: String,
    #[serde(rename = "ip")]
    pub origin_address: String,
    #[serde(rename = "quoteNumber")]
    pub sequence_number: i64,
}

/// A quote that has been stamped but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub text: String,
    pub submitted_at: String,
    pub origin_address: String,
    pub sequence_number: i64,
}

impl NewQuote {
    /// Attaches the backend-assigned id.
    pub fn into_quote(self, id: impl Into<QuoteId>) -> Quote {
        Quote {
            id: id.into(),
            text: self.text,
            submitted_at: self.submitted_at,
            origin_address: self.origin_address,
            sequence_number: self.sequence_number,
        }
    }
}
