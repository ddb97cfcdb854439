//! Document conversion functions.

use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde::{Deserialize, Serialize};

use quotebook_core::quote::{NewQuote, Quote, QuoteId};
use quotebook_core::storage::RepositoryError;

/// Stored shape of a quote in the `quotes` collection.
///
/// `_id` is kept as raw BSON: the driver assigns ObjectIds, but documents
/// written by other tools may carry string or numeric ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    pub quote: String,
    pub timestamp: String,
    pub ip: String,
    #[serde(rename = "quoteNumber")]
    pub quote_number: i64,
}

impl From<&NewQuote> for QuoteDocument {
    fn from(quote: &NewQuote) -> Self {
        Self {
            id: None,
            quote: quote.text.clone(),
            timestamp: quote.submitted_at.clone(),
            ip: quote.origin_address.clone(),
            quote_number: quote.sequence_number,
        }
    }
}

impl QuoteDocument {
    /// Converts a stored document to the domain type.
    pub fn into_quote(self) -> Result<Quote, RepositoryError> {
        let id = self.id.as_ref().map(id_to_string).ok_or_else(|| {
            RepositoryError::Serialization("quote document has no _id".to_string())
        })?;

        Ok(Quote {
            id: QuoteId::Text(id),
            text: self.quote,
            submitted_at: self.timestamp,
            origin_address: self.ip,
            sequence_number: self.quote_number,
        })
    }
}

/// Renders a document `_id` as the opaque id handed to clients.
///
/// ObjectIds become their hex form and strings pass through, so either
/// round-trips through [`id_filter`].
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Filter matching a quote by its opaque id.
///
/// A 24-digit hex string is matched as an ObjectId; anything else is matched
/// as a literal string `_id`.
pub fn id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "_id": oid },
        Err(_) => doc! { "_id": id },
    }
}
