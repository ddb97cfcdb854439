//! MongoDB repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use quotebook_core::backend::BackendKind;
use quotebook_core::quote::{NewQuote, Quote};
use quotebook_core::storage::{QuoteRepository, Result};

use super::conversions::{id_filter, id_to_string, QuoteDocument};
use super::error::map_mongo_error;

const COLLECTION_NAME: &str = "quotes";

/// MongoDB-based quote repository.
pub struct MongoRepository {
    database: Database,
    quotes: Collection<QuoteDocument>,
}

impl MongoRepository {
    /// Creates a repository for `database` on the server at `uri`.
    ///
    /// The driver connects in the background; an unreachable server shows up
    /// as a server-selection error once `timeout` elapses on each operation.
    pub async fn connect(uri: &str, database: &str, timeout: Duration) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await.map_err(map_mongo_error)?;
        options.app_name = Some("quotebook".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(map_mongo_error)?;
        Ok(Self::new(client.database(database)))
    }

    /// Wraps an existing database handle.
    pub fn new(database: Database) -> Self {
        let quotes = database.collection::<QuoteDocument>(COLLECTION_NAME);
        Self { database, quotes }
    }
}

#[async_trait]
impl QuoteRepository for MongoRepository {
    fn kind(&self) -> BackendKind {
        BackendKind::Mongo
    }

    async fn create(&self, quote: &NewQuote) -> Result<Quote> {
        let result = self
            .quotes
            .insert_one(QuoteDocument::from(quote))
            .await
            .map_err(map_mongo_error)?;

        Ok(quote
            .clone()
            .into_quote(id_to_string(&result.inserted_id)))
    }

    async fn get_all(&self) -> Result<Vec<Quote>> {
        let documents: Vec<QuoteDocument> = self
            .quotes
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;

        documents
            .into_iter()
            .map(QuoteDocument::into_quote)
            .collect()
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.quotes
            .delete_one(id_filter(id))
            .await
            .map_err(map_mongo_error)?;

        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        self.quotes
            .count_documents(doc! {})
            .await
            .map_err(map_mongo_error)
    }

    async fn is_available(&self) -> bool {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .is_ok()
    }
}
