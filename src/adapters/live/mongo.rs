//! Live adapter for the `DocumentStore` port backed by MongoDB.

use std::env;

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};

use crate::error::BenchError;
use crate::ports::store::{index_name, DocumentStore, IdRecord, StoreFuture};

/// Environment variable naming the MongoDB endpoint.
pub const MONGODB_URI_VAR: &str = "MONGODB_URI";

/// Endpoint used when [`MONGODB_URI_VAR`] is unset.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Live document store scoped to one logical MongoDB database.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connects to the endpoint named by `MONGODB_URI` (falling back to
    /// localhost) and returns a handle scoped to `database`.
    ///
    /// The driver connects lazily, so liveness is verified here with a `ping`
    /// round trip. Without it a misconfigured endpoint would only surface
    /// once the load loop issues its first write.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Connection`] when the URI cannot be parsed or
    /// the ping fails.
    pub async fn connect(database: &str) -> Result<Self, BenchError> {
        let uri = env::var(MONGODB_URI_VAR).unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());

        let client = Client::with_uri_str(&uri)
            .await
            .map_err(|e| BenchError::Connection { source: Box::new(e) })?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| BenchError::Connection { source: Box::new(e) })?;

        Ok(Self { db: client.database(database) })
    }
}

impl DocumentStore for MongoStore {
    fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreFuture<'_, ()> {
        let coll = self.db.collection::<IdRecord>(collection);
        let collection = collection.to_string();
        let name = index_name(&collection, field);
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(IndexOptions::builder().unique(true).name(name.clone()).build())
            .build();

        Box::pin(async move {
            coll.create_index(index).await.map_err(|e| BenchError::Index {
                collection,
                index: name,
                source: Box::new(e),
            })?;
            Ok(())
        })
    }

    fn insert_batch(&self, collection: &str, batch: Vec<IdRecord>) -> StoreFuture<'_, ()> {
        let coll = self.db.collection::<IdRecord>(collection);
        let collection = collection.to_string();

        Box::pin(async move {
            // insert_many is ordered by default; the whole batch is rejected
            // at the first failing document.
            coll.insert_many(batch)
                .await
                .map_err(|e| BenchError::Write { collection, source: Box::new(e) })?;
            Ok(())
        })
    }
}
