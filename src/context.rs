//! Benchmark context bundling the port trait objects.

use crate::adapters::live::{LiveClock, MongoStore, MonotonicUlidGenerator, RandomUuidGenerator};
use crate::error::BenchError;
use crate::ports::{DocumentStore, IdGenerator};

/// Bundles the store and the two identifier generators.
///
/// Constructors wire up different adapter implementations: `live` for a real
/// run against MongoDB, `with_store` for tests injecting a substitute store.
pub struct BenchContext {
    /// Document store both collections are loaded into.
    pub store: Box<dyn DocumentStore>,
    /// Generator feeding the random-identifier collection.
    pub uuid_gen: Box<dyn IdGenerator>,
    /// Generator feeding the time-ordered collection.
    pub ulid_gen: Box<dyn IdGenerator>,
}

impl BenchContext {
    /// Connects to MongoDB and wires both live generators.
    ///
    /// The ULID generator's entropy state is created here, once per process,
    /// and lives as long as the context.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Connection`] when the store is unreachable or
    /// fails its liveness check.
    pub async fn live(database: &str) -> Result<Self, BenchError> {
        Ok(Self::with_store(Box::new(MongoStore::connect(database).await?)))
    }

    /// Uses the given store with live generators.
    #[must_use]
    pub fn with_store(store: Box<dyn DocumentStore>) -> Self {
        Self {
            store,
            uuid_gen: Box::new(RandomUuidGenerator::new()),
            ulid_gen: Box::new(MonotonicUlidGenerator::new(Box::new(LiveClock))),
        }
    }
}
