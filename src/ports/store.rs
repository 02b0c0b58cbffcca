//! Document store port: index creation and batched inserts.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Boxed future type alias used by [`DocumentStore`] to keep the trait
/// dyn-compatible.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, BenchError>> + Send + 'a>>;

/// One inserted document: a single string identifier under the `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRecord {
    /// The identifier value produced by one generator call.
    pub id: String,
}

impl IdRecord {
    /// Wraps an identifier value in a document.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Deterministic index name for a single-field index: `<collection>_<field>`.
#[must_use]
pub fn index_name(collection: &str, field: &str) -> String {
    format!("{collection}_{field}")
}

/// Write-side operations the benchmark needs from a document store.
///
/// There is deliberately no read path here; inspecting the loaded
/// collections is left to the operator.
pub trait DocumentStore: Send + Sync {
    /// Ensures a unique ascending index on `field` exists for `collection`,
    /// named via [`index_name`].
    ///
    /// Idempotent: a second call against an identical index succeeds. Must be
    /// safe to call before the collection holds any data — the index is built
    /// first so every subsequent insert pays its maintenance cost, which is
    /// the behavior under comparison.
    ///
    /// # Errors
    ///
    /// Resolves to [`BenchError::Index`] when the index cannot be created,
    /// e.g. an index with the same name but different options already exists.
    fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreFuture<'_, ()>;

    /// Submits `batch` as one ordered bulk insert into `collection`.
    ///
    /// # Errors
    ///
    /// Resolves to [`BenchError::Write`] when the store rejects the batch
    /// (constraint violation, oversized payload, transport failure).
    fn insert_batch(&self, collection: &str, batch: Vec<IdRecord>) -> StoreFuture<'_, ()>;
}
