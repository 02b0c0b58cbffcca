//! In-memory adapter for the `DocumentStore` port.
//!
//! Substitutes for MongoDB in tests: records every insert attempt, enforces
//! the unique index on `id` the way the store would, and can be told to
//! reject the nth bulk insert of a collection to exercise abort paths.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::BenchError;
use crate::ports::store::{index_name, DocumentStore, IdRecord, StoreFuture};

#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexSpec {
    name: String,
    field: String,
    unique: bool,
}

#[derive(Default)]
struct CollectionState {
    ids: Vec<String>,
    seen: HashSet<String>,
    batch_sizes: Vec<usize>,
    insert_attempts: usize,
    indexes: Vec<IndexSpec>,
    fail_on_attempt: Option<usize>,
}

impl CollectionState {
    fn has_unique_id_index(&self) -> bool {
        self.indexes.iter().any(|ix| ix.unique && ix.field == "id")
    }
}

/// In-memory document store. Clones share the same underlying state, so a
/// test can hand one clone to the code under test and inspect the other.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, CollectionState>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the `attempt`th (1-based) bulk insert into `collection` fail.
    pub fn fail_batch(&self, collection: &str, attempt: usize) {
        let mut collections = self.collections.lock();
        collections.entry(collection.to_string()).or_default().fail_on_attempt = Some(attempt);
    }

    /// Documents currently held by `collection`.
    #[must_use]
    pub fn document_count(&self, collection: &str) -> usize {
        self.collections.lock().get(collection).map_or(0, |c| c.ids.len())
    }

    /// Identifier values in insertion order.
    #[must_use]
    pub fn ids(&self, collection: &str) -> Vec<String> {
        self.collections.lock().get(collection).map_or_else(Vec::new, |c| c.ids.clone())
    }

    /// Sizes of the batches accepted so far, in submission order.
    #[must_use]
    pub fn batch_sizes(&self, collection: &str) -> Vec<usize> {
        self.collections.lock().get(collection).map_or_else(Vec::new, |c| c.batch_sizes.clone())
    }

    /// Bulk inserts attempted against `collection`, including rejected ones.
    #[must_use]
    pub fn insert_attempts(&self, collection: &str) -> usize {
        self.collections.lock().get(collection).map_or(0, |c| c.insert_attempts)
    }

    /// Names of the indexes present on `collection`.
    #[must_use]
    pub fn index_names(&self, collection: &str) -> Vec<String> {
        self.collections
            .lock()
            .get(collection)
            .map_or_else(Vec::new, |c| c.indexes.iter().map(|ix| ix.name.clone()).collect())
    }
}

impl DocumentStore for MemoryStore {
    fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreFuture<'_, ()> {
        let collection = collection.to_string();
        let spec = IndexSpec {
            name: index_name(&collection, field),
            field: field.to_string(),
            unique: true,
        };

        Box::pin(async move {
            let mut collections = self.collections.lock();
            let state = collections.entry(collection.clone()).or_default();

            if let Some(existing) = state.indexes.iter().find(|ix| ix.name == spec.name) {
                if *existing == spec {
                    return Ok(());
                }
                return Err(BenchError::Index {
                    collection,
                    index: spec.name,
                    source: "an index with this name already exists with different options".into(),
                });
            }
            state.indexes.push(spec);
            Ok(())
        })
    }

    fn insert_batch(&self, collection: &str, batch: Vec<IdRecord>) -> StoreFuture<'_, ()> {
        let collection = collection.to_string();

        Box::pin(async move {
            let mut collections = self.collections.lock();
            let state = collections.entry(collection.clone()).or_default();

            state.insert_attempts += 1;
            if state.fail_on_attempt == Some(state.insert_attempts) {
                return Err(BenchError::Write {
                    collection,
                    source: "injected batch failure".into(),
                });
            }

            if state.has_unique_id_index() {
                if let Some(dup) = batch.iter().find(|record| state.seen.contains(&record.id)) {
                    return Err(BenchError::Write {
                        collection,
                        source: format!("duplicate key: {:?}", dup.id).into(),
                    });
                }
            }

            state.batch_sizes.push(batch.len());
            for record in batch {
                state.seen.insert(record.id.clone());
                state.ids.push(record.id);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(ids: &[&str]) -> Vec<IdRecord> {
        ids.iter().map(|id| IdRecord::new(*id)).collect()
    }

    #[tokio::test]
    async fn ensure_unique_index_is_idempotent() {
        let store = MemoryStore::new();
        store.ensure_unique_index("uuids", "id").await.unwrap();
        store.ensure_unique_index("uuids", "id").await.unwrap();
        assert_eq!(store.index_names("uuids"), vec!["uuids_id"]);
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected_under_unique_index() {
        let store = MemoryStore::new();
        store.ensure_unique_index("uuids", "id").await.unwrap();
        store.insert_batch("uuids", records(&["a", "b"])).await.unwrap();

        let err = store.insert_batch("uuids", records(&["b"])).await.unwrap_err();
        assert!(err.to_string().contains("duplicate key"));
        assert_eq!(store.document_count("uuids"), 2);
    }

    #[tokio::test]
    async fn duplicates_pass_without_an_index() {
        let store = MemoryStore::new();
        store.insert_batch("scratch", records(&["a"])).await.unwrap();
        store.insert_batch("scratch", records(&["a"])).await.unwrap();
        assert_eq!(store.document_count("scratch"), 2);
    }

    #[tokio::test]
    async fn injected_failure_rejects_the_chosen_attempt() {
        let store = MemoryStore::new();
        store.fail_batch("uuids", 2);

        store.insert_batch("uuids", records(&["a"])).await.unwrap();
        let err = store.insert_batch("uuids", records(&["b"])).await.unwrap_err();
        assert!(err.to_string().contains("injected"));

        assert_eq!(store.document_count("uuids"), 1);
        assert_eq!(store.insert_attempts("uuids"), 2);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.insert_batch("uuids", records(&["a"])).await.unwrap();
        assert_eq!(handle.document_count("uuids"), 1);
        assert_eq!(handle.batch_sizes("uuids"), vec![1]);
    }
}
