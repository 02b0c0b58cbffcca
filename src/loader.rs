//! Batched bulk loader: generate, insert, release, repeat.

use tracing::debug;

use crate::config::LoadConfig;
use crate::error::BenchError;
use crate::ports::{DocumentStore, IdGenerator, IdRecord};

/// Inserts `config.total_count` generated identifiers into `collection` in
/// fixed-size batches.
///
/// Each batch is materialized from fresh generator calls, submitted as one
/// ordered bulk insert, then dropped before the next begins, so in-flight
/// memory stays bounded by one batch. Batches run strictly sequentially.
///
/// Only `config.batch_count()` full batches are submitted; a remainder from
/// uneven division is not loaded (see [`LoadConfig::remainder`]).
///
/// # Errors
///
/// Returns the first [`BenchError::Write`] a batch produces; nothing already
/// inserted is rolled back and no further batches are attempted.
pub async fn load_all(
    store: &dyn DocumentStore,
    collection: &str,
    id_gen: &dyn IdGenerator,
    config: &LoadConfig,
) -> Result<(), BenchError> {
    let batches = config.batch_count();

    for batch_no in 1..=batches {
        let batch: Vec<IdRecord> =
            (0..config.batch_size).map(|_| IdRecord::new(id_gen.generate_id())).collect();

        store.insert_batch(collection, batch).await?;
        debug!(collection, batch = batch_no, of = batches, "batch inserted");
    }

    Ok(())
}
