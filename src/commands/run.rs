//! `idbench run` command.

use tracing::warn;

use crate::bench;
use crate::config::LoadConfig;
use crate::context::BenchContext;
use crate::error::BenchError;

/// Execute the `run` command: connect once, then load each collection.
///
/// Parameters are validated before any connection is attempted, so an
/// unusable configuration never reaches the store.
///
/// # Errors
///
/// Returns the first [`BenchError`] from validation, connection, indexing,
/// or loading. Nothing already inserted is removed on failure.
pub async fn run(count: usize, batch_size: usize, database: &str) -> Result<(), BenchError> {
    let config = LoadConfig { total_count: count, batch_size };
    config.validate()?;

    if config.remainder() != 0 {
        warn!(
            remainder = config.remainder(),
            "count is not a multiple of batch size; the partial batch will not be loaded"
        );
    }

    let ctx = BenchContext::live(database).await?;
    bench::run_comparison(&ctx, &config).await?;

    let loaded = config.batch_count() * config.batch_size;
    println!(
        "Loaded {loaded} identifiers into each of {} and {}.",
        bench::UUID_COLLECTION,
        bench::ULID_COLLECTION
    );
    Ok(())
}
