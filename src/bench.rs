//! Run orchestration: index first, then load, once per identifier scheme.

use tracing::info;

use crate::config::LoadConfig;
use crate::context::BenchContext;
use crate::error::BenchError;
use crate::loader;
use crate::ports::{DocumentStore, IdGenerator};

/// Collection receiving randomly-distributed identifiers.
pub const UUID_COLLECTION: &str = "uuids";

/// Collection receiving time-ordered identifiers.
pub const ULID_COLLECTION: &str = "ulids";

/// Document field the identifiers land under, and the indexed field.
pub const ID_FIELD: &str = "id";

/// Ensures the unique index on `collection`, then bulk-loads it from `id_gen`.
///
/// The index is built before any data exists so that every insert pays the
/// incremental index-maintenance cost. That ordering is the experimental
/// variable: random keys scatter index updates, time-ordered keys append.
///
/// # Errors
///
/// Returns the first [`BenchError`] from index creation or loading.
pub async fn load_scheme(
    store: &dyn DocumentStore,
    collection: &str,
    id_gen: &dyn IdGenerator,
    config: &LoadConfig,
) -> Result<(), BenchError> {
    info!(collection, "ensuring unique index");
    store.ensure_unique_index(collection, ID_FIELD).await?;

    info!(collection, total = config.total_count, batch_size = config.batch_size, "loading");
    loader::load_all(store, collection, id_gen, config).await
}

/// Loads both collections sequentially: `uuids` first, then `ulids`.
///
/// No parallelism between the two runs; the point is a clean before/after
/// comparison, not throughput. The first error aborts everything that
/// follows, leaving any partially-inserted data in place.
///
/// # Errors
///
/// Propagates the first [`BenchError`] from either scheme's run.
pub async fn run_comparison(ctx: &BenchContext, config: &LoadConfig) -> Result<(), BenchError> {
    load_scheme(ctx.store.as_ref(), UUID_COLLECTION, ctx.uuid_gen.as_ref(), config).await?;
    load_scheme(ctx.store.as_ref(), ULID_COLLECTION, ctx.ulid_gen.as_ref(), config).await?;
    Ok(())
}
