//! `idbench ping` command.

use crate::adapters::live::MongoStore;
use crate::error::BenchError;

/// Execute the `ping` command: connect, verify liveness, report, disconnect.
///
/// # Errors
///
/// Returns [`BenchError::Connection`] when the store cannot be reached or
/// does not answer the liveness check.
pub async fn run(database: &str) -> Result<(), BenchError> {
    MongoStore::connect(database).await?;
    println!("document store is reachable");
    Ok(())
}
