//! Command dispatch and handlers.

pub mod ping;
pub mod run;

use crate::cli::Command;
use crate::error::BenchError;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns the [`BenchError`] of the selected command handler.
pub async fn dispatch(command: Command) -> Result<(), BenchError> {
    match command {
        Command::Run { count, batch_size, database } => {
            run::run(count, batch_size, &database).await
        }
        Command::Ping { database } => ping::run(&database).await,
    }
}
