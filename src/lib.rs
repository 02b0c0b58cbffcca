//! Core library for the `idbench` CLI.
//!
//! Bulk-loads two collections of a document store — one with random UUIDs,
//! one with time-ordered ULIDs — each under a pre-built unique index, so an
//! operator can compare how the two key distributions behave at insert time.

pub mod adapters;
pub mod bench;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod ports;

pub use error::BenchError;

/// Run the parsed CLI command.
///
/// # Errors
///
/// Returns the [`BenchError`] of the executed command; the binary surfaces
/// it on stderr and exits non-zero.
pub async fn run(cli: cli::Cli) -> Result<(), BenchError> {
    commands::dispatch(cli.command).await
}
