//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_BATCH_SIZE, DEFAULT_DATABASE, DEFAULT_TOTAL_COUNT};

/// Top-level CLI parser for `idbench`.
#[derive(Debug, Parser)]
#[command(name = "idbench", version, about = "Compare UUID and ULID bulk-insert behavior under a unique index")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load both collections, building each unique index before its data.
    Run {
        /// Identifiers to insert per collection.
        #[arg(long, default_value_t = DEFAULT_TOTAL_COUNT)]
        count: usize,
        /// Identifiers per bulk insert.
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,
        /// Logical database holding both collections.
        #[arg(long, default_value = DEFAULT_DATABASE)]
        database: String,
    },
    /// Verify the document store is reachable and responding.
    Ping {
        /// Logical database to scope the handle to.
        #[arg(long, default_value = DEFAULT_DATABASE)]
        database: String,
    },
}
