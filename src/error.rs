//! Error taxonomy for `idbench`.
//!
//! Every variant is fatal to a run; there is no local recovery. The `Display`
//! message names the failing stage and includes the underlying driver cause.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed underlying cause carried by the fatal error variants.
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Fatal errors surfaced by a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The document store could not be reached or validated.
    #[error("cannot connect to the store: {source}")]
    Connection {
        /// The underlying driver error.
        #[source]
        source: BoxedError,
    },
    /// The unique index could not be established.
    #[error("failed to create index `{index}` on `{collection}`: {source}")]
    Index {
        /// Collection the index was being built on.
        collection: String,
        /// Name of the index.
        index: String,
        /// The underlying driver error.
        #[source]
        source: BoxedError,
    },
    /// A bulk insert was rejected.
    #[error("bulk insert into `{collection}` failed: {source}")]
    Write {
        /// Collection the batch targeted.
        collection: String,
        /// The underlying driver error.
        #[source]
        source: BoxedError,
    },
    /// The load parameters were invalid (checked before any connection).
    #[error("invalid configuration: {reason}")]
    Config {
        /// Human-readable reason the configuration was rejected.
        reason: String,
    },
}
