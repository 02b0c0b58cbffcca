//! Load parameters for a benchmark run.

use crate::error::BenchError;

/// Default number of identifiers inserted into each collection.
pub const DEFAULT_TOTAL_COUNT: usize = 10_000_000;

/// Default number of identifiers submitted per bulk insert.
pub const DEFAULT_BATCH_SIZE: usize = 100_000;

/// Default logical database holding both collections.
pub const DEFAULT_DATABASE: &str = "testIds";

/// Parameters controlling a bulk-load run.
#[derive(Debug, Clone, Copy)]
pub struct LoadConfig {
    /// Total identifiers to generate per collection.
    pub total_count: usize,
    /// Identifiers submitted per bulk insert.
    pub batch_size: usize,
}

impl LoadConfig {
    /// Number of full batches submitted, by integer division.
    ///
    /// Any remainder (see [`LoadConfig::remainder`]) is not loaded.
    #[must_use]
    pub fn batch_count(&self) -> usize {
        self.total_count / self.batch_size
    }

    /// Identifiers left over after the full batches; dropped, not loaded.
    #[must_use]
    pub fn remainder(&self) -> usize {
        self.total_count % self.batch_size
    }

    /// Validates the configuration before any connection is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Config`] when `batch_size` is zero.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.batch_size == 0 {
            return Err(BenchError::Config {
                reason: "batch size must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
