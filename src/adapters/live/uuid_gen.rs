//! Random-identifier adapter for the `IdGenerator` port.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Produces version-4 UUIDs in canonical hyphenated form.
///
/// Stateless apart from the OS-backed randomness source inside the `uuid`
/// crate, which is collision-resistant at the volumes this tool inserts.
pub struct RandomUuidGenerator;

impl RandomUuidGenerator {
    /// Creates a new random UUID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomUuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomUuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
