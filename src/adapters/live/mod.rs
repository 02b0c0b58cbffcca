//! Live adapters backed by the system clock, real entropy, and MongoDB.

pub mod clock;
pub mod mongo;
pub mod ulid_gen;
pub mod uuid_gen;

pub use clock::LiveClock;
pub use mongo::MongoStore;
pub use ulid_gen::MonotonicUlidGenerator;
pub use uuid_gen::RandomUuidGenerator;
