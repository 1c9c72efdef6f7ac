/// Warehouse configuration and credentials
pub mod config;
/// PostgreSQL-protocol warehouse sink
#[cfg(feature = "warehouse")]
pub mod postgres;
/// CSV snapshot writer
pub mod snapshot;
/// Warehouse sink abstraction and replicator
pub mod warehouse;
