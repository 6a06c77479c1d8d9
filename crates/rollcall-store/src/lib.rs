//! rollcall store - SQLite persistence for the event/guest directory
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed schema migrations (`migrations`)
//! - Row-level repository functions (`repo::SqliteRepo`)
//! - `SqliteDirectory`, the transactional `DirectoryBackend` implementation

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteDirectory;
