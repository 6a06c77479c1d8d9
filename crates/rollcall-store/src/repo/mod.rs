//! Repository layer for persisting the directory to SQLite

pub mod directory;
pub mod sqlite_repo;

pub use directory::SqliteDirectory;
pub use sqlite_repo::SqliteRepo;
