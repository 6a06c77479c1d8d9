//! rollcall core - domain model and in-memory directory
//!
//! This crate provides:
//! - Guest, Event and Membership models with strongly typed ids
//! - The `DirectoryBackend` repository trait shared by every storage backend
//! - An in-memory `Store` implementing that trait with explicit
//!   filter/group/sort passes
//! - The error facility (`DirectoryError`, `ExError`, `ExErrorKind`)
//! - The structured logging facility

pub mod backend;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

pub use rollcall_core_types::schema;

// Re-export commonly used types
pub use backend::{BackendResult, DirectoryBackend};
pub use errors::{DirectoryError, ExError, ExErrorKind, Result};
pub use model::{Event, EventId, Guest, GuestId, GuestRanking, Membership};
pub use ops::Store;
