//! Error helpers for rollcall-store
//!
//! Everything surfaces as the canonical `ExError` from rollcall-core.

use rollcall_core::errors::{ExError, ExErrorKind};
use rusqlite::ffi;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::BackendFailure)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Classify a rusqlite error
///
/// Primary-key and unique violations become `ConstraintViolation`,
/// foreign-key violations `NotFound`; everything else is `BackendFailure`.
/// The operation is left unset for the caller to fill in.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            match e.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    ExErrorKind::ConstraintViolation
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ExErrorKind::NotFound,
                _ => ExErrorKind::BackendFailure,
            }
        }
        _ => ExErrorKind::BackendFailure,
    };

    ExError::new(kind).with_message(format!("sqlite: {}", err))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
