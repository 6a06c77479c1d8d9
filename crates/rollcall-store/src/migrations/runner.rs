//! Migration runner

#![allow(clippy::result_large_err)]

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::{get_migrations, DOMAIN_TABLES};
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending migrations to the database
///
/// Already-applied migrations are skipped after verifying their checksum.
///
/// # Errors
///
/// `ConstraintViolation` if an applied migration's checksum no longer
/// matches the embedded SQL; `BackendFailure` for SQL errors.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Drop every domain table and the migration ledger, then migrate again
///
/// Leaves an empty database at the current schema with id sequences
/// restarted.
pub fn reset_schema(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    for table in DOMAIN_TABLES {
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {table};"))
            .map_err(from_rusqlite)?;
    }
    tx.execute_batch("DROP TABLE IF EXISTS schema_version;")
        .map_err(from_rusqlite)?;
    // sqlite_sequence only exists once an AUTOINCREMENT table was created
    let has_sequence: bool = tx
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'",
            [],
            |_| Ok(true),
        )
        .optional()
        .map_err(from_rusqlite)?
        .unwrap_or(false);
    if has_sequence {
        tx.execute("DELETE FROM sqlite_sequence", [])
            .map_err(from_rusqlite)?;
    }
    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!("schema dropped");
    apply_migrations(conn)
}

fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = compute_checksum(sql);

    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    if let Some(recorded) = recorded {
        return match recorded {
            Some(expected) if expected != checksum => {
                Err(checksum_mismatch(migration_id, &expected, &checksum))
            }
            _ => Ok(()),
        };
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(migration_id, "migration applied");
    Ok(())
}
