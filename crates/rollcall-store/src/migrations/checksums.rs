//! Checksums of migration SQL

use sha2::{Digest, Sha256};

/// Compute the hex SHA-256 checksum of a migration body
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
