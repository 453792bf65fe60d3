//! Content digest for snapshots.
//!
//! The digest covers the header row and every record rendered through the
//! [`Schema`], in key order. Two snapshots with the same records have the
//! same digest however they were built; any change to any exported field
//! changes it.

use crate::config::Schema;
use crate::errors::Result;
use crate::snapshot::Snapshot;
use sha2::{Digest, Sha256};

/// Compute the snapshot digest.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `FixwatchError::Serialization` if JSON serialization fails.
pub fn compute_snapshot_digest(snapshot: &Snapshot, schema: &Schema) -> Result<String> {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(snapshot.len() + 1);
    rows.push(schema.headers().iter().map(|h| h.to_string()).collect());
    rows.extend(snapshot.fixtures().map(|f| schema.row(f)));

    let canonical = serde_json::to_string(&rows)?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
