//! File-backed baseline store.

#![allow(clippy::result_large_err)]

use crate::codec::{read_snapshot, write_snapshot};
use crate::errors::Result;
use fixwatch_core::{log_op_end, log_op_error, log_op_start, BaselineStore, Schema, Snapshot};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Baseline persisted as a canonical CSV file
///
/// A missing file means nothing has been committed yet and reads as an
/// empty snapshot. Commits replace the file via temp-file + rename.
pub struct FsBaselineStore {
    path: PathBuf,
    schema: Schema,
}

impl FsBaselineStore {
    pub fn new(path: impl Into<PathBuf>, schema: Schema) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

}

impl BaselineStore for FsBaselineStore {
    fn snapshot(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            tracing::debug!(
                component = module_path!(),
                op = "load_baseline",
                path = %self.path.display(),
                "no baseline committed yet"
            );
            return Ok(Snapshot::new());
        }
        read_snapshot(&self.path, &self.schema)
    }

    fn commit(&mut self, snapshot: &Snapshot) -> Result<()> {
        let start = Instant::now();
        log_op_start!(
            "commit_baseline",
            fixtures = snapshot.len(),
            path = %self.path.display()
        );

        match write_snapshot(&self.path, &self.schema, snapshot) {
            Ok(()) => {
                log_op_end!(
                    "commit_baseline",
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Ok(())
            }
            Err(err) => {
                log_op_error!(
                    "commit_baseline",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    /// A committed baseline file exists, possibly holding only the header
    fn has_baseline(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FsBaselineStore::new(dir.path().join("baseline.csv"), Schema::default());
        assert!(!store.has_baseline());
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_empty_commit_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let mut store = FsBaselineStore::new(dir.path().join("baseline.csv"), Schema::default());
        store.commit(&Snapshot::new()).unwrap();

        assert!(store.has_baseline());
        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("Date,Time,Venue,Ground,Referee,Team,Competition Name"));
        assert!(store.snapshot().unwrap().is_empty());
    }
}
