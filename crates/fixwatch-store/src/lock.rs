//! Advisory single-writer lock.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error_at, lock_held, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Lock file name placed next to the baseline
pub const LOCK_FILE_NAME: &str = ".fixwatch.lock";

/// Held while a commit runs; the lock file is removed on drop
///
/// Advisory only: a crashed writer leaves the file behind and it has to be
/// removed by hand.
#[derive(Debug)]
pub struct WriterLock {
    path: PathBuf,
}

impl WriterLock {
    /// Take the lock in `dir`.
    ///
    /// # Errors
    ///
    /// - `Concurrency` when another writer holds the lock
    /// - `Io` for any other filesystem failure
    pub fn acquire(dir: &Path) -> Result<Self> {
        let path = dir.join(LOCK_FILE_NAME);
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(lock_held(&path)),
            Err(e) => return Err(io_error_at("acquire_writer_lock", &path, e)),
        };
        Self { path }.record_holder(file)
    }

    /// Write the holder pid, for whoever finds a stale lock. On failure the
    /// guard is dropped and the lock file goes with it.
    fn record_holder(self, mut out: impl Write) -> Result<Self> {
        writeln!(out, "{}", std::process::id())
            .and_then(|()| out.flush())
            .map_err(|e| io_error_at("acquire_writer_lock", &self.path, e))?;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for WriterLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(
                component = module_path!(),
                op = "release_writer_lock",
                path = %self.path.display(),
                error = %e,
                "failed to remove lock file"
            );
        }
    }
}
