//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

#![allow(clippy::result_large_err)]

use crate::errors::{io_error_at, Result};
use std::fs;
use std::path::Path;

/// Atomically write bytes to a file
///
/// The temp file sits next to the target so the rename stays on one
/// filesystem. A reader sees either the old file or the new one.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error_at("create_dir", parent, e))?;
        }
    }

    let temp_path = target_path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| io_error_at("write_temp", &temp_path, e))?;
    fs::rename(&temp_path, target_path)
        .map_err(|e| io_error_at("rename_temp", target_path, e))?;

    Ok(())
}
