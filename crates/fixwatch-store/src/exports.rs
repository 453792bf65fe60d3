//! Extract files: write the non-empty ones, remove stale ones.

#![allow(clippy::result_large_err)]

use crate::codec::write_extract;
use crate::config::FileLayout;
use crate::errors::{io_error_at, Result};
use fixwatch_core::report::{ExportKind, Extract};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What happened to the extract files of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOutcome {
    pub written: Vec<(ExportKind, PathBuf)>,
    /// Stale files from an earlier run, deleted
    pub removed: Vec<PathBuf>,
}

fn remove_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error_at("remove_extract", path, e)),
    }
}

/// Write each non-empty extract; delete the file of each empty one
pub fn write_extracts(dir: &Path, layout: &FileLayout, extracts: &[Extract]) -> Result<ExportOutcome> {
    let mut outcome = ExportOutcome::default();
    for extract in extracts {
        let path = layout.extract_path(dir, extract.kind);
        if extract.is_empty() {
            if remove_if_present(&path)? {
                tracing::info!(
                    component = module_path!(),
                    op = "write_extracts",
                    path = %path.display(),
                    "removed stale extract"
                );
                outcome.removed.push(path);
            }
        } else {
            write_extract(&path, extract)?;
            tracing::info!(
                component = module_path!(),
                op = "write_extracts",
                kind = %extract.kind,
                rows = extract.len(),
                path = %path.display(),
                "wrote extract"
            );
            outcome.written.push((extract.kind, path));
        }
    }
    Ok(outcome)
}

/// Delete all three extracts, e.g. after a commit has published them
pub fn clean_extracts(dir: &Path, layout: &FileLayout) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for kind in ExportKind::ALL {
        let path = layout.extract_path(dir, kind);
        if remove_if_present(&path)? {
            removed.push(path);
        }
    }
    Ok(removed)
}
