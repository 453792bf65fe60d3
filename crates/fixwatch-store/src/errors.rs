//! Error handling for fixwatch-store
//!
//! Wraps fixwatch-core ExError with store-specific helpers

use fixwatch_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error that names the file involved
pub fn io_error_at(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    io_error(operation, err).with_path(path.display().to_string())
}

/// Create a CSV encoding/decoding error
pub fn csv_error(operation: &str, path: &Path, err: csv::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a row-level error for a canonical file
pub fn record_error(path: &Path, line: u64, err: ExError) -> ExError {
    let message = format!("line {}: {}", line, err.message());
    err.with_op("read_fixtures")
        .with_path(path.display().to_string())
        .with_message(message)
}

/// Create a configuration error
pub fn config_error(path: &Path, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_path(path.display().to_string())
        .with_message(reason.to_string())
}

/// Create a lock-held error
pub fn lock_held(path: &Path) -> ExError {
    ExError::new(ExErrorKind::Concurrency)
        .with_op("acquire_writer_lock")
        .with_path(path.display().to_string())
        .with_message("another fixwatch writer holds the lock")
}
