//! fixwatch Store - filesystem collaborators for the fixwatch engine
//!
//! Provides:
//! - CSV codecs for raw listings and canonical fixture files
//! - A file-backed `BaselineStore` with atomic commits
//! - Extract writing with stale-file cleanup
//! - An advisory single-writer lock
//! - `fixwatch.toml` loading

pub mod atomic;
pub mod baseline;
pub mod codec;
pub mod config;
pub mod errors;
pub mod exports;
pub mod lock;

// Re-export key types
pub use baseline::FsBaselineStore;
pub use codec::{LenientRead, SkippedRow};
pub use config::{load_config, FileLayout, FixwatchConfig, CONFIG_FILE_NAME};
pub use errors::Result;
pub use exports::{clean_extracts, write_extracts, ExportOutcome};
pub use lock::WriterLock;
