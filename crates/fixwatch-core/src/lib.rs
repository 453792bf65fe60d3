//! fixwatch Core - fixture normalization, classification and diff kernel
//!
//! This crate provides the pure engine behind fixwatch, including:
//! - Raw and canonical fixture models with a stable identity key
//! - The normalizer (dates, kick-off times, home/away orientation)
//! - A versioned, data-driven competition classifier
//! - Snapshots, snapshot digests and the `BaselineStore` seam
//! - The diff engine (New / Changed / Postponed / Removed)
//! - Report building: tabular extracts, summary text, notifications
//!
//! No file or network I/O happens here; see `fixwatch-store` and
//! `fixwatch-cli`.

pub mod classify;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod report;
pub mod snapshot;

// Re-export commonly used types
pub use classify::{Classification, Rule, RuleTable};
pub use config::{Column, ColumnSpec, Organization, Schema};
pub use diff::{compute_diff, render_human_summary, FixtureDiff};
pub use errors::{ExError, ExErrorKind, FixwatchError, Result};
pub use model::{EventType, Fixture, FixtureKey, FixtureTime, Ground, RawFixtureRecord, TeamBucket};
pub use normalize::{NormalizeWarning, NormalizedBatch, Normalizer};
pub use snapshot::{BaselineStore, InMemoryBaselineStore, Snapshot};
