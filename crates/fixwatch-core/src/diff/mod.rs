//! Fixture diff engine.
//!
//! Compares the current snapshot with the committed baseline and partitions
//! the result into New, Changed, Postponed and Removed fixtures.
//!
//! ## Entry point
//!
//! ```ignore
//! use fixwatch_core::diff::engine::compute_diff;
//!
//! let diff = compute_diff(&current, &baseline);
//! let summary = fixwatch_core::diff::human_summary::render_human_summary(&diff);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: partitions are in key order, independent of how the
//!   snapshots were built.
//! - **Postponement precedence**: a postponed current record is always
//!   Postponed, never New or Changed.
//! - **Read-only**: the baseline is never modified by a diff.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compute_diff, field_changes};
pub use human_summary::render_human_summary;
pub use model::{ChangeField, ChangedFixture, FieldChange, FixtureDiff};
