//! Report builder: diff partitions → tabular extracts, notification text,
//! and sync status.
//!
//! Everything here is a pure rendering of a [`FixtureDiff`](crate::diff::FixtureDiff);
//! writing files and delivering notifications belong to the caller.

pub mod notification;
pub mod status;
pub mod tabular;

pub use notification::{build_notification, Notification, Priority};
pub use status::SyncStatus;
pub use tabular::{build_extracts, ExportKind, Extract};
