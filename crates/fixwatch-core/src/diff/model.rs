//! Fixture diff output types.
//!
//! All partitions are `Vec`s in key order so that serialized diffs are
//! byte-identical across runs.

use crate::model::{Fixture, FixtureKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field whose difference makes a fixture Changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangeField {
    Time,
    Venue,
    Ground,
    Referee,
}

impl ChangeField {
    /// Compared fields, in report order
    pub const ALL: [ChangeField; 4] = [
        ChangeField::Time,
        ChangeField::Venue,
        ChangeField::Ground,
        ChangeField::Referee,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChangeField::Time => "Time",
            ChangeField::Venue => "Venue",
            ChangeField::Ground => "Ground",
            ChangeField::Referee => "Referee",
        }
    }

    /// Trimmed comparison value of this field
    pub fn value_of(&self, fixture: &Fixture) -> String {
        match self {
            ChangeField::Time => fixture.time.to_string(),
            ChangeField::Venue => fixture.venue.trim().to_string(),
            ChangeField::Ground => fixture.ground.to_string(),
            ChangeField::Referee => fixture.referee.trim().to_string(),
        }
    }
}

impl fmt::Display for ChangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One `(field, old, new)` triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: ChangeField,
    pub old: String,
    pub new: String,
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}' -> '{}'", self.field, self.old, self.new)
    }
}

/// A fixture present on both sides whose compared fields differ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFixture {
    pub key: FixtureKey,
    pub current: Fixture,
    pub baseline: Fixture,
    /// Never empty
    pub changes: Vec<FieldChange>,
}

/// Current snapshot vs committed baseline
///
/// Every current record lands in exactly one of `new`, `changed`,
/// `postponed` or the `unchanged` count. `removed` holds baseline records
/// whose key is absent from the current snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureDiff {
    pub new: Vec<Fixture>,
    pub changed: Vec<ChangedFixture>,
    pub postponed: Vec<Fixture>,
    pub removed: Vec<Fixture>,
    pub unchanged: usize,
    /// Size of the current snapshot
    pub current_len: usize,
    /// Size of the baseline snapshot
    pub baseline_len: usize,
    /// Whether any baseline, even an empty one, had been committed
    pub baseline_committed: bool,
}

impl FixtureDiff {
    /// Nothing to publish
    pub fn is_empty(&self) -> bool {
        self.new.is_empty()
            && self.changed.is_empty()
            && self.postponed.is_empty()
            && self.removed.is_empty()
    }

    pub fn requires_action(&self) -> bool {
        !self.is_empty()
    }

    /// Current records accounted for; equals `current_len`
    pub fn total_classified(&self) -> usize {
        self.new.len() + self.changed.len() + self.postponed.len() + self.unchanged
    }

    /// No baseline had been committed
    pub fn is_first_run(&self) -> bool {
        !self.baseline_committed
    }

    /// Record what the baseline store knows about commits.
    ///
    /// [`compute_diff`](crate::diff::compute_diff) only sees snapshots and
    /// assumes an empty baseline was never committed.
    pub fn with_baseline_committed(mut self, committed: bool) -> Self {
        self.baseline_committed = committed;
        self
    }
}
