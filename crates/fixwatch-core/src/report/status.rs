use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts-only comparison of current and baseline keys
///
/// Cheaper than a full diff: no field comparison, and postponed fixtures
/// count as new when their key is not in the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    pub current_len: usize,
    pub baseline_len: usize,
    pub new_count: usize,
    pub removed_count: usize,
    /// Whether any baseline, even an empty one, had been committed
    pub baseline_committed: bool,
}

impl SyncStatus {
    pub fn from_snapshots(current: &Snapshot, baseline: &Snapshot) -> Self {
        Self {
            current_len: current.len(),
            baseline_len: baseline.len(),
            new_count: current
                .iter()
                .filter(|(key, _)| !baseline.contains_key(key))
                .count(),
            removed_count: baseline
                .iter()
                .filter(|(key, _)| !current.contains_key(key))
                .count(),
            baseline_committed: !baseline.is_empty(),
        }
    }

    /// Record what the baseline store knows about commits
    pub fn with_baseline_committed(mut self, committed: bool) -> Self {
        self.baseline_committed = committed;
        self
    }

    pub fn has_baseline(&self) -> bool {
        self.baseline_committed
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current fixtures:   {}", self.current_len)?;
        write!(f, "Baseline fixtures:  {}", self.baseline_len)?;
        if self.has_baseline() {
            write!(f, "\nNew (not yet published): {}", self.new_count)?;
            write!(f, "\nRemoved (need deletion): {}", self.removed_count)?;
        } else {
            write!(f, "\nNo baseline committed yet")?;
        }
        Ok(())
    }
}
