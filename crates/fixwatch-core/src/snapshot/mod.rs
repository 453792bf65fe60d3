//! Fixture snapshots.
//!
//! A snapshot is the full set of canonical records seen in one run (or the
//! committed baseline), keyed by [`FixtureKey`]. Iteration is always in key
//! order, so anything rendered from a snapshot is deterministic.
//!
//! ## Responsibilities
//!
//! - Keyed storage with last-write-wins on duplicate keys
//! - Content digest for cheap "nothing changed" checks
//! - The [`BaselineStore`] seam and an in-memory implementation
//!
//! ## Non-Responsibilities
//!
//! - File persistence (handled by `fixwatch-store`)

pub mod baseline;
pub mod digest;

pub use baseline::{BaselineStore, InMemoryBaselineStore};
pub use digest::compute_snapshot_digest;

use crate::model::{Fixture, FixtureKey};
use std::collections::BTreeMap;

/// Keyed set of canonical fixture records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    fixtures: BTreeMap<FixtureKey, Fixture>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from records in any order.
    ///
    /// A later record with the same key replaces an earlier one; each
    /// replacement is logged at `warn`.
    pub fn from_fixtures(fixtures: impl IntoIterator<Item = Fixture>) -> Self {
        let mut snapshot = Self::new();
        for fixture in fixtures {
            if let Some(previous) = snapshot.insert(fixture) {
                tracing::warn!(
                    component = module_path!(),
                    op = "build_snapshot",
                    fixture_key = %previous.key(),
                    "duplicate fixture key, keeping the later record"
                );
            }
        }
        snapshot
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, fixture: Fixture) -> Option<Fixture> {
        self.fixtures.insert(fixture.key(), fixture)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn get(&self, key: &FixtureKey) -> Option<&Fixture> {
        self.fixtures.get(key)
    }

    pub fn contains_key(&self, key: &FixtureKey) -> bool {
        self.fixtures.contains_key(key)
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&FixtureKey, &Fixture)> {
        self.fixtures.iter()
    }

    /// Records in key order
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.values()
    }
}

impl FromIterator<Fixture> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Fixture>>(iter: I) -> Self {
        Self::from_fixtures(iter)
    }
}
