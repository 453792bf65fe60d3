//! The last externally committed snapshot.

use crate::errors::ExError;
use crate::snapshot::Snapshot;

/// Storage seam for the committed baseline
///
/// The diff engine never writes here; a baseline changes only through an
/// explicit [`commit`](BaselineStore::commit), which replaces it wholesale.
pub trait BaselineStore {
    /// The committed baseline, or an empty snapshot when nothing has been
    /// committed yet.
    fn snapshot(&self) -> Result<Snapshot, ExError>;

    /// Replace the baseline with `snapshot`.
    fn commit(&mut self, snapshot: &Snapshot) -> Result<(), ExError>;

    /// Whether a baseline has ever been committed. An empty committed
    /// baseline still counts.
    fn has_baseline(&self) -> bool;
}

/// Baseline held in memory, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct InMemoryBaselineStore {
    committed: Option<Snapshot>,
    commit_count: usize,
}

impl InMemoryBaselineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-committed baseline
    pub fn with_baseline(snapshot: Snapshot) -> Self {
        Self {
            committed: Some(snapshot),
            commit_count: 0,
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commit_count
    }
}

impl BaselineStore for InMemoryBaselineStore {
    fn snapshot(&self) -> Result<Snapshot, ExError> {
        Ok(self.committed.clone().unwrap_or_default())
    }

    fn commit(&mut self, snapshot: &Snapshot) -> Result<(), ExError> {
        self.committed = Some(snapshot.clone());
        self.commit_count += 1;
        Ok(())
    }

    fn has_baseline(&self) -> bool {
        self.committed.is_some()
    }
}
