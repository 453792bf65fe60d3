//! Fixture diff computation engine.
//!
//! The entry point is [`compute_diff`]. It is pure and total: any pair of
//! snapshots yields a [`FixtureDiff`], and neither input is modified.

use crate::diff::model::{ChangeField, ChangedFixture, FieldChange, FixtureDiff};
use crate::model::Fixture;
use crate::snapshot::Snapshot;
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// Compare the compared fields of one fixture across runs.
///
/// Returns the differing fields in [`ChangeField::ALL`] order; empty when
/// the fixture is unchanged.
pub fn field_changes(baseline: &Fixture, current: &Fixture) -> Vec<FieldChange> {
    ChangeField::ALL
        .iter()
        .filter_map(|field| {
            let old = field.value_of(baseline);
            let new = field.value_of(current);
            (old != new).then_some(FieldChange {
                field: *field,
                old,
                new,
            })
        })
        .collect()
}

/// Compute the diff of `current` against `baseline`.
///
/// Per current record, in key order:
/// 1. postponed time → `postponed`, whatever the baseline holds
/// 2. key absent from baseline → `new`
/// 3. any compared field differs → `changed`, otherwise counted unchanged
///
/// Baseline records whose key is absent from `current` → `removed`.
pub fn compute_diff(current: &Snapshot, baseline: &Snapshot) -> FixtureDiff {
    let start = Instant::now();
    log_op_start!(
        "compute_diff",
        current_len = current.len(),
        baseline_len = baseline.len()
    );

    let mut diff = FixtureDiff {
        current_len: current.len(),
        baseline_len: baseline.len(),
        baseline_committed: !baseline.is_empty(),
        ..FixtureDiff::default()
    };

    for (key, fixture) in current.iter() {
        if fixture.is_postponed() {
            diff.postponed.push(fixture.clone());
            continue;
        }
        match baseline.get(key) {
            None => diff.new.push(fixture.clone()),
            Some(previous) => {
                let changes = field_changes(previous, fixture);
                if changes.is_empty() {
                    diff.unchanged += 1;
                } else {
                    diff.changed.push(ChangedFixture {
                        key: key.clone(),
                        current: fixture.clone(),
                        baseline: previous.clone(),
                        changes,
                    });
                }
            }
        }
    }

    diff.removed = baseline
        .iter()
        .filter(|(key, _)| !current.contains_key(key))
        .map(|(_, fixture)| fixture.clone())
        .collect();

    log_op_end!(
        "compute_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        new = diff.new.len(),
        changed = diff.changed.len(),
        postponed = diff.postponed.len(),
        removed = diff.removed.len(),
        unchanged = diff.unchanged
    );
    diff
}
