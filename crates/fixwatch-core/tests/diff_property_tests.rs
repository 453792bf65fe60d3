//! Property tests for the diff engine over small generated snapshots.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{at, fixture};
use fixwatch_core::snapshot::{BaselineStore, InMemoryBaselineStore};
use fixwatch_core::{compute_diff, Fixture, FixtureKey, FixtureTime, Snapshot};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

const TEAMS: [&str; 3] = ["Junior A Football", "U14 GAA", "Minor Hurling GAA"];
const OPPONENTS: [&str; 4] = ["Carrigaline", "Douglas", "Ovens", "Unknown"];
const VENUES: [&str; 3] = ["Pitch 1", "Pitch 2", "Ballincollig"];

fn arb_fixture() -> impl Strategy<Value = Fixture> {
    (1u32..=6, 0usize..3, 0usize..4, 0usize..4, 0usize..3, any::<bool>()).prop_map(
        |(day, team, opponent, time, venue, referee_known)| {
            let mut f = fixture((2025, 10, day), TEAMS[team], OPPONENTS[opponent], "League");
            f.time = match time {
                0 => at("14:00"),
                1 => at("14:30"),
                2 => at("19:30"),
                _ => FixtureTime::Postponed,
            };
            f.venue = VENUES[venue].to_string();
            if !referee_known {
                f.referee = "TBC (Pending)".to_string();
            }
            f
        },
    )
}

/// Records with distinct keys, so insertion order cannot pick a winner
fn arb_fixtures() -> impl Strategy<Value = Vec<Fixture>> {
    prop::collection::vec(arb_fixture(), 0..14).prop_map(|fixtures| {
        let mut by_key: BTreeMap<FixtureKey, Fixture> = BTreeMap::new();
        for f in fixtures {
            by_key.entry(f.key()).or_insert(f);
        }
        by_key.into_values().collect()
    })
}

fn keys(fixtures: &[Fixture]) -> BTreeSet<FixtureKey> {
    fixtures.iter().map(Fixture::key).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_every_key_lands_in_exactly_one_partition(
        current in arb_fixtures(),
        baseline in arb_fixtures(),
    ) {
        let current = Snapshot::from_fixtures(current);
        let baseline = Snapshot::from_fixtures(baseline);
        let diff = compute_diff(&current, &baseline);

        let new = keys(&diff.new);
        let postponed = keys(&diff.postponed);
        let changed: BTreeSet<FixtureKey> = diff.changed.iter().map(|c| c.key.clone()).collect();
        let removed = keys(&diff.removed);

        prop_assert_eq!(diff.total_classified(), current.len());
        prop_assert!(new.is_disjoint(&postponed));
        prop_assert!(new.is_disjoint(&changed));
        prop_assert!(changed.is_disjoint(&postponed));

        let expected_removed: BTreeSet<FixtureKey> = baseline
            .iter()
            .filter(|(k, _)| !current.contains_key(k))
            .map(|(k, _)| k.clone())
            .collect();
        prop_assert_eq!(removed, expected_removed);
        for key in new.iter().chain(changed.iter()).chain(postponed.iter()) {
            prop_assert!(current.contains_key(key));
        }
    }

    #[test]
    fn prop_postponement_takes_precedence(
        current in arb_fixtures(),
        baseline in arb_fixtures(),
    ) {
        let current = Snapshot::from_fixtures(current);
        let diff = compute_diff(&current, &Snapshot::from_fixtures(baseline));

        let postponed_in_current = current.fixtures().filter(|f| f.is_postponed()).count();
        prop_assert_eq!(diff.postponed.len(), postponed_in_current);
        prop_assert!(diff.new.iter().all(|f| !f.is_postponed()));
        prop_assert!(diff.changed.iter().all(|c| !c.current.is_postponed()));
    }

    #[test]
    fn prop_diff_is_idempotent(current in arb_fixtures(), baseline in arb_fixtures()) {
        let current = Snapshot::from_fixtures(current);
        let baseline = Snapshot::from_fixtures(baseline);
        prop_assert_eq!(compute_diff(&current, &baseline), compute_diff(&current, &baseline));
    }

    #[test]
    fn prop_insertion_order_does_not_matter(
        current in arb_fixtures(),
        baseline in arb_fixtures(),
        rotation in 0usize..16,
    ) {
        let reference = compute_diff(
            &Snapshot::from_fixtures(current.clone()),
            &Snapshot::from_fixtures(baseline.clone()),
        );

        let mut current_permuted = current;
        current_permuted.reverse();
        let mut baseline_permuted = baseline;
        if !baseline_permuted.is_empty() {
            let n = rotation % baseline_permuted.len();
            baseline_permuted.rotate_left(n);
        }

        let permuted = compute_diff(
            &Snapshot::from_fixtures(current_permuted),
            &Snapshot::from_fixtures(baseline_permuted),
        );
        prop_assert_eq!(reference, permuted);
    }

    #[test]
    fn prop_first_run_marks_everything_new(current in arb_fixtures()) {
        let current = Snapshot::from_fixtures(current);
        let diff = compute_diff(&current, &Snapshot::new());

        prop_assert!(diff.removed.is_empty());
        prop_assert!(diff.changed.is_empty());
        let scheduled = current.fixtures().filter(|f| !f.is_postponed()).count();
        prop_assert_eq!(diff.new.len(), scheduled);
    }

    #[test]
    fn prop_commit_round_trip_is_clean(current in arb_fixtures()) {
        let current = Snapshot::from_fixtures(current);
        let mut store = InMemoryBaselineStore::new();
        store.commit(&current).unwrap();

        let diff = compute_diff(&current, &store.snapshot().unwrap());
        prop_assert!(diff.new.is_empty());
        prop_assert!(diff.changed.is_empty());
        prop_assert!(diff.removed.is_empty());
        let scheduled = current.fixtures().filter(|f| !f.is_postponed()).count();
        prop_assert_eq!(diff.unchanged, scheduled);
    }
}
