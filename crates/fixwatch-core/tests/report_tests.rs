#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{at, carrigaline, fixture, snapshot_of};
use fixwatch_core::report::{build_extracts, build_notification, ExportKind, Priority, SyncStatus};
use fixwatch_core::{compute_diff, FixtureTime, Organization, Schema, Snapshot};

#[test]
fn test_notification_priority_tracks_required_action() {
    let org = Organization::default();
    let baseline = snapshot_of(vec![carrigaline()]);

    let quiet = build_notification(&compute_diff(&baseline, &baseline), &org);
    assert_eq!(quiet.priority, Priority::Low);

    let mut moved = carrigaline();
    moved.time = at("15:00");
    let loud = build_notification(&compute_diff(&snapshot_of(vec![moved]), &baseline), &org);
    assert_eq!(loud.priority, Priority::High);
    assert_eq!(loud.title, "Ballincollig - Fixture Changes");
    assert!(loud.body.starts_with("Ballincollig Fixtures Update\n\nCHANGED (1):"));
    assert!(loud.body.contains("Time: '14:00' -> '15:00'"));
}

#[test]
fn test_first_run_notification_is_initial_sync() {
    let current = snapshot_of(vec![carrigaline()]);
    let n = build_notification(
        &compute_diff(&current, &Snapshot::new()),
        &Organization::default(),
    );
    assert_eq!(n.priority, Priority::High);
    assert_eq!(n.title, "Ballincollig - Initial Fixture Sync");
}

#[test]
fn test_committed_empty_baseline_gets_change_notification() {
    let current = snapshot_of(vec![carrigaline()]);
    let diff = compute_diff(&current, &Snapshot::new()).with_baseline_committed(true);
    let n = build_notification(&diff, &Organization::default());
    assert_eq!(n.priority, Priority::High);
    assert_eq!(n.title, "Ballincollig - Fixture Changes");

    let status = SyncStatus::from_snapshots(&current, &Snapshot::new()).with_baseline_committed(true);
    assert!(status.to_string().contains("New (not yet published): 1"));
}

#[test]
fn test_extracts_carry_current_values_for_changed() {
    let baseline = snapshot_of(vec![carrigaline()]);
    let mut moved = carrigaline();
    moved.venue = "Pitch 2".to_string();
    let diff = compute_diff(&snapshot_of(vec![moved]), &baseline);

    let extracts = build_extracts(&diff, &Schema::default());
    let changed = extracts
        .iter()
        .find(|e| e.kind == ExportKind::Changed)
        .unwrap();
    assert_eq!(changed.rows.len(), 1);
    assert_eq!(changed.rows[0][2], "Pitch 2");
    assert!(extracts
        .iter()
        .filter(|e| e.kind != ExportKind::Changed)
        .all(|e| e.is_empty()));
}

#[test]
fn test_sync_status_counts_keys_only() {
    let douglas = fixture((2025, 10, 19), "Junior A Football", "Douglas", "Junior A FL");
    let mut postponed = fixture((2025, 11, 2), "U14 GAA", "Ovens", "Fe14 Football League");
    postponed.time = FixtureTime::Postponed;

    let baseline = snapshot_of(vec![carrigaline(), douglas]);
    let current = snapshot_of(vec![carrigaline(), postponed]);
    let status = SyncStatus::from_snapshots(&current, &baseline);

    assert_eq!(status.current_len, 2);
    assert_eq!(status.baseline_len, 2);
    assert_eq!(status.new_count, 1);
    assert_eq!(status.removed_count, 1);
    assert!(status.to_string().contains("Removed (need deletion): 1"));
}
