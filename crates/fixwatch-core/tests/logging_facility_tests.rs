#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{carrigaline, raw, snapshot_of};
use fixwatch_core::errors::FixwatchError;
use fixwatch_core::logging_facility::test_capture::init_test_capture;
use fixwatch_core::{compute_diff, log_op_end, log_op_error, log_op_start};
use fixwatch_core::{Normalizer, Organization, RuleTable, Snapshot};
use fixwatch_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.events_for_op(op_name);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = FixwatchError::InvalidDate {
        value: "32 Foo 2025".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_INVALID_DATE"));
}

#[test]
fn test_compute_diff_logs_start_and_end_with_counts() {
    let capture = init_test_capture();

    let current = snapshot_of(vec![carrigaline()]);
    let _ = compute_diff(&current, &Snapshot::new());

    capture.assert_event_exists("compute_diff", EVENT_START);
    capture.assert_event_exists("compute_diff", EVENT_END);
    let with_counts = capture.count_events(|e| {
        e.op.as_deref() == Some("compute_diff")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field("new").is_some()
            && e.field("removed").is_some()
    });
    assert!(with_counts >= 1);
}

#[test]
fn test_skipped_record_is_logged_as_warning() {
    let capture = init_test_capture();
    let org = Organization::default();
    let rules = RuleTable::builtin().unwrap();

    let records = vec![raw(
        "not a date",
        "14:00",
        "Ballincollig",
        "Carrigaline",
        "Junior A FL",
    )];
    let batch = Normalizer::new(&org, &rules).normalize_batch(&records);
    assert!(batch.fixtures.is_empty());

    let warnings = capture.count_events(|e| {
        e.level == tracing::Level::WARN && e.op.as_deref() == Some("normalize_batch")
    });
    assert!(warnings >= 1);
}
