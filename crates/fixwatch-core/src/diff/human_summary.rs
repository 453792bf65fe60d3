//! Plain-text summary of a fixture diff.

use crate::diff::model::FixtureDiff;
use crate::model::Fixture;

/// Fixtures listed per category before truncation
pub const SUMMARY_LIMIT: usize = 5;

/// Text used when the diff needs no action
pub const NOTHING_TO_PUBLISH: &str = "No changes to publish";

/// Render the summary handed to the notifier.
///
/// One block per non-empty category (`NEW`, `CHANGED`, `POSTPONED`,
/// `REMOVED`), each listing at most [`SUMMARY_LIMIT`] fixtures followed by
/// `...and N more`. Changed fixtures also list their field changes.
pub fn render_human_summary(diff: &FixtureDiff) -> String {
    if diff.is_empty() {
        return NOTHING_TO_PUBLISH.to_string();
    }

    let mut lines: Vec<String> = Vec::new();

    push_category(&mut lines, "NEW", &diff.new);

    if !diff.changed.is_empty() {
        lines.push(format!("CHANGED ({}):", diff.changed.len()));
        for changed in diff.changed.iter().take(SUMMARY_LIMIT) {
            lines.push(format!("  {}", changed.current.label()));
            for change in &changed.changes {
                lines.push(format!("    {}", change));
            }
        }
        push_overflow(&mut lines, diff.changed.len());
    }

    push_category(&mut lines, "POSTPONED", &diff.postponed);
    push_category(&mut lines, "REMOVED", &diff.removed);

    lines.join("\n")
}

fn push_category(lines: &mut Vec<String>, title: &str, fixtures: &[Fixture]) {
    if fixtures.is_empty() {
        return;
    }
    lines.push(format!("{} ({}):", title, fixtures.len()));
    for fixture in fixtures.iter().take(SUMMARY_LIMIT) {
        lines.push(format!("  {}", fixture.label()));
    }
    push_overflow(lines, fixtures.len());
}

fn push_overflow(lines: &mut Vec<String>, total: usize) {
    if total > SUMMARY_LIMIT {
        lines.push(format!("  ...and {} more", total - SUMMARY_LIMIT));
    }
}
