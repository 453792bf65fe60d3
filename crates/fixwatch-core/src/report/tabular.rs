use crate::config::Schema;
use crate::diff::FixtureDiff;
use crate::model::Fixture;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extract a set of rows belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportKind {
    /// Bulk import
    New,
    /// Manual edit; rows carry the current values
    Changed,
    /// Manual deletion; rows carry the baseline values
    Removed,
}

impl ExportKind {
    pub const ALL: [ExportKind; 3] = [ExportKind::New, ExportKind::Changed, ExportKind::Removed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::New => "new",
            ExportKind::Changed => "changed",
            ExportKind::Removed => "removed",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header plus rows of one extract, in schema column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extract {
    pub kind: ExportKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Extract {
    /// An empty extract is not written, and a stale file of its kind is removed
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Build the New, Changed and Removed extracts, in that order.
///
/// Postponed fixtures appear in none of them; they are reported in the
/// summary for manual deletion.
pub fn build_extracts(diff: &FixtureDiff, schema: &Schema) -> Vec<Extract> {
    let headers: Vec<String> = schema.headers().iter().map(|h| h.to_string()).collect();
    let rows = |fixtures: Vec<&Fixture>| -> Vec<Vec<String>> {
        fixtures.into_iter().map(|f| schema.row(f)).collect()
    };

    ExportKind::ALL
        .iter()
        .map(|kind| {
            let fixtures: Vec<&Fixture> = match kind {
                ExportKind::New => diff.new.iter().collect(),
                ExportKind::Changed => diff.changed.iter().map(|c| &c.current).collect(),
                ExportKind::Removed => diff.removed.iter().collect(),
            };
            Extract {
                kind: *kind,
                headers: headers.clone(),
                rows: rows(fixtures),
            }
        })
        .collect()
}
