//! Notification message built from a diff. Delivery is external.

use crate::config::Organization;
use crate::diff::{render_human_summary, FixtureDiff};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Something needs publishing
    High,
    /// Routine "monitor ran" message
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub priority: Priority,
    pub body: String,
}

/// Build the message for one run.
///
/// Priority is `Low` exactly when the diff requires no action.
pub fn build_notification(diff: &FixtureDiff, organization: &Organization) -> Notification {
    let club = organization.club_name.trim();

    if !diff.requires_action() {
        return Notification {
            title: format!("{} - All Clear", club),
            priority: Priority::Low,
            body: format!(
                "No fixture changes detected.\n{} fixtures monitored.",
                diff.current_len
            ),
        };
    }

    let title = if diff.is_first_run() {
        format!("{} - Initial Fixture Sync", club)
    } else {
        format!("{} - Fixture Changes", club)
    };
    Notification {
        title,
        priority: Priority::High,
        body: format!(
            "{} Fixtures Update\n\n{}",
            club,
            render_human_summary(diff)
        ),
    }
}
