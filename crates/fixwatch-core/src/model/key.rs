//! Fixture identity.
//!
//! Two records with equal keys are the same fixture across runs, whatever
//! their time, venue, ground or referee say. Those differences are changes,
//! not new identities.

use crate::model::fixture::{Fixture, DATE_FORMAT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity key: (date, team bucket, opponent, competition)
///
/// Field order doubles as sort order, so snapshots iterate chronologically
/// and then by team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FixtureKey {
    pub date: NaiveDate,
    pub team: String,
    pub opponent: String,
    pub competition: String,
}

impl FixtureKey {
    /// Build a key, trimming every text component
    pub fn new(
        date: NaiveDate,
        team: impl AsRef<str>,
        opponent: impl AsRef<str>,
        competition: impl AsRef<str>,
    ) -> Self {
        Self {
            date,
            team: team.as_ref().trim().to_string(),
            opponent: opponent.as_ref().trim().to_string(),
            competition: competition.as_ref().trim().to_string(),
        }
    }

    /// Derive the key of a canonical record
    pub fn of(fixture: &Fixture) -> Self {
        Self::new(
            fixture.date,
            fixture.team.as_str(),
            &fixture.opponent,
            &fixture.competition,
        )
    }
}

impl fmt::Display for FixtureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date.format(DATE_FORMAT),
            self.team,
            self.opponent,
            self.competition
        )
    }
}
