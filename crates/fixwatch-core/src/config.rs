//! Deployment configuration values consumed by the engine.
//!
//! Nothing here is read from disk by this crate; the store crate loads
//! `fixwatch.toml` and hands these values in.

use crate::errors::FixwatchError;
use crate::model::fixture::{Fixture, FixtureTime, TeamBucket, DATE_FORMAT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The club whose fixtures are tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Name as it appears in fixture listings and in the export's club column
    pub club_name: String,
    /// Venue name that counts as the club's own ground
    pub home_ground: String,
}

impl Organization {
    pub fn new(club_name: impl Into<String>, home_ground: impl Into<String>) -> Self {
        Self {
            club_name: club_name.into(),
            home_ground: home_ground.into(),
        }
    }

    /// Reject blank names; an empty club name would match every team.
    pub fn validate(&self) -> Result<(), FixwatchError> {
        if self.club_name.trim().is_empty() {
            return Err(FixwatchError::InvalidOrganization {
                reason: "club_name must not be blank".to_string(),
            });
        }
        if self.home_ground.trim().is_empty() {
            return Err(FixwatchError::InvalidOrganization {
                reason: "home_ground must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Whether a team name refers to the tracked club.
    ///
    /// Case-insensitive; second and third teams (`Ballincollig 2`) still
    /// count as the club.
    pub fn is_club(&self, team: &str) -> bool {
        let team = team.trim().to_lowercase();
        let club = self.club_name.trim().to_lowercase();
        !club.is_empty() && team.contains(&club)
    }

    /// Whether a venue is the club's own ground
    pub fn is_home_ground(&self, venue: &str) -> bool {
        venue.trim().eq_ignore_ascii_case(self.home_ground.trim())
    }
}

impl Default for Organization {
    fn default() -> Self {
        Self::new("Ballincollig", "Ballincollig")
    }
}

/// A field of the canonical record that occupies one export column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Date,
    Time,
    Venue,
    Ground,
    Referee,
    Team,
    Competition,
    Club,
    Opponent,
    EventType,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Date,
        Column::Time,
        Column::Venue,
        Column::Ground,
        Column::Referee,
        Column::Team,
        Column::Competition,
        Column::Club,
        Column::Opponent,
        Column::EventType,
    ];

    /// Header used by the default schema
    pub fn default_header(&self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Time => "Time",
            Column::Venue => "Venue",
            Column::Ground => "Ground",
            Column::Referee => "Referee",
            Column::Team => "Team",
            Column::Competition => "Competition Name",
            Column::Club => "Your Club Name",
            Column::Opponent => "Opponent",
            Column::EventType => "Event Type",
        }
    }

    /// Render this column's cell for a record
    pub fn render(&self, fixture: &Fixture) -> String {
        match self {
            Column::Date => fixture.date_text(),
            Column::Time => fixture.time.to_string(),
            Column::Venue => fixture.venue.clone(),
            Column::Ground => fixture.ground.to_string(),
            Column::Referee => fixture.referee.clone(),
            Column::Team => fixture.team.to_string(),
            Column::Competition => fixture.competition.clone(),
            Column::Club => fixture.club.clone(),
            Column::Opponent => fixture.opponent.clone(),
            Column::EventType => fixture.event_type.to_string(),
        }
    }
}

/// One column of a tabular schema: which field, under which header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub column: Column,
    pub header: String,
}

/// Column names and order of the canonical tabular format
///
/// Shared by the fixture file, the baseline and the three extracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<ColumnSpec>,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            columns: Column::ALL
                .iter()
                .map(|c| ColumnSpec {
                    column: *c,
                    header: c.default_header().to_string(),
                })
                .collect(),
        }
    }
}

impl Schema {
    /// Every field exactly once, headers non-blank and distinct
    pub fn validate(&self) -> Result<(), FixwatchError> {
        let mut seen_columns = BTreeSet::new();
        let mut seen_headers = BTreeSet::new();
        for spec in &self.columns {
            if spec.header.trim().is_empty() {
                return Err(FixwatchError::InvalidSchema {
                    reason: format!("column {:?} has a blank header", spec.column),
                });
            }
            if !seen_columns.insert(spec.column) {
                return Err(FixwatchError::InvalidSchema {
                    reason: format!("column {:?} appears twice", spec.column),
                });
            }
            if !seen_headers.insert(spec.header.trim().to_string()) {
                return Err(FixwatchError::InvalidSchema {
                    reason: format!("header '{}' appears twice", spec.header),
                });
            }
        }
        if let Some(missing) = Column::ALL.iter().find(|c| !seen_columns.contains(*c)) {
            return Err(FixwatchError::InvalidSchema {
                reason: format!("column {:?} is missing", missing),
            });
        }
        Ok(())
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Cells of one record in schema order
    pub fn row(&self, fixture: &Fixture) -> Vec<String> {
        self.columns.iter().map(|c| c.column.render(fixture)).collect()
    }

    /// Rebuild a record from a row whose header order may differ from ours.
    ///
    /// `headers` is the file's own header row; cells are matched by name,
    /// so a file written with a reordered schema still reads back.
    pub fn parse_row<S: AsRef<str>>(
        &self,
        headers: &[S],
        cells: &[S],
    ) -> Result<Fixture, FixwatchError> {
        let cell = |column: Column| -> Result<&str, FixwatchError> {
            let header = self
                .columns
                .iter()
                .find(|spec| spec.column == column)
                .map(|spec| spec.header.trim())
                .unwrap_or_else(|| column.default_header());
            headers
                .iter()
                .position(|h| h.as_ref().trim_matches('\u{feff}').trim() == header)
                .and_then(|idx| cells.get(idx))
                .map(|c| c.as_ref().trim())
                .ok_or_else(|| FixwatchError::MissingColumn {
                    column: header.to_string(),
                })
        };

        let date_text = cell(Column::Date)?;
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
            FixwatchError::InvalidDate {
                value: date_text.to_string(),
            }
        })?;

        Ok(Fixture {
            date,
            time: cell(Column::Time)?.parse::<FixtureTime>()?,
            venue: cell(Column::Venue)?.to_string(),
            ground: cell(Column::Ground)?.parse()?,
            referee: cell(Column::Referee)?.to_string(),
            team: TeamBucket::new(cell(Column::Team)?),
            competition: cell(Column::Competition)?.to_string(),
            club: cell(Column::Club)?.to_string(),
            opponent: cell(Column::Opponent)?.to_string(),
            event_type: cell(Column::EventType)?.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixture::{EventType, Ground};
    use chrono::NaiveTime;

    fn sample() -> Fixture {
        Fixture {
            date: NaiveDate::from_ymd_opt(2025, 10, 12).unwrap(),
            time: FixtureTime::At(NaiveTime::from_hms_opt(14, 0, 0).unwrap()),
            venue: "Pitch 1".to_string(),
            ground: Ground::Home,
            referee: "J. Smith".to_string(),
            team: TeamBucket::new("Junior A Football"),
            competition: "Junior A FL".to_string(),
            club: "Ballincollig".to_string(),
            opponent: "Carrigaline".to_string(),
            event_type: EventType::League,
        }
    }

    #[test]
    fn test_default_schema_is_valid_and_ordered() {
        let schema = Schema::default();
        schema.validate().unwrap();
        assert_eq!(
            schema.headers(),
            vec![
                "Date",
                "Time",
                "Venue",
                "Ground",
                "Referee",
                "Team",
                "Competition Name",
                "Your Club Name",
                "Opponent",
                "Event Type"
            ]
        );
    }

    #[test]
    fn test_schema_rejects_duplicate_and_missing_columns() {
        let mut schema = Schema::default();
        schema.columns[1].column = Column::Date;
        assert!(schema.validate().is_err());

        let mut schema = Schema::default();
        schema.columns.pop();
        assert!(matches!(
            schema.validate(),
            Err(FixwatchError::InvalidSchema { .. })
        ));
    }

    #[test]
    fn test_row_parses_back_by_header_name() {
        let schema = Schema::default();
        let fixture = sample();
        let mut headers: Vec<String> = schema.headers().iter().map(|s| s.to_string()).collect();
        let mut cells = schema.row(&fixture);
        headers.swap(0, 9);
        cells.swap(0, 9);
        assert_eq!(schema.parse_row(&headers, &cells).unwrap(), fixture);
    }

    #[test]
    fn test_parse_row_reports_missing_column() {
        let schema = Schema::default();
        let headers = vec!["Date".to_string()];
        let cells = vec!["12/10/2025".to_string()];
        assert_eq!(
            schema.parse_row(&headers, &cells),
            Err(FixwatchError::MissingColumn {
                column: "Time".to_string()
            })
        );
    }

    #[test]
    fn test_organization_matching_is_case_insensitive() {
        let org = Organization::default();
        assert!(org.is_club("BALLINCOLLIG"));
        assert!(org.is_club("Ballincollig 2"));
        assert!(!org.is_club("Carrigaline"));
        assert!(org.is_home_ground(" ballincollig "));
        assert!(!org.is_home_ground("Pitch 1"));
    }

    #[test]
    fn test_organization_rejects_blank_club() {
        let org = Organization::new("  ", "Ground");
        assert!(org.validate().is_err());
    }
}
