//! Raw record → canonical record.
//!
//! Normalization is fail-soft at batch level: a record whose date or time
//! cannot be read is skipped with a warning and the rest of the batch
//! carries on.

use crate::classify::RuleTable;
use crate::config::Organization;
use crate::errors::FixwatchError;
use crate::model::fixture::{
    EventType, Fixture, FixtureTime, Ground, PENDING_REFEREE, POSTPONED, UNKNOWN,
};
use crate::model::raw::RawFixtureRecord;
use crate::{log_op_end, log_op_start};
use chrono::NaiveDate;
use std::time::Instant;

/// Day-month-year forms accepted from fixture listings
const RAW_DATE_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y"];

/// Kick-off values meaning "called off"
const ZERO_TIME_SENTINELS: &[&str] = &["00:00", "0:00"];

/// A record the normalizer dropped, with the reason
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeWarning {
    /// Position of the record in the input batch
    pub index: usize,
    pub reason: FixwatchError,
}

/// Outcome of normalizing a batch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedBatch {
    pub fixtures: Vec<Fixture>,
    pub warnings: Vec<NormalizeWarning>,
}

/// Which side of a fixture the tracked club plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Home,
    Away,
    Neither,
}

/// Turns raw records into canonical ones for one organization
pub struct Normalizer<'a> {
    organization: &'a Organization,
    rules: &'a RuleTable,
}

impl<'a> Normalizer<'a> {
    pub fn new(organization: &'a Organization, rules: &'a RuleTable) -> Self {
        Self {
            organization,
            rules,
        }
    }

    /// Normalize one record.
    ///
    /// # Errors
    ///
    /// - `InvalidDate` when the date is not a day-month-year text
    /// - `InvalidTime` when the time is neither a zero sentinel nor a clock time
    pub fn normalize(&self, raw: &RawFixtureRecord) -> Result<Fixture, FixwatchError> {
        let date = parse_raw_date(&raw.date)?;
        let time = parse_raw_time(&raw.time)?;

        let side = self.side_of_club(raw);
        let opponent = match side {
            Side::Home => raw.away.trim().to_string(),
            Side::Away => raw.home.trim().to_string(),
            Side::Neither => UNKNOWN.to_string(),
        };
        let ground = match side {
            Side::Home if self.organization.is_home_ground(&raw.venue) => Ground::Home,
            Side::Away => Ground::Away,
            _ => Ground::Neutral,
        };

        let competition = collapse_whitespace(&raw.competition);
        let classification = self.rules.classify(&competition);
        let event_type = if time.is_postponed() {
            EventType::Postponed
        } else {
            classification.event_type
        };

        let referee = raw.referee.trim();
        let referee = if referee.is_empty() {
            PENDING_REFEREE.to_string()
        } else {
            referee.to_string()
        };

        Ok(Fixture {
            date,
            time,
            venue: raw.venue.trim().to_string(),
            ground,
            referee,
            team: classification.team,
            competition,
            club: self.organization.club_name.trim().to_string(),
            opponent,
            event_type,
        })
    }

    /// Normalize a whole batch, skipping (and reporting) unreadable records
    pub fn normalize_batch(&self, raws: &[RawFixtureRecord]) -> NormalizedBatch {
        let start = Instant::now();
        log_op_start!("normalize_batch", records = raws.len());

        let mut batch = NormalizedBatch::default();
        for (index, raw) in raws.iter().enumerate() {
            match self.normalize(raw) {
                Ok(fixture) => batch.fixtures.push(fixture),
                Err(reason) => {
                    tracing::warn!(
                        component = module_path!(),
                        op = "normalize_batch",
                        record_index = index,
                        reason = %reason,
                        "skipping unreadable fixture record"
                    );
                    batch.warnings.push(NormalizeWarning { index, reason });
                }
            }
        }

        log_op_end!(
            "normalize_batch",
            duration_ms = start.elapsed().as_millis() as u64,
            normalized = batch.fixtures.len(),
            skipped = batch.warnings.len()
        );
        batch
    }

    fn side_of_club(&self, raw: &RawFixtureRecord) -> Side {
        if self.organization.is_club(&raw.home) {
            Side::Home
        } else if self.organization.is_club(&raw.away) {
            Side::Away
        } else {
            Side::Neither
        }
    }
}

/// Parse `12 Oct 2025` / `12 October 2025`
pub fn parse_raw_date(text: &str) -> Result<NaiveDate, FixwatchError> {
    let cleaned = collapse_whitespace(text);
    RAW_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .ok_or_else(|| FixwatchError::InvalidDate {
            value: text.to_string(),
        })
}

/// Zero sentinels and the `Postponed` marker become `Postponed`; anything
/// else must be a clock time
pub fn parse_raw_time(text: &str) -> Result<FixtureTime, FixwatchError> {
    let trimmed = text.trim();
    if ZERO_TIME_SENTINELS.contains(&trimmed) || trimmed.eq_ignore_ascii_case(POSTPONED) {
        return Ok(FixtureTime::Postponed);
    }
    FixtureTime::parse_clock(trimmed).map(FixtureTime::At)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::builtin_rules;

    fn raw(home: &str, away: &str, venue: &str) -> RawFixtureRecord {
        RawFixtureRecord {
            date: "12 Oct 2025".to_string(),
            time: "14:00".to_string(),
            home: home.to_string(),
            away: away.to_string(),
            venue: venue.to_string(),
            referee: "J. Smith".to_string(),
            competition: "Junior A FL".to_string(),
        }
    }

    fn normalize(record: &RawFixtureRecord) -> Result<Fixture, FixwatchError> {
        let org = Organization::default();
        let rules = builtin_rules().unwrap();
        Normalizer::new(&org, &rules).normalize(record)
    }

    #[test]
    fn test_home_fixture_at_home_ground() {
        let f = normalize(&raw("Ballincollig", "Carrigaline", "Ballincollig")).unwrap();
        assert_eq!(f.ground, Ground::Home);
        assert_eq!(f.opponent, "Carrigaline");
        assert_eq!(f.date_text(), "12/10/2025");
        assert_eq!(f.team.as_str(), "Junior A Football");
        assert_eq!(f.event_type, EventType::League);
        assert_eq!(f.club, "Ballincollig");
    }

    #[test]
    fn test_home_fixture_elsewhere_is_neutral() {
        let f = normalize(&raw("Ballincollig", "Carrigaline", "Pitch 1")).unwrap();
        assert_eq!(f.ground, Ground::Neutral);
        assert_eq!(f.opponent, "Carrigaline");
    }

    #[test]
    fn test_away_fixture() {
        let f = normalize(&raw("Carrigaline", "Ballincollig", "Carrigaline")).unwrap();
        assert_eq!(f.ground, Ground::Away);
        assert_eq!(f.opponent, "Carrigaline");
    }

    #[test]
    fn test_club_on_neither_side_is_kept_with_unknown_opponent() {
        let f = normalize(&raw("Ovens", "Carrigaline", "Ovens")).unwrap();
        assert_eq!(f.opponent, "Unknown");
        assert_eq!(f.ground, Ground::Neutral);
    }

    #[test]
    fn test_zero_time_forces_postponed() {
        for sentinel in ["00:00", "0:00"] {
            let mut r = raw("Ballincollig", "Carrigaline", "Ballincollig");
            r.time = sentinel.to_string();
            r.competition = "Junior A Football Championship".to_string();
            let f = normalize(&r).unwrap();
            assert_eq!(f.time, FixtureTime::Postponed);
            assert_eq!(f.event_type, EventType::Postponed);
        }
    }

    #[test]
    fn test_postponed_marker_in_listing_is_kept() {
        let mut r = raw("Ballincollig", "Carrigaline", "Ballincollig");
        r.time = " postponed ".to_string();
        let f = normalize(&r).unwrap();
        assert_eq!(f.time, FixtureTime::Postponed);
        assert_eq!(f.event_type, EventType::Postponed);
    }

    #[test]
    fn test_short_time_is_padded() {
        let mut r = raw("Ballincollig", "Carrigaline", "Ballincollig");
        r.time = "9:30".to_string();
        assert_eq!(normalize(&r).unwrap().time.to_string(), "09:30");
    }

    #[test]
    fn test_blank_referee_defaults_to_pending() {
        let mut r = raw("Ballincollig", "Carrigaline", "Ballincollig");
        r.referee = "   ".to_string();
        assert_eq!(normalize(&r).unwrap().referee, "TBC (Pending)");
    }

    #[test]
    fn test_full_month_name_accepted() {
        let mut r = raw("Ballincollig", "Carrigaline", "Ballincollig");
        r.date = " 3  March 2026 ".to_string();
        assert_eq!(normalize(&r).unwrap().date_text(), "03/03/2026");
    }

    #[test]
    fn test_unparseable_values_are_errors() {
        let mut r = raw("Ballincollig", "Carrigaline", "Ballincollig");
        r.date = "2025-10-12".to_string();
        assert!(matches!(normalize(&r), Err(FixwatchError::InvalidDate { .. })));

        let mut r = raw("Ballincollig", "Carrigaline", "Ballincollig");
        r.time = "TBC".to_string();
        assert!(matches!(normalize(&r), Err(FixwatchError::InvalidTime { .. })));
    }

    #[test]
    fn test_batch_skips_bad_records_and_continues() {
        let org = Organization::default();
        let rules = builtin_rules().unwrap();
        let mut bad = raw("Ballincollig", "Carrigaline", "Ballincollig");
        bad.date = "someday".to_string();
        let records = vec![
            raw("Ballincollig", "Carrigaline", "Ballincollig"),
            bad,
            raw("Ovens", "Ballincollig", "Ovens"),
        ];

        let batch = Normalizer::new(&org, &rules).normalize_batch(&records);
        assert_eq!(batch.fixtures.len(), 2);
        assert_eq!(batch.warnings.len(), 1);
        assert_eq!(batch.warnings[0].index, 1);
    }
}
