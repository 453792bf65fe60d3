//! Ordered substring rule table.
//!
//! A single list drives both derivations. The team bucket comes from the
//! first matching rule that names a team; the event type from the first
//! matching rule that names an event type. Tier rules (championship, cup,
//! league keywords) sit at the end of the list and carry only an event type.

use crate::errors::FixwatchError;
use crate::model::fixture::{EventType, TeamBucket};
use serde::{Deserialize, Serialize};

/// Result of classifying a competition name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub team: TeamBucket,
    pub event_type: EventType,
}

/// One classification rule
///
/// `groups` is a conjunction of disjunctions: the rule matches when every
/// group has at least one needle contained in the lower-cased competition
/// name. Needles are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub groups: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamBucket>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
}

impl Rule {
    pub fn new(groups: &[&[&str]], team: Option<&str>, event_type: Option<EventType>) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|g| g.iter().map(|n| n.to_lowercase()).collect())
                .collect(),
            team: team.map(TeamBucket::new),
            event_type,
        }
    }

    /// `haystack` must already be lower-cased.
    fn matches(&self, haystack: &str) -> bool {
        self.groups
            .iter()
            .all(|group| group.iter().any(|needle| haystack.contains(needle.as_str())))
    }

    fn validate(&self, index: usize) -> Result<(), FixwatchError> {
        let invalid = |reason: &str| FixwatchError::InvalidRule {
            index,
            reason: reason.to_string(),
        };
        if self.groups.is_empty() {
            return Err(invalid("rule has no needle groups"));
        }
        if self.groups.iter().any(|g| g.is_empty()) {
            return Err(invalid("needle group is empty"));
        }
        if self.groups.iter().flatten().any(|n| n.is_empty()) {
            return Err(invalid("needle is empty"));
        }
        if self.team.is_none() && self.event_type.is_none() {
            return Err(invalid("rule names neither a team nor an event type"));
        }
        if self.team.as_ref().is_some_and(|t| t.as_str().trim().is_empty()) {
            return Err(invalid("team name is blank"));
        }
        if self.event_type == Some(EventType::Postponed) {
            return Err(invalid("postponement is decided from the kick-off time, not the competition"));
        }
        Ok(())
    }
}

/// On-disk shape of a rule table, before validation
#[derive(Debug, Clone, Deserialize)]
struct RuleTableSpec {
    version: u32,
    rules: Vec<Rule>,
}

/// Versioned, validated, ordered rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleTableSpec")]
pub struct RuleTable {
    version: u32,
    rules: Vec<Rule>,
}

impl TryFrom<RuleTableSpec> for RuleTable {
    type Error = FixwatchError;

    fn try_from(spec: RuleTableSpec) -> Result<Self, Self::Error> {
        RuleTable::new(spec.version, spec.rules)
    }
}

impl RuleTable {
    /// Validate and build a table. Needles are lower-cased here so that
    /// hand-written TOML may use any case.
    pub fn new(version: u32, rules: Vec<Rule>) -> Result<Self, FixwatchError> {
        let rules: Vec<Rule> = rules
            .into_iter()
            .map(|mut rule| {
                for needle in rule.groups.iter_mut().flatten() {
                    *needle = needle.to_lowercase();
                }
                rule
            })
            .collect();
        for (index, rule) in rules.iter().enumerate() {
            rule.validate(index)?;
        }
        Ok(Self { version, rules })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify a competition name. Never fails: no match yields
    /// (`Unknown`, `Other`).
    pub fn classify(&self, competition: &str) -> Classification {
        let haystack = competition.to_lowercase();
        let mut team = None;
        let mut event_type = None;

        for rule in self.rules.iter().filter(|r| r.matches(&haystack)) {
            if team.is_none() {
                team = rule.team.clone();
            }
            if event_type.is_none() {
                event_type = rule.event_type;
            }
            if team.is_some() && event_type.is_some() {
                break;
            }
        }

        Classification {
            team: team.unwrap_or_else(TeamBucket::unknown),
            event_type: event_type.unwrap_or(EventType::Other),
        }
    }

    pub fn team_for(&self, competition: &str) -> TeamBucket {
        self.classify(competition).team
    }

    pub fn event_type_for(&self, competition: &str) -> EventType {
        self.classify(competition).event_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::new(
            7,
            vec![
                Rule::new(&[&["fe14"]], Some("U14 GAA"), None),
                Rule::new(&[&["minor"], &["hurling", " hl"]], Some("Minor Hurling"), None),
                Rule::new(&[&["minor"]], Some("Minor Football"), None),
                Rule::new(&[&["final"]], Some("Finals Squad"), Some(EventType::Championship)),
                Rule::new(&[&["cup"]], None, Some(EventType::Cup)),
                Rule::new(&[&["league"]], None, Some(EventType::League)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_first_match_wins_for_team() {
        let t = table();
        assert_eq!(t.team_for("Minor Hurling League").as_str(), "Minor Hurling");
        assert_eq!(t.team_for("Minor Football League").as_str(), "Minor Football");
    }

    #[test]
    fn test_event_type_skips_team_only_rules() {
        let t = table();
        let c = t.classify("FE14 Cup");
        assert_eq!(c.team.as_str(), "U14 GAA");
        assert_eq!(c.event_type, EventType::Cup);
    }

    #[test]
    fn test_rule_with_both_outcomes_feeds_both() {
        let c = table().classify("County Final");
        assert_eq!(c.team.as_str(), "Finals Squad");
        assert_eq!(c.event_type, EventType::Championship);
    }

    #[test]
    fn test_no_match_yields_sentinels() {
        let c = table().classify("Challenge Match");
        assert!(c.team.is_unknown());
        assert_eq!(c.event_type, EventType::Other);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let t = RuleTable::new(1, vec![Rule::new(&[&["FE14"]], Some("U14 GAA"), None)]).unwrap();
        assert_eq!(t.team_for("fe14 league").as_str(), "U14 GAA");
    }

    #[test]
    fn test_validation_rejects_malformed_rules() {
        let empty_group = Rule {
            groups: vec![vec![]],
            team: Some(TeamBucket::new("X")),
            event_type: None,
        };
        assert!(matches!(
            RuleTable::new(1, vec![empty_group]),
            Err(FixwatchError::InvalidRule { index: 0, .. })
        ));

        let no_outcome = Rule::new(&[&["x"]], None, None);
        let ok = Rule::new(&[&["y"]], Some("Y"), None);
        assert!(matches!(
            RuleTable::new(1, vec![ok, no_outcome]),
            Err(FixwatchError::InvalidRule { index: 1, .. })
        ));

        let empty_needle = Rule::new(&[&[""]], Some("Z"), None);
        assert!(RuleTable::new(1, vec![empty_needle]).is_err());

        let postponed = Rule::new(&[&["x"]], None, Some(EventType::Postponed));
        assert!(RuleTable::new(1, vec![postponed]).is_err());
    }

    #[test]
    fn test_table_keeps_version() {
        assert_eq!(table().version(), 7);
        assert_eq!(table().rules().len(), 6);
    }
}
