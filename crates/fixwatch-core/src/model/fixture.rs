use crate::errors::FixwatchError;
use crate::model::key::FixtureKey;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical date rendering (`12/10/2025`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Symbolic time (and event type) of a postponed or cancelled fixture
pub const POSTPONED: &str = "Postponed";

/// Referee placeholder when none has been appointed yet
pub const PENDING_REFEREE: &str = "TBC (Pending)";

/// Sentinel for unresolvable team buckets and opponents
pub const UNKNOWN: &str = "Unknown";

/// Kick-off time of a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FixtureTime {
    /// Scheduled kick-off, rendered `HH:MM`
    At(NaiveTime),
    /// Called off; no kick-off time
    Postponed,
}

impl FixtureTime {
    pub fn is_postponed(&self) -> bool {
        matches!(self, FixtureTime::Postponed)
    }

    /// Parse a clock time written as `H:MM` or `HH:MM`.
    ///
    /// The zero sentinels are *not* special here: `00:00` is midnight. Only
    /// the normalizer treats them as a postponement marker.
    pub fn parse_clock(text: &str) -> Result<NaiveTime, FixwatchError> {
        let invalid = || FixwatchError::InvalidTime {
            value: text.to_string(),
        };
        let (hours, minutes) = text.trim().split_once(':').ok_or_else(invalid)?;

        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !digits(hours) || hours.len() > 2 || !digits(minutes) || minutes.len() != 2 {
            return Err(invalid());
        }

        let h: u32 = hours.parse().map_err(|_| invalid())?;
        let m: u32 = minutes.parse().map_err(|_| invalid())?;
        NaiveTime::from_hms_opt(h, m, 0).ok_or_else(invalid)
    }
}

impl fmt::Display for FixtureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureTime::At(t) => write!(f, "{:02}:{:02}", t.hour(), t.minute()),
            FixtureTime::Postponed => f.write_str(POSTPONED),
        }
    }
}

impl FromStr for FixtureTime {
    type Err = FixwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(POSTPONED) {
            return Ok(FixtureTime::Postponed);
        }
        FixtureTime::parse_clock(s).map(FixtureTime::At)
    }
}

impl From<FixtureTime> for String {
    fn from(time: FixtureTime) -> Self {
        time.to_string()
    }
}

impl TryFrom<String> for FixtureTime {
    type Error = FixwatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where the fixture is played relative to the tracked club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ground {
    Home,
    Away,
    Neutral,
}

impl Ground {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ground::Home => "Home",
            Ground::Away => "Away",
            Ground::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Ground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ground {
    type Err = FixwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Ground::Home),
            "away" => Ok(Ground::Away),
            "neutral" => Ok(Ground::Neutral),
            _ => Err(FixwatchError::InvalidGround {
                value: s.to_string(),
            }),
        }
    }
}

/// Competition tier of a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    League,
    Cup,
    Championship,
    Other,
    /// Forced by the normalizer for zero-sentinel kick-off times
    Postponed,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::League => "League",
            EventType::Cup => "Cup",
            EventType::Championship => "Championship",
            EventType::Other => "Other",
            EventType::Postponed => POSTPONED,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = FixwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "league" => Ok(EventType::League),
            "cup" => Ok(EventType::Cup),
            "championship" => Ok(EventType::Championship),
            "other" => Ok(EventType::Other),
            "postponed" => Ok(EventType::Postponed),
            _ => Err(FixwatchError::InvalidEventType {
                value: s.to_string(),
            }),
        }
    }
}

/// Squad a fixture belongs to (`Junior A Football`, `U14 GAA`, ...)
///
/// Bucket names are organization configuration, so this is an open string
/// rather than a closed enum. [`TeamBucket::unknown`] is the no-match value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamBucket(String);

impl TeamBucket {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamBucket {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Canonical fixture record
///
/// Produced by the normalizer from a raw record, or read back from a
/// canonical export/baseline file. Owned by the snapshot that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub date: NaiveDate,
    pub time: FixtureTime,
    pub venue: String,
    pub ground: Ground,
    /// Appointed referee, or [`PENDING_REFEREE`]
    pub referee: String,
    pub team: TeamBucket,
    pub competition: String,
    /// The tracked organization's name as exported
    pub club: String,
    pub opponent: String,
    pub event_type: EventType,
}

impl Fixture {
    /// Identity key of this record
    pub fn key(&self) -> FixtureKey {
        FixtureKey::of(self)
    }

    pub fn is_postponed(&self) -> bool {
        self.time.is_postponed()
    }

    /// `DD/MM/YYYY`
    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// One-line description used in reports: `12/10/2025 Junior A Football vs Carrigaline`
    pub fn label(&self) -> String {
        format!("{} {} vs {}", self.date_text(), self.team, self.opponent)
    }
}
