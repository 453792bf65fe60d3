use chrono::{NaiveDate, NaiveTime};
use fixwatch_core::{
    EventType, Fixture, FixtureTime, Ground, RawFixtureRecord, Snapshot, TeamBucket,
};

/// Kick-off time from `HH:MM`
#[allow(dead_code)]
pub fn at(text: &str) -> FixtureTime {
    FixtureTime::At(NaiveTime::parse_from_str(text, "%H:%M").unwrap())
}

/// Canonical record with sensible defaults for the fields a test does not care about
#[allow(dead_code)]
pub fn fixture(date: (i32, u32, u32), team: &str, opponent: &str, competition: &str) -> Fixture {
    Fixture {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        time: at("14:00"),
        venue: "Pitch 1".to_string(),
        ground: Ground::Home,
        referee: "J. Smith".to_string(),
        team: TeamBucket::new(team),
        competition: competition.to_string(),
        club: "Ballincollig".to_string(),
        opponent: opponent.to_string(),
        event_type: EventType::League,
    }
}

/// The Junior A Football v Carrigaline fixture used across scenarios
#[allow(dead_code)]
pub fn carrigaline() -> Fixture {
    fixture(
        (2025, 10, 12),
        "Junior A Football",
        "Carrigaline",
        "Junior A FL",
    )
}

/// Raw record as handed over by the extraction step
#[allow(dead_code)]
pub fn raw(date: &str, time: &str, home: &str, away: &str, competition: &str) -> RawFixtureRecord {
    RawFixtureRecord {
        date: date.to_string(),
        time: time.to_string(),
        home: home.to_string(),
        away: away.to_string(),
        venue: "Ballincollig".to_string(),
        referee: String::new(),
        competition: competition.to_string(),
    }
}

#[allow(dead_code)]
pub fn snapshot_of(fixtures: Vec<Fixture>) -> Snapshot {
    Snapshot::from_fixtures(fixtures)
}
