use serde::{Deserialize, Serialize};

/// One fixture exactly as the extraction step captured it
///
/// Nothing here is validated: dates are free text (`12 Oct 2025`), times may
/// be zero sentinels, and either side may or may not be the tracked club.
/// The normalizer decides what survives.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawFixtureRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Time")]
    pub time: String,

    #[serde(rename = "Home")]
    pub home: String,

    #[serde(rename = "Away")]
    pub away: String,

    #[serde(rename = "Venue")]
    pub venue: String,

    #[serde(rename = "Referee", default)]
    pub referee: String,

    #[serde(rename = "Competition")]
    pub competition: String,
}

impl RawFixtureRecord {
    /// Header row of the raw interchange file, in column order
    pub const HEADERS: [&'static str; 7] = [
        "Date",
        "Time",
        "Home",
        "Away",
        "Venue",
        "Referee",
        "Competition",
    ];
}
