//! Built-in rule table for the default organization.
//!
//! Order is precedence: age-grade codes, then generic grade markers, then
//! grade-bearing competition names whose football/hurling split is decided
//! by a code group, then the competition-tier keywords that only set the
//! event type.

use crate::classify::rules::{Rule, RuleTable};
use crate::errors::FixwatchError;
use crate::model::fixture::EventType;

pub const BUILTIN_RULES_VERSION: u32 = 1;

const HURLING: &[&str] = &["hurling", " hl"];
const FOOTBALL: &[&str] = &["football", " fl"];

fn team(groups: &[&[&str]], name: &str) -> Rule {
    Rule::new(groups, Some(name), None)
}

fn tier(groups: &[&[&str]], event_type: EventType) -> Rule {
    Rule::new(groups, None, Some(event_type))
}

/// The club's canonical rule table
pub fn builtin_rules() -> Result<RuleTable, FixwatchError> {
    let rules = vec![
        // Age grades. Fe12..Fe16 field one squad per grade across both codes.
        team(&[&["fe12"]], "U12 GAA"),
        team(&[&["fe13"]], "U13 GAA"),
        team(&[&["fe14"]], "U14 GAA"),
        team(&[&["fe15"]], "U15 GAA"),
        team(&[&["fe16"]], "U16 GAA"),
        team(&[&["fe18"], HURLING], "Minor Hurling GAA"),
        team(&[&["fe18"]], "Minor Football GAA"),
        team(&[&["u21", "u-21"], &[" b "], HURLING], "GAA U21 \"B\" Hurling"),
        team(&[&["u21", "u-21"], &[" b "]], "GAA U21 \"B\" Football"),
        team(&[&["u21", "u-21"], HURLING], "GAA U21 \"A\" Hurling"),
        team(&[&["u21", "u-21"]], "GAA U21 \"A\" Football"),
        // Generic grade markers
        team(&[&["minor"], HURLING], "Minor Hurling GAA"),
        team(&[&["minor"]], "Minor Football GAA"),
        // County senior leagues and championships
        team(&[&["mccarthy"]], "Senior Football"),
        team(&[&["red fm"]], "Premier Inter Hurling"),
        team(&[&["psfc"]], "Senior Football"),
        team(&[&["premier senior"], FOOTBALL], "Senior Football"),
        team(&[&["pihc", "premier ihc"]], "Premier Inter Hurling"),
        team(&[&["premier intermediate"], HURLING], "Premier Inter Hurling"),
        // Divisional junior leagues
        team(&[&["aos security", "aos "], &["div 4", "div 5"], HURLING], "Junior B Hurling"),
        team(&[&["aos security", "aos "], &["div 4", "div 5"]], "Junior B Football"),
        team(&[&["aos security", "aos "], &["div 3"], HURLING], "Junior B Hurling"),
        team(&[&["aos security", "aos "], &["div 3"]], "Junior A Football"),
        team(&[&["aos security", "aos "], HURLING], "Junior A Hurling"),
        team(&[&["aos security", "aos "]], "Junior A Football"),
        team(&[&["cumnor"]], "Junior A Hurling"),
        team(&[&["eph "], &["division 2", "division 3"]], "Junior B Football"),
        team(&[&["eph "]], "Junior A Football"),
        team(&[&["erneside"]], "Junior B Hurling"),
        // Remaining junior competitions
        team(&[&["junior b"], HURLING], "Junior B Hurling"),
        team(&[&["junior b"]], "Junior B Football"),
        team(&[&["junior"], HURLING], "Junior A Hurling"),
        team(&[&["junior"]], "Junior A Football"),
        // Competition tiers
        tier(&[&["championship", "final"]], EventType::Championship),
        tier(&[&["cup", "shield", "trophy"]], EventType::Cup),
        tier(&[&["league", "division", " fl", " hl", "div "]], EventType::League),
    ];
    RuleTable::new(BUILTIN_RULES_VERSION, rules)
}

impl RuleTable {
    /// Shorthand for [`builtin_rules`]
    pub fn builtin() -> Result<Self, FixwatchError> {
        builtin_rules()
    }
}
