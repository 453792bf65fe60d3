//! Competition classifier.
//!
//! Maps a competition name to a team bucket and an event type through one
//! ordered, data-driven [`RuleTable`]. The table is pure data: swap it per
//! deployment via config, or use [`builtin_rules`] for the tracked club.

pub mod builtin;
pub mod rules;

pub use builtin::{builtin_rules, BUILTIN_RULES_VERSION};
pub use rules::{Classification, Rule, RuleTable};
