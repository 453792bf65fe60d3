pub mod fixture;
pub mod key;
pub mod raw;

pub use fixture::{EventType, Fixture, FixtureTime, Ground, TeamBucket};
pub use key::FixtureKey;
pub use raw::RawFixtureRecord;
