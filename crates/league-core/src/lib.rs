#![deny(warnings)]

//! Core domain for the league simulation.
//!
//! Countries, leagues, clubs and players are addressed by dense integer
//! identifiers. Every attribute (coordinates, finances, wages, skills) is
//! derived on demand from the identifier and the validated configuration,
//! so two calls with the same key always agree.

pub mod club;
pub mod config;
pub mod ids;
pub mod names;
pub mod player;
pub mod ranges;
pub mod records;
pub mod skills;
pub mod wages;
pub mod world;

pub use club::ClubFinances;
pub use config::{
    validate_config, AttributeRange, ClubRanges, Formation, LeagueConfig, MatchEngineConfig,
    PlayerRanges, ValidationError,
};
pub use ids::{ClubNumber, CountryIndex, LeagueNumber, PlayerNumber};
pub use names::{club_label, league_label, NameSource, StaticNames};
pub use ranges::{adjust_range, AdjustedRange};
pub use records::{
    ClubRecord, FixtureKey, LeagueRecord, MatchResult, PlayerMatchLog, PlayerRecord, RecordSink,
};
pub use skills::{PositionGroup, Skill, Skills};
pub use wages::{generalized_pentagonal, wage_share, WageCurve};
pub use world::{AddressError, Club, ClubAddress, Country, DomesticLeague, Player, World};
