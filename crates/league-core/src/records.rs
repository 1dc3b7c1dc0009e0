//! Flat records handed to the persistence collaborator.
//!
//! Records are keyed by entity number, or by [`FixtureKey`] for match
//! output, and are stored verbatim without being recomputed.

use crate::club::ClubFinances;
use crate::ids::{ClubNumber, LeagueNumber, PlayerNumber};
use crate::skills::Skills;
use crate::world::{Club, DomesticLeague, Player};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Key of one fixture: `(season, league, week, fixture_index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FixtureKey {
    pub season: u32,
    pub league: LeagueNumber,
    pub week: u32,
    pub fixture_index: u32,
}

/// Final score of a fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub key: FixtureKey,
    pub home: ClubNumber,
    pub away: ClubNumber,
    pub home_goals: u32,
    pub away_goals: u32,
}

/// One player's box score for a fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMatchLog {
    pub key: FixtureKey,
    pub club: ClubNumber,
    pub player: PlayerNumber,
    pub starts: u32,
    pub minutes: u32,
    pub goals: u32,
    pub tackles: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubRecord {
    pub club: Club,
    pub finances: ClubFinances,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player: Player,
    #[serde(with = "rust_decimal::serde::str")]
    pub wage: Decimal,
    pub skills: Skills,
}

/// League membership in schedule order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRecord {
    pub league: DomesticLeague,
    pub clubs: Vec<ClubNumber>,
}

/// Destination for computed records.
pub trait RecordSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn put_club(&mut self, record: ClubRecord) -> Result<(), Self::Error>;
    fn put_player(&mut self, record: PlayerRecord) -> Result<(), Self::Error>;
    fn put_league(&mut self, record: LeagueRecord) -> Result<(), Self::Error>;
    fn put_match(&mut self, result: MatchResult) -> Result<(), Self::Error>;
    fn put_player_log(&mut self, log: PlayerMatchLog) -> Result<(), Self::Error>;
}
