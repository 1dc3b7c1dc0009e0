#![deny(warnings)]

//! Match outcome simulation.
//!
//! Two match-day squads become a scoreline drawn from a copula-joined pair
//! of Weibull goal distributions, then each side's goals are spread over
//! its players. The random source is passed in, so a seeded generator
//! reproduces a match exactly.

pub mod attribution;
pub mod scoreline;
pub mod strength;

pub use attribution::{attribute_goals, BoxScore};
pub use scoreline::{
    frank_copula, goal_margins, sample_scoreline, scoring_intensities, weibull_cdf, ScoreTable,
    Scoreline,
};
pub use strength::{team_strength, Strength};

use league_core::{ClubNumber, MatchEngineConfig, PlayerNumber, PositionGroup, Skills};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Errors raised by the match engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// A squad needs at least one player.
    #[error("{0} fielded an empty squad")]
    EmptySquad(ClubNumber),
    /// Starter count must be within `1..=squad size`.
    #[error("{club} names {starters} starters from a squad of {size}")]
    StarterCount {
        club: ClubNumber,
        starters: usize,
        size: usize,
    },
    /// Exactly one goalkeeper must start.
    #[error("{club} starts {count} goalkeepers")]
    GoalkeeperCount { club: ClubNumber, count: usize },
    /// Defense strength needs outfield defenders.
    #[error("{0} starts no defenders")]
    NoDefenders(ClubNumber),
    /// Attack strength needs at least one outfield starter.
    #[error("{0} starts no outfield players")]
    NoOutfieldStarters(ClubNumber),
    /// The scoreline table had no weight; the table builder is broken.
    #[error("scoreline probability table is empty")]
    EmptyProbabilityTable,
}

/// A player available on match day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadMember {
    pub player: PlayerNumber,
    pub group: PositionGroup,
    pub skills: Skills,
}

/// Ordered match-day squad: the first `starters` members start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSquad {
    club: ClubNumber,
    members: Vec<SquadMember>,
    starters: usize,
}

impl MatchSquad {
    pub fn new(
        club: ClubNumber,
        members: Vec<SquadMember>,
        starters: usize,
    ) -> Result<Self, MatchError> {
        if members.is_empty() {
            return Err(MatchError::EmptySquad(club));
        }
        if starters == 0 || starters > members.len() {
            return Err(MatchError::StarterCount {
                club,
                starters,
                size: members.len(),
            });
        }
        Ok(Self {
            club,
            members,
            starters,
        })
    }

    pub fn club(&self) -> ClubNumber {
        self.club
    }

    /// Every member, starters first.
    pub fn members(&self) -> &[SquadMember] {
        &self.members
    }

    pub fn starters(&self) -> &[SquadMember] {
        &self.members[..self.starters]
    }
}

/// Scoreline and both box scores of a simulated match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub score: Scoreline,
    pub home: Vec<BoxScore>,
    pub away: Vec<BoxScore>,
}

/// Simulate one match. The only randomness comes from `rng`.
pub fn simulate_match<R: Rng + ?Sized>(
    home: &MatchSquad,
    away: &MatchSquad,
    cfg: &MatchEngineConfig,
    rng: &mut R,
) -> Result<MatchOutcome, MatchError> {
    let home_strength = team_strength(home, cfg.goalkeeper_weight)?;
    let away_strength = team_strength(away, cfg.goalkeeper_weight)?;
    let table = ScoreTable::for_match(home_strength, away_strength, cfg);
    let score = sample_scoreline(&table, rng)?;
    trace!(
        home = %home.club(),
        away = %away.club(),
        home_goals = score.home,
        away_goals = score.away,
        "match simulated"
    );
    Ok(MatchOutcome {
        score,
        home: attribute_goals(home.members(), score.home, cfg.bench_size, cfg.match_length),
        away: attribute_goals(away.members(), score.away, cfg.bench_size, cfg.match_length),
    })
}
