#![deny(warnings)]

//! Round-robin fixture calendars.
//!
//! Clubs are the schedule slots `0..n` of one league. The circle method
//! keeps slot 0 fixed and rotates the others one position per round, which
//! yields `n - 1` rounds of `n / 2` disjoint fixtures covering every pair
//! once. The season calendar plays that single round robin and then its
//! mirror image, so every pair meets twice with home and away reversed.

pub mod cache;
pub mod week;

pub use cache::ScheduleCache;
pub use week::{locate_fixture, spread_round, week_fixtures, GlobalFixture};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors at the scheduler boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The circle method needs an even number of clubs.
    #[error("club count must be even, got {0}")]
    OddClubCount(u32),
    /// At least two clubs are needed for a fixture.
    #[error("club count must be at least 2, got {0}")]
    TooFewClubs(u32),
    /// Round index past the end of the calendar.
    #[error("round {round} out of range [0, {rounds})")]
    RoundOutOfRange { round: u32, rounds: u32 },
    /// Global fixture index past the end of a week.
    #[error("fixture {index} out of range [0, {fixtures})")]
    FixtureOutOfRange { index: u32, fixtures: u32 },
}

/// Validated even club count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClubCount(u32);

impl ClubCount {
    pub fn new(n: u32) -> Result<Self, ScheduleError> {
        if n < 2 {
            return Err(ScheduleError::TooFewClubs(n));
        }
        if n % 2 != 0 {
            return Err(ScheduleError::OddClubCount(n));
        }
        Ok(Self(n))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Rounds in a single round robin.
    pub const fn single_rounds(self) -> u32 {
        self.0 - 1
    }

    /// Rounds in the home-and-away calendar.
    pub const fn rounds(self) -> u32 {
        2 * (self.0 - 1)
    }

    pub const fn fixtures_per_round(self) -> u32 {
        self.0 / 2
    }
}

/// Ordered fixture between two schedule slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub home: u32,
    pub away: u32,
}

impl Pairing {
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Same fixture with home and away swapped.
    pub const fn mirrored(self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }

    pub const fn involves(self, club: u32) -> bool {
        self.home == club || self.away == club
    }
}

/// Club occupying circle `position` (1..n) in `round`; position 0 is always club 0.
fn club_at(n: u32, position: u32, round: u32) -> u32 {
    let ring = n - 1;
    1 + (position - 1 + ring - round % ring) % ring
}

fn circle_round(count: ClubCount, round: u32) -> Vec<Pairing> {
    let n = count.get();
    let mut pairs = Vec::with_capacity(count.fixtures_per_round() as usize);
    pairs.push(Pairing::new(0, club_at(n, n - 1, round)));
    for k in 1..n / 2 {
        let a = club_at(n, k, round);
        let b = club_at(n, n - 1 - k, round);
        // alternate the home side by position parity
        if k % 2 == 1 {
            pairs.push(Pairing::new(a, b));
        } else {
            pairs.push(Pairing::new(b, a));
        }
    }
    pairs
}

/// Round `round` of the single round robin, straight from the circle method.
pub fn single_round(count: ClubCount, round: u32) -> Result<Vec<Pairing>, ScheduleError> {
    let rounds = count.single_rounds();
    if round >= rounds {
        return Err(ScheduleError::RoundOutOfRange { round, rounds });
    }
    Ok(circle_round(count, round))
}

/// All rounds of the single round robin.
pub fn single_round_robin(count: ClubCount) -> Vec<Vec<Pairing>> {
    (0..count.single_rounds())
        .map(|r| circle_round(count, r))
        .collect()
}

/// First-half round with the tail swap applied: in the final two single
/// rounds the fixtures between rotating clubs change home side.
fn first_half_round(count: ClubCount, round: u32) -> Vec<Pairing> {
    let pairs = circle_round(count, round);
    if round + 2 < count.single_rounds() {
        return pairs;
    }
    pairs
        .into_iter()
        .map(|p| if p.involves(0) { p } else { p.mirrored() })
        .collect()
}

/// Round `round` of the home-and-away calendar, `round < 2(n - 1)`.
///
/// The second half repeats the first with every fixture mirrored. The last
/// two rounds of the first half are tail-swapped, so their home sides differ
/// from the circle method; use [`single_round`] for the plain circle order.
pub fn schedule_round(count: ClubCount, round: u32) -> Result<Vec<Pairing>, ScheduleError> {
    let rounds = count.rounds();
    if round >= rounds {
        return Err(ScheduleError::RoundOutOfRange { round, rounds });
    }
    let half = count.single_rounds();
    if round < half {
        Ok(first_half_round(count, round))
    } else {
        Ok(first_half_round(count, round - half)
            .into_iter()
            .map(Pairing::mirrored)
            .collect())
    }
}

/// Every round of the home-and-away calendar.
pub fn double_round_robin(count: ClubCount) -> Vec<Vec<Pairing>> {
    let first: Vec<Vec<Pairing>> = (0..count.single_rounds())
        .map(|r| first_half_round(count, r))
        .collect();
    let second: Vec<Vec<Pairing>> = first
        .iter()
        .map(|round| round.iter().map(|p| p.mirrored()).collect())
        .collect();
    first.into_iter().chain(second).collect()
}

/// All `n(n - 1)` ordered fixtures of the calendar, in round order.
pub fn all_pairs(count: ClubCount) -> Vec<Pairing> {
    double_round_robin(count).into_iter().flatten().collect()
}
