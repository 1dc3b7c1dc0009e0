//! Scheduling many same-sized leagues side by side.
//!
//! League `l` owns schedule slots `l * n .. (l + 1) * n` in a flat club
//! space. A week's fixtures are every league's round for that week,
//! concatenated in league order.

use crate::{schedule_round, ClubCount, Pairing, ScheduleError};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A fixture addressed in the flat club space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalFixture {
    pub league: u32,
    /// Position of the fixture inside its league's round.
    pub fixture_index: u32,
    pub home: u32,
    pub away: u32,
}

/// All fixtures of `week` for every league in `leagues`.
pub fn week_fixtures(
    count: ClubCount,
    leagues: Range<u32>,
    week: u32,
) -> Result<Vec<GlobalFixture>, ScheduleError> {
    let round = schedule_round(count, week)?;
    Ok(spread_round(count, &round, leagues))
}

/// Copy one league round into every league of `leagues`, offsetting slots.
pub fn spread_round(
    count: ClubCount,
    round: &[Pairing],
    leagues: Range<u32>,
) -> Vec<GlobalFixture> {
    let n = count.get();
    let mut fixtures = Vec::with_capacity(round.len() * leagues.len());
    for league in leagues {
        let offset = league * n;
        for (i, pair) in round.iter().enumerate() {
            fixtures.push(GlobalFixture {
                league,
                fixture_index: i as u32,
                home: offset + pair.home,
                away: offset + pair.away,
            });
        }
    }
    fixtures
}

/// Map an index into [`week_fixtures`]' output back to `(league, fixture_index)`.
pub fn locate_fixture(
    count: ClubCount,
    leagues: Range<u32>,
    global_index: u32,
) -> Result<(u32, u32), ScheduleError> {
    let per_league = count.fixtures_per_round();
    let fixtures = per_league * leagues.len() as u32;
    if global_index >= fixtures {
        return Err(ScheduleError::FixtureOutOfRange {
            index: global_index,
            fixtures,
        });
    }
    Ok((
        leagues.start + global_index / per_league,
        global_index % per_league,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leagues_are_offset_and_concatenated() {
        let c = ClubCount::new(4).unwrap();
        let week = week_fixtures(c, 2..4, 1).unwrap();
        assert_eq!(week.len(), 4);
        assert_eq!((week[0].league, week[0].home, week[0].away), (2, 8, 10));
        assert_eq!((week[3].league, week[3].home, week[3].away), (3, 13, 15));
        for (i, f) in week.iter().enumerate() {
            let (league, idx) = locate_fixture(c, 2..4, i as u32).unwrap();
            assert_eq!((league, idx), (f.league, f.fixture_index));
            assert!(f.home / 4 == league && f.away / 4 == league);
        }
        assert_eq!(
            locate_fixture(c, 2..4, 4),
            Err(ScheduleError::FixtureOutOfRange { index: 4, fixtures: 4 })
        );
    }

    #[test]
    fn week_past_calendar_is_rejected() {
        let c = ClubCount::new(6).unwrap();
        assert!(week_fixtures(c, 0..3, 10).is_err());
    }
}
