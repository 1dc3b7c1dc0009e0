#![deny(warnings)]

//! Season driver for the league universe.
//!
//! A [`Season`] walks the home-and-away calendar one week at a time. Every
//! fixture of a week is simulated in parallel with its own generator,
//! seeded from the season seed and the fixture key, so results do not
//! depend on thread scheduling. Results stream into a [`RecordSink`] and
//! into per-league tables.

pub mod squad;
pub mod standings;

pub use squad::match_squad;
pub use standings::{compare_rows, LeagueTable, TableRow, DRAW_POINTS, WIN_POINTS};

use league_core::{
    AddressError, ClubNumber, ClubRecord, FixtureKey, LeagueNumber, LeagueRecord, MatchResult,
    PlayerMatchLog, PlayerRecord, RecordSink, World,
};
use league_match::{simulate_match, BoxScore, MatchError};
use league_schedule::{spread_round, ClubCount, GlobalFixture, ScheduleCache, ScheduleError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while driving a season.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("record sink failed: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("season already finished after {0} weeks")]
    SeasonFinished(u32),
}

fn sink_error<E: std::error::Error + Send + Sync + 'static>(err: E) -> RuntimeError {
    RuntimeError::Sink(Box::new(err))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Generator seed of one fixture.
pub fn fixture_seed(seed: u64, key: &FixtureKey) -> u64 {
    [key.season, key.league.0, key.week, key.fixture_index]
        .into_iter()
        .fold(splitmix64(seed), |acc, part| splitmix64(acc ^ u64::from(part)))
}

/// Result and box scores of one simulated fixture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedFixture {
    pub result: MatchResult,
    pub logs: Vec<PlayerMatchLog>,
}

fn match_log(key: FixtureKey, club: ClubNumber, score: &BoxScore) -> PlayerMatchLog {
    PlayerMatchLog {
        key,
        club,
        player: score.player,
        starts: score.starts,
        minutes: score.minutes,
        goals: score.goals,
        tackles: score.tackles,
    }
}

fn play_fixture(
    world: &World,
    season: u32,
    week: u32,
    seed: u64,
    fixture: &GlobalFixture,
) -> Result<PlayedFixture, RuntimeError> {
    let key = FixtureKey {
        season,
        league: LeagueNumber(fixture.league),
        week,
        fixture_index: fixture.fixture_index,
    };
    let home = match_squad(world, ClubNumber(fixture.home))?;
    let away = match_squad(world, ClubNumber(fixture.away))?;
    let mut rng = ChaCha8Rng::seed_from_u64(fixture_seed(seed, &key));
    let outcome = simulate_match(&home, &away, &world.config().match_engine, &mut rng)?;
    let logs = outcome
        .home
        .iter()
        .map(|b| match_log(key, home.club(), b))
        .chain(outcome.away.iter().map(|b| match_log(key, away.club(), b)))
        .collect();
    Ok(PlayedFixture {
        result: MatchResult {
            key,
            home: home.club(),
            away: away.club(),
            home_goals: outcome.score.home,
            away_goals: outcome.score.away,
        },
        logs,
    })
}

/// Simulate `fixtures` of one week in parallel. Output keeps fixture order.
pub fn simulate_week(
    world: &World,
    season: u32,
    week: u32,
    seed: u64,
    fixtures: &[GlobalFixture],
) -> Result<Vec<PlayedFixture>, RuntimeError> {
    fixtures
        .par_iter()
        .map(|f| play_fixture(world, season, week, seed, f))
        .collect()
}

/// Totals of one played week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub week: u32,
    pub fixtures: usize,
    pub goals: u32,
}

/// One season of every league, played week by week.
pub struct Season<'w> {
    world: &'w World,
    number: u32,
    seed: u64,
    clubs: ClubCount,
    schedule: ScheduleCache,
    tables: Vec<LeagueTable>,
    next_week: u32,
}

impl<'w> Season<'w> {
    pub fn new(world: &'w World, number: u32, seed: u64) -> Result<Self, RuntimeError> {
        let clubs = ClubCount::new(world.config().clubs_per_league)?;
        let tables = world
            .leagues()
            .map(|l| world.league(l).map(|view| LeagueTable::new(&view)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            world,
            number,
            seed,
            clubs,
            schedule: ScheduleCache::new(1),
            tables,
            next_week: 0,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Weeks in the calendar, `2(n - 1)`.
    pub fn weeks(&self) -> u32 {
        self.clubs.rounds()
    }

    pub fn next_week(&self) -> u32 {
        self.next_week
    }

    pub fn is_finished(&self) -> bool {
        self.next_week >= self.weeks()
    }

    /// Every league's fixtures of `week`, leagues in number order.
    pub fn fixtures(&mut self, week: u32) -> Result<Vec<GlobalFixture>, RuntimeError> {
        let round = self.schedule.round(self.clubs, week)?;
        Ok(spread_round(
            self.clubs,
            &round,
            0..self.world.config().total_leagues(),
        ))
    }

    /// Play the next week, feeding `sink` and the tables.
    ///
    /// The tables only change once every record of the week reached the
    /// sink, so a week that fails on the sink can be replayed.
    pub fn play_week<S: RecordSink>(&mut self, sink: &mut S) -> Result<WeekSummary, RuntimeError> {
        if self.is_finished() {
            return Err(RuntimeError::SeasonFinished(self.weeks()));
        }
        let week = self.next_week;
        let fixtures = self.fixtures(week)?;
        let played = simulate_week(self.world, self.number, week, self.seed, &fixtures)?;
        let mut results = Vec::with_capacity(played.len());
        for fixture in played {
            sink.put_match(fixture.result.clone()).map_err(sink_error)?;
            for log in fixture.logs {
                sink.put_player_log(log).map_err(sink_error)?;
            }
            results.push(fixture.result);
        }
        let mut goals = 0;
        for result in &results {
            goals += result.home_goals + result.away_goals;
            if let Some(table) = self.tables.get_mut(result.key.league.0 as usize) {
                table.record(result);
            }
        }
        self.next_week += 1;
        debug!(season = self.number, week, fixtures = fixtures.len(), goals, "week played");
        Ok(WeekSummary {
            week,
            fixtures: fixtures.len(),
            goals,
        })
    }

    /// Play up to `weeks` more weeks; stops early at the end of the calendar.
    pub fn play_weeks<S: RecordSink>(
        &mut self,
        weeks: u32,
        sink: &mut S,
    ) -> Result<Vec<WeekSummary>, RuntimeError> {
        let mut summaries = Vec::new();
        for _ in 0..weeks {
            if self.is_finished() {
                break;
            }
            summaries.push(self.play_week(sink)?);
        }
        Ok(summaries)
    }

    pub fn table(&self, league: LeagueNumber) -> Option<&LeagueTable> {
        self.tables.get(league.0 as usize)
    }

    pub fn tables(&self) -> &[LeagueTable] {
        &self.tables
    }

    pub fn into_tables(self) -> Vec<LeagueTable> {
        self.tables
    }
}

/// Play a whole season into `sink` and return the final tables.
pub fn run_season<S: RecordSink>(
    world: &World,
    season: u32,
    seed: u64,
    sink: &mut S,
) -> Result<Vec<LeagueTable>, RuntimeError> {
    let mut driver = Season::new(world, season, seed)?;
    let weeks = driver.weeks();
    let summaries = driver.play_weeks(weeks, sink)?;
    let goals: u32 = summaries.iter().map(|s| s.goals).sum();
    info!(season, weeks, goals, "season complete");
    Ok(driver.into_tables())
}

/// Counts of records written by [`generate_world_records`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub leagues: usize,
    pub clubs: usize,
    pub players: usize,
}

fn club_records(
    world: &World,
    number: ClubNumber,
) -> Result<(ClubRecord, Vec<PlayerRecord>), AddressError> {
    let club = world.club(number)?;
    let finances = world.finances(&club);
    let players = world
        .squad(number)
        .map(|n| {
            let player = world.player(n)?;
            Ok(PlayerRecord {
                wage: world.player_wage(&player, &finances),
                skills: world.player_skills(&player, &club),
                player,
            })
        })
        .collect::<Result<Vec<_>, AddressError>>()?;
    Ok((ClubRecord { club, finances }, players))
}

/// Derive every league, club and player record into `sink`.
///
/// Clubs of a league are derived in parallel and written in club order.
pub fn generate_world_records<S: RecordSink>(
    world: &World,
    sink: &mut S,
) -> Result<RecordCounts, RuntimeError> {
    let mut counts = RecordCounts::default();
    for number in world.leagues() {
        let league = world.league(number)?;
        let clubs: Vec<ClubNumber> = league.clubs().collect();
        let derived = clubs
            .par_iter()
            .map(|&c| club_records(world, c))
            .collect::<Result<Vec<_>, _>>()?;
        sink.put_league(LeagueRecord { league, clubs })
            .map_err(sink_error)?;
        counts.leagues += 1;
        for (club, players) in derived {
            sink.put_club(club).map_err(sink_error)?;
            counts.clubs += 1;
            for player in players {
                sink.put_player(player).map_err(sink_error)?;
                counts.players += 1;
            }
        }
    }
    info!(
        leagues = counts.leagues,
        clubs = counts.clubs,
        players = counts.players,
        "world records generated"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::LeagueConfig;
    use std::convert::Infallible;

    #[derive(Debug, Default, PartialEq)]
    struct VecSink {
        leagues: Vec<LeagueRecord>,
        clubs: Vec<ClubRecord>,
        players: Vec<PlayerRecord>,
        matches: Vec<MatchResult>,
        logs: Vec<PlayerMatchLog>,
    }

    impl RecordSink for VecSink {
        type Error = Infallible;

        fn put_club(&mut self, record: ClubRecord) -> Result<(), Infallible> {
            self.clubs.push(record);
            Ok(())
        }
        fn put_player(&mut self, record: PlayerRecord) -> Result<(), Infallible> {
            self.players.push(record);
            Ok(())
        }
        fn put_league(&mut self, record: LeagueRecord) -> Result<(), Infallible> {
            self.leagues.push(record);
            Ok(())
        }
        fn put_match(&mut self, result: MatchResult) -> Result<(), Infallible> {
            self.matches.push(result);
            Ok(())
        }
        fn put_player_log(&mut self, log: PlayerMatchLog) -> Result<(), Infallible> {
            self.logs.push(log);
            Ok(())
        }
    }

    #[derive(Debug, Error)]
    #[error("disk full")]
    struct DiskFull;

    struct FullSink;

    impl RecordSink for FullSink {
        type Error = DiskFull;

        fn put_club(&mut self, _: ClubRecord) -> Result<(), DiskFull> {
            Err(DiskFull)
        }
        fn put_player(&mut self, _: PlayerRecord) -> Result<(), DiskFull> {
            Err(DiskFull)
        }
        fn put_league(&mut self, _: LeagueRecord) -> Result<(), DiskFull> {
            Err(DiskFull)
        }
        fn put_match(&mut self, _: MatchResult) -> Result<(), DiskFull> {
            Err(DiskFull)
        }
        fn put_player_log(&mut self, _: PlayerMatchLog) -> Result<(), DiskFull> {
            Err(DiskFull)
        }
    }

    /// Accepts records until `fail_at` matches have gone through, then
    /// rejects one match and recovers.
    #[derive(Default)]
    struct FlakySink {
        inner: VecSink,
        fail_at: Option<usize>,
    }

    impl RecordSink for FlakySink {
        type Error = DiskFull;

        fn put_club(&mut self, record: ClubRecord) -> Result<(), DiskFull> {
            self.inner.clubs.push(record);
            Ok(())
        }
        fn put_player(&mut self, record: PlayerRecord) -> Result<(), DiskFull> {
            self.inner.players.push(record);
            Ok(())
        }
        fn put_league(&mut self, record: LeagueRecord) -> Result<(), DiskFull> {
            self.inner.leagues.push(record);
            Ok(())
        }
        fn put_match(&mut self, result: MatchResult) -> Result<(), DiskFull> {
            if self.fail_at == Some(self.inner.matches.len()) {
                self.fail_at = None;
                return Err(DiskFull);
            }
            self.inner.matches.push(result);
            Ok(())
        }
        fn put_player_log(&mut self, log: PlayerMatchLog) -> Result<(), DiskFull> {
            self.inner.logs.push(log);
            Ok(())
        }
    }

    fn small_world() -> World {
        World::new(LeagueConfig {
            countries: 2,
            leagues_per_country: 2,
            clubs_per_league: 4,
            ..LeagueConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn fixture_seeds_are_keyed() {
        let key = FixtureKey {
            season: 1,
            league: LeagueNumber(2),
            week: 3,
            fixture_index: 0,
        };
        let other = FixtureKey {
            fixture_index: 1,
            ..key
        };
        assert_eq!(fixture_seed(7, &key), fixture_seed(7, &key));
        assert_ne!(fixture_seed(7, &key), fixture_seed(7, &other));
        assert_ne!(fixture_seed(7, &key), fixture_seed(8, &key));
    }

    #[test]
    fn full_season_plays_every_fixture() {
        let world = small_world();
        let mut sink = VecSink::default();
        let tables = run_season(&world, 0, 42, &mut sink).unwrap();
        assert_eq!(tables.len(), 4);
        assert_eq!(sink.matches.len(), 4 * 12);
        assert_eq!(sink.logs.len(), 4 * 12 * 2 * 18);
        for table in &tables {
            assert_eq!(table.games_played(), 12);
            assert!(table.standings().iter().all(|r| r.played == 6));
            let goals: u32 = table.standings().iter().map(|r| r.goals_for).sum();
            let conceded: u32 = table.standings().iter().map(|r| r.goals_against).sum();
            assert_eq!(goals, conceded);
        }
        for result in &sink.matches {
            let scored: u32 = sink
                .logs
                .iter()
                .filter(|l| l.key == result.key && l.club == result.home)
                .map(|l| l.goals)
                .sum();
            assert_eq!(scored, result.home_goals);
        }
    }

    #[test]
    fn same_seed_same_season() {
        let world = small_world();
        let (mut a, mut b) = (VecSink::default(), VecSink::default());
        let ta = run_season(&world, 3, 9, &mut a).unwrap();
        let tb = run_season(&world, 3, 9, &mut b).unwrap();
        assert_eq!(a, b);
        assert_eq!(ta, tb);
    }

    #[test]
    fn parallel_week_matches_sequential_play() {
        let world = small_world();
        let mut season = Season::new(&world, 0, 5).unwrap();
        let fixtures = season.fixtures(2).unwrap();
        let parallel = simulate_week(&world, 0, 2, 5, &fixtures).unwrap();
        let sequential: Vec<PlayedFixture> = fixtures
            .iter()
            .map(|f| play_fixture(&world, 0, 2, 5, f).unwrap())
            .collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn season_stops_at_calendar_end() {
        let world = small_world();
        let mut sink = VecSink::default();
        let mut season = Season::new(&world, 0, 1).unwrap();
        let played = season.play_weeks(100, &mut sink).unwrap();
        assert_eq!(played.len(), 6);
        assert!(season.is_finished());
        assert!(matches!(
            season.play_week(&mut sink),
            Err(RuntimeError::SeasonFinished(6))
        ));
    }

    #[test]
    fn sink_failures_surface() {
        let world = small_world();
        let mut season = Season::new(&world, 0, 1).unwrap();
        let err = season.play_week(&mut FullSink).unwrap_err();
        assert!(matches!(err, RuntimeError::Sink(_)));
        assert_eq!(err.to_string(), "record sink failed: disk full");
    }

    #[test]
    fn failed_week_replays_without_double_counting() {
        let world = small_world();
        let mut season = Season::new(&world, 0, 1).unwrap();
        let mut sink = FlakySink {
            fail_at: Some(1),
            ..FlakySink::default()
        };
        assert!(season.play_week(&mut sink).is_err());
        assert_eq!(season.next_week(), 0);
        assert!(season.tables().iter().all(|t| t.games_played() == 0));

        let summary = season.play_week(&mut sink).unwrap();
        assert_eq!(summary.week, 0);
        assert_eq!(season.next_week(), 1);
        // four clubs play two fixtures a week
        assert!(season.tables().iter().all(|t| t.games_played() == 2));

        let mut reference = Season::new(&world, 0, 1).unwrap();
        reference.play_week(&mut VecSink::default()).unwrap();
        assert_eq!(season.tables(), reference.tables());
    }

    #[test]
    fn world_records_cover_every_entity() {
        let world = small_world();
        let mut sink = VecSink::default();
        let counts = generate_world_records(&world, &mut sink).unwrap();
        assert_eq!(
            counts,
            RecordCounts {
                leagues: 4,
                clubs: 16,
                players: 16 * 25,
            }
        );
        assert_eq!(sink.leagues[1].clubs.len(), 4);
        let clubs: Vec<u32> = sink.clubs.iter().map(|c| c.club.number.0).collect();
        assert_eq!(clubs, (0..16).collect::<Vec<_>>());
        assert_eq!(sink.players[30].player.club, ClubNumber(1));
    }
}
