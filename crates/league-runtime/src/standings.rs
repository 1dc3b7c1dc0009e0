//! League tables accumulated from match results.

use league_core::{ClubNumber, DomesticLeague, LeagueNumber, MatchResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;

/// One club's line in a league table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub club: ClubNumber,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl TableRow {
    pub fn new(club: ClubNumber) -> Self {
        Self {
            club,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won += 1;
                self.points += WIN_POINTS;
            }
            Ordering::Equal => {
                self.drawn += 1;
                self.points += DRAW_POINTS;
            }
            Ordering::Less => self.lost += 1,
        }
    }
}

/// Table order: points, goal difference, goals scored, then club number.
pub fn compare_rows(a: &TableRow, b: &TableRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.club.cmp(&b.club))
}

/// Running table of one domestic league.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    league: LeagueNumber,
    rows: BTreeMap<ClubNumber, TableRow>,
}

impl LeagueTable {
    pub fn new(league: &DomesticLeague) -> Self {
        Self {
            league: league.number,
            rows: league.clubs().map(|c| (c, TableRow::new(c))).collect(),
        }
    }

    pub fn league(&self) -> LeagueNumber {
        self.league
    }

    /// Apply a result. Returns `false` and leaves the table untouched when
    /// either club plays elsewhere.
    pub fn record(&mut self, result: &MatchResult) -> bool {
        if !self.rows.contains_key(&result.home) || !self.rows.contains_key(&result.away) {
            return false;
        }
        if let Some(home) = self.rows.get_mut(&result.home) {
            home.record(result.home_goals, result.away_goals);
        }
        if let Some(away) = self.rows.get_mut(&result.away) {
            away.record(result.away_goals, result.home_goals);
        }
        true
    }

    pub fn row(&self, club: ClubNumber) -> Option<&TableRow> {
        self.rows.get(&club)
    }

    /// Rows in table order.
    pub fn standings(&self) -> Vec<TableRow> {
        let mut rows: Vec<TableRow> = self.rows.values().copied().collect();
        rows.sort_by(compare_rows);
        rows
    }

    pub fn games_played(&self) -> u32 {
        self.rows.values().map(|r| r.played).sum::<u32>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::{CountryIndex, FixtureKey};
    use proptest::prelude::*;

    fn league() -> DomesticLeague {
        DomesticLeague {
            number: LeagueNumber(1),
            country: CountryIndex(0),
            level: 1,
            first_club: ClubNumber(4),
            club_count: 4,
        }
    }

    fn result(home: u32, away: u32, hg: u32, ag: u32) -> MatchResult {
        MatchResult {
            key: FixtureKey {
                season: 0,
                league: LeagueNumber(1),
                week: 0,
                fixture_index: 0,
            },
            home: ClubNumber(home),
            away: ClubNumber(away),
            home_goals: hg,
            away_goals: ag,
        }
    }

    #[test]
    fn points_and_tiebreaks() {
        let mut table = LeagueTable::new(&league());
        assert!(table.record(&result(4, 5, 3, 0)));
        assert!(table.record(&result(7, 6, 1, 0)));
        assert!(table.record(&result(5, 6, 3, 3)));

        let order: Vec<u32> = table.standings().iter().map(|r| r.club.0).collect();
        // 4 and 7 tie on points, as do 6 and 5; goal difference splits both
        assert_eq!(order, vec![4, 7, 6, 5]);
        let top = table.row(ClubNumber(4)).unwrap();
        assert_eq!((top.won, top.lost, top.points), (1, 0, 3));
        assert_eq!(top.goal_difference(), 3);
        assert_eq!(table.games_played(), 3);
    }

    #[test]
    fn club_number_breaks_full_ties() {
        let mut table = LeagueTable::new(&league());
        table.record(&result(5, 4, 1, 1));
        let order: Vec<u32> = table.standings().iter().map(|r| r.club.0).collect();
        assert_eq!(order, vec![4, 5, 6, 7]);
    }

    #[test]
    fn foreign_results_are_ignored() {
        let mut table = LeagueTable::new(&league());
        assert!(!table.record(&result(4, 9, 5, 0)));
        assert_eq!(table.games_played(), 0);
    }

    proptest! {
        #[test]
        fn points_track_results(
            games in proptest::collection::vec((0u32..4, 1u32..4, 0u32..6, 0u32..6), 0..40)
        ) {
            let mut table = LeagueTable::new(&league());
            let mut draws = 0;
            for (h, step, hg, ag) in &games {
                let home = 4 + h;
                let away = 4 + (h + step) % 4;
                prop_assert!(table.record(&result(home, away, *hg, *ag)));
                if hg == ag {
                    draws += 1;
                }
            }
            let rows = table.standings();
            let points: u32 = rows.iter().map(|r| r.points).sum();
            let decided = games.len() as u32 - draws;
            prop_assert_eq!(points, WIN_POINTS * decided + 2 * DRAW_POINTS * draws);
            prop_assert_eq!(table.games_played(), games.len() as u32);
            prop_assert!(rows
                .windows(2)
                .all(|w| compare_rows(&w[0], &w[1]) != Ordering::Greater));
        }
    }
}
