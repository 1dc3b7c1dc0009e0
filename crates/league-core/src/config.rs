//! Inbound constants and their validation.
//!
//! Everything here is fixed once a [`crate::World`] is built. Validation runs
//! before any entity is derived so that a degenerate range or an odd league
//! size is rejected up front instead of corrupting derived attributes.

use crate::ranges::{adjust_range, scale_bound};
use crate::skills::PositionGroup;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_true() -> bool {
    true
}

/// Inclusive base range of a synthetic attribute before division scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRange {
    /// Lower bound (> 0).
    pub min: u64,
    /// Upper bound (> min).
    pub max: u64,
    /// Number of sweeps across the range over one cycle period.
    pub cycles: u64,
    /// Whether lower divisions shrink the range.
    #[serde(default = "default_true")]
    pub scaled_by_division: bool,
}

impl AttributeRange {
    /// Division-scaled range.
    pub const fn new(min: u64, max: u64, cycles: u64) -> Self {
        Self {
            min,
            max,
            cycles,
            scaled_by_division: true,
        }
    }

    /// Range that is identical in every division.
    pub const fn unscaled(min: u64, max: u64, cycles: u64) -> Self {
        Self {
            min,
            max,
            cycles,
            scaled_by_division: false,
        }
    }
}

/// Base ranges of the synthetic club attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubRanges {
    pub attendance: AttributeRange,
    pub ticket_price: AttributeRange,
    pub sponsor_payment: AttributeRange,
    pub facilities_cost: AttributeRange,
    pub manager_pay: AttributeRange,
    pub scouting_cost: AttributeRange,
    pub health_cost: AttributeRange,
    pub development_cost: AttributeRange,
    /// Wages as a percentage of the previous season's revenue.
    pub wage_ratio_pct: AttributeRange,
}

impl Default for ClubRanges {
    fn default() -> Self {
        Self {
            attendance: AttributeRange::new(10_000, 50_000, 1),
            ticket_price: AttributeRange::new(20, 60, 7),
            sponsor_payment: AttributeRange::new(1_000_000, 20_000_000, 2),
            facilities_cost: AttributeRange::new(200_000, 2_000_000, 5),
            manager_pay: AttributeRange::new(100_000, 3_000_000, 7),
            scouting_cost: AttributeRange::new(50_000, 500_000, 11),
            health_cost: AttributeRange::new(50_000, 800_000, 13),
            development_cost: AttributeRange::new(100_000, 1_500_000, 17),
            wage_ratio_pct: AttributeRange::unscaled(45, 75, 3),
        }
    }
}

impl ClubRanges {
    /// Named view over every range, used by validation.
    pub fn named(&self) -> [(&'static str, &AttributeRange); 9] {
        [
            ("attendance", &self.attendance),
            ("ticket_price", &self.ticket_price),
            ("sponsor_payment", &self.sponsor_payment),
            ("facilities_cost", &self.facilities_cost),
            ("manager_pay", &self.manager_pay),
            ("scouting_cost", &self.scouting_cost),
            ("health_cost", &self.health_cost),
            ("development_cost", &self.development_cost),
            ("wage_ratio_pct", &self.wage_ratio_pct),
        ]
    }
}

/// Base ranges of the synthetic player attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRanges {
    /// Skill rating; the upper bound must fit in a `u8`.
    pub skill: AttributeRange,
    /// Age in years, half-open.
    pub age: AttributeRange,
    /// Remaining contract years, half-open.
    pub contract_years: AttributeRange,
}

impl Default for PlayerRanges {
    fn default() -> Self {
        Self {
            skill: AttributeRange::new(35, 99, 9),
            age: AttributeRange::unscaled(17, 36, 5),
            contract_years: AttributeRange::unscaled(1, 6, 7),
        }
    }
}

impl PlayerRanges {
    pub fn named(&self) -> [(&'static str, &AttributeRange); 3] {
        [
            ("skill", &self.skill),
            ("age", &self.age),
            ("contract_years", &self.contract_years),
        ]
    }
}

/// Starting line-up shape: how many starters each position group fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub defenders: u32,
    pub midfielders: u32,
    pub attackers: u32,
    pub goalkeepers: u32,
}

impl Default for Formation {
    fn default() -> Self {
        Self {
            defenders: 4,
            midfielders: 4,
            attackers: 2,
            goalkeepers: 1,
        }
    }
}

impl Formation {
    /// Starters fielded from `group`.
    pub const fn count(&self, group: PositionGroup) -> u32 {
        match group {
            PositionGroup::Defender => self.defenders,
            PositionGroup::Midfielder => self.midfielders,
            PositionGroup::Attacker => self.attackers,
            PositionGroup::Goalkeeper => self.goalkeepers,
        }
    }

    pub const fn starters(&self) -> u32 {
        self.defenders + self.midfielders + self.attackers + self.goalkeepers
    }
}

/// Calibration of the match engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchEngineConfig {
    /// Minutes in a match.
    pub match_length: u32,
    /// Substitutes named next to the starters.
    pub bench_size: u32,
    /// Highest goal count per side in the scoreline grid.
    pub max_goals: u32,
    /// Weibull shape of the goal-count margins.
    pub weibull_shape: f64,
    /// Frank copula dependence parameter.
    pub copula_theta: f64,
    /// Baseline term `U` of the intensity model.
    pub baseline: f64,
    /// Extra intensity term for the home side.
    pub home_effect: f64,
    /// Share of defense strength that comes from the goalkeeper.
    pub goalkeeper_weight: f64,
    pub formation: Formation,
}

impl Default for MatchEngineConfig {
    fn default() -> Self {
        Self {
            match_length: 90,
            bench_size: 7,
            max_goals: 5,
            weibull_shape: 1.4,
            copula_theta: 0.6,
            baseline: -0.75,
            home_effect: 0.15,
            goalkeeper_weight: 0.05,
            formation: Formation::default(),
        }
    }
}

/// All inbound constants of the league universe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    pub countries: u32,
    pub leagues_per_country: u32,
    /// Clubs in one division; must be even.
    pub clubs_per_league: u32,
    pub squad_size: u32,
    /// Size of each of the three outfield groups; goalkeepers take the rest.
    pub players_per_outfield_group: u32,
    /// Range multipliers by division level, top division first.
    pub division_multipliers: Vec<Decimal>,
    /// Share of the wage bill per position group, in [`PositionGroup::ALL`] order.
    pub group_wage_shares: Vec<Decimal>,
    pub club_ranges: ClubRanges,
    pub player_ranges: PlayerRanges,
    pub match_engine: MatchEngineConfig,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            countries: 4,
            leagues_per_country: 5,
            clubs_per_league: 20,
            squad_size: 25,
            players_per_outfield_group: 7,
            division_multipliers: vec![
                Decimal::ONE,
                Decimal::new(75, 2),
                Decimal::new(5, 1),
                Decimal::new(25, 2),
                Decimal::new(1, 1),
            ],
            group_wage_shares: vec![
                Decimal::new(30, 2),
                Decimal::new(30, 2),
                Decimal::new(32, 2),
                Decimal::new(8, 2),
            ],
            club_ranges: ClubRanges::default(),
            player_ranges: PlayerRanges::default(),
            match_engine: MatchEngineConfig::default(),
        }
    }
}

impl LeagueConfig {
    /// Parse a YAML document; missing keys fall back to [`LeagueConfig::default`].
    pub fn from_yaml_str(text: &str) -> Result<Self, ValidationError> {
        serde_yaml::from_str(text).map_err(|e| ValidationError::Yaml(e.to_string()))
    }

    pub const fn clubs_per_country(&self) -> u32 {
        self.leagues_per_country * self.clubs_per_league
    }

    pub const fn total_leagues(&self) -> u32 {
        self.countries * self.leagues_per_country
    }

    pub const fn total_clubs(&self) -> u32 {
        self.total_leagues() * self.clubs_per_league
    }

    pub const fn total_players(&self) -> u32 {
        self.total_clubs() * self.squad_size
    }

    /// Size of the trailing goalkeeper group.
    pub const fn goalkeepers(&self) -> u32 {
        self.squad_size - PositionGroup::OUTFIELD.len() as u32 * self.players_per_outfield_group
    }

    /// Number of players in `group`.
    pub const fn group_size(&self, group: PositionGroup) -> u32 {
        match group {
            PositionGroup::Goalkeeper => self.goalkeepers(),
            _ => self.players_per_outfield_group,
        }
    }

    /// Home games each club plays in a double round robin.
    pub const fn home_games(&self) -> u32 {
        self.clubs_per_league - 1
    }
}

/// Validation errors for configuration invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A count that must be strictly positive was zero.
    #[error("{0} must be > 0")]
    ZeroCount(&'static str),
    /// The round-robin scheduler needs an even number of clubs.
    #[error("clubs per league must be even, got {0}")]
    OddClubCount(u32),
    /// Squad cannot hold three outfield groups plus a smaller goalkeeper group.
    #[error("squad of {squad} cannot hold three outfield groups of {per_group} and a smaller goalkeeper group")]
    SquadShape { squad: u32, per_group: u32 },
    /// Division multiplier outside (0, 1].
    #[error("division multiplier {0} must be within (0, 1]")]
    MultiplierOutOfRange(Decimal),
    /// Lower divisions must never get a larger multiplier.
    #[error("division multipliers must not increase with depth")]
    MultipliersIncreasing,
    /// Base range violates 0 < min < max.
    #[error("range {name} [{min}, {max}] must satisfy 0 < min < max")]
    InvalidRange { name: &'static str, min: u64, max: u64 },
    /// Division scaling collapses the range.
    #[error("range {name} collapses at division level {level}")]
    CollapsedRange { name: &'static str, level: usize },
    /// Cyclic step is a whole number of range lengths, so every slot gets the same value.
    #[error("range {name} does not vary across {period} slots at division level {level}")]
    DegenerateCycle {
        name: &'static str,
        level: usize,
        period: u32,
    },
    /// Bench plus starters exceed the squad.
    #[error("bench of {bench} exceeds the {available} players left after the starters")]
    BenchSize { bench: u32, available: u32 },
    /// Skill ceiling does not fit the skill vector.
    #[error("skill ceiling {0} exceeds 255")]
    SkillCeiling(u64),
    /// Wage shares must cover every position group and sum to 1.
    #[error("wage shares must cover {expected} position groups and sum to 1")]
    WageShares { expected: usize },
    /// Numeric calibration must be finite and positive.
    #[error("{0} must be finite and positive")]
    NonPositiveParameter(&'static str),
    /// Frank copula is undefined at theta = 0.
    #[error("copula dependence parameter must be finite and non-zero")]
    DegenerateCopula,
    /// Goalkeeper weight must be within [0, 1].
    #[error("goalkeeper weight must be within [0, 1]")]
    GoalkeeperWeight,
    /// Exactly one goalkeeper starts.
    #[error("formation must field exactly one goalkeeper, got {0}")]
    GoalkeeperCount(u32),
    /// Formation needs more players than a group holds.
    #[error("formation asks for {wanted} {group:?} starters but the group holds {available}")]
    FormationOverflow {
        group: PositionGroup,
        wanted: u32,
        available: u32,
    },
    /// Derived entity totals do not fit the identifier width.
    #[error("entity totals overflow u32")]
    TooManyEntities,
    /// Config document could not be parsed.
    #[error("invalid yaml: {0}")]
    Yaml(String),
}

fn validate_counts(cfg: &LeagueConfig) -> Result<(), ValidationError> {
    let counts = [
        ("countries", cfg.countries),
        ("leagues_per_country", cfg.leagues_per_country),
        ("clubs_per_league", cfg.clubs_per_league),
        ("squad_size", cfg.squad_size),
        ("players_per_outfield_group", cfg.players_per_outfield_group),
        ("match_length", cfg.match_engine.match_length),
        ("max_goals", cfg.match_engine.max_goals),
    ];
    for (name, value) in counts {
        if value == 0 {
            return Err(ValidationError::ZeroCount(name));
        }
    }
    if cfg.clubs_per_league % 2 != 0 {
        return Err(ValidationError::OddClubCount(cfg.clubs_per_league));
    }
    let total = u64::from(cfg.countries)
        * u64::from(cfg.leagues_per_country)
        * u64::from(cfg.clubs_per_league)
        * u64::from(cfg.squad_size);
    if total > u64::from(u32::MAX) {
        return Err(ValidationError::TooManyEntities);
    }
    let outfield = u64::from(cfg.players_per_outfield_group) * PositionGroup::OUTFIELD.len() as u64;
    let squad = u64::from(cfg.squad_size);
    if squad <= outfield || squad - outfield >= u64::from(cfg.players_per_outfield_group) {
        return Err(ValidationError::SquadShape {
            squad: cfg.squad_size,
            per_group: cfg.players_per_outfield_group,
        });
    }
    Ok(())
}

fn validate_multipliers(multipliers: &[Decimal]) -> Result<(), ValidationError> {
    if multipliers.is_empty() {
        return Err(ValidationError::ZeroCount("division_multipliers"));
    }
    for m in multipliers {
        if *m <= Decimal::ZERO || *m > Decimal::ONE {
            return Err(ValidationError::MultiplierOutOfRange(*m));
        }
    }
    if multipliers.windows(2).any(|w| w[1] > w[0]) {
        return Err(ValidationError::MultipliersIncreasing);
    }
    Ok(())
}

/// Check one base range and, when scaled, every division level it can reach.
fn validate_range(
    name: &'static str,
    range: &AttributeRange,
    multipliers: &[Decimal],
    period: u32,
) -> Result<(), ValidationError> {
    if range.min == 0 || range.min >= range.max {
        return Err(ValidationError::InvalidRange {
            name,
            min: range.min,
            max: range.max,
        });
    }
    if range.cycles == 0 {
        return Err(ValidationError::ZeroCount(name));
    }
    let levels = if range.scaled_by_division {
        multipliers.len()
    } else {
        1
    };
    if range.scaled_by_division {
        for (level, m) in multipliers.iter().enumerate() {
            if scale_bound(range.min, *m) >= scale_bound(range.max, *m) {
                return Err(ValidationError::CollapsedRange { name, level });
            }
        }
    }
    for level in 0..levels {
        let adjusted = adjust_range(range, multipliers, level as u32);
        if !adjusted.sweeps(range.cycles, u64::from(period)) {
            return Err(ValidationError::DegenerateCycle {
                name,
                level,
                period,
            });
        }
    }
    Ok(())
}

/// Off-focus skills draw from the lower half of the skill range.
fn validate_off_focus_skills(cfg: &LeagueConfig) -> Result<(), ValidationError> {
    let range = &cfg.player_ranges.skill;
    let levels = if range.scaled_by_division {
        cfg.division_multipliers.len()
    } else {
        1
    };
    for level in 0..levels {
        let half = adjust_range(range, &cfg.division_multipliers, level as u32).lower_half();
        if !half.sweeps(range.cycles, u64::from(cfg.squad_size)) {
            return Err(ValidationError::DegenerateCycle {
                name: "skill (off-focus)",
                level,
                period: cfg.squad_size,
            });
        }
    }
    Ok(())
}

fn validate_match_engine(engine: &MatchEngineConfig, cfg: &LeagueConfig) -> Result<(), ValidationError> {
    if !(engine.weibull_shape.is_finite() && engine.weibull_shape > 0.0) {
        return Err(ValidationError::NonPositiveParameter("weibull_shape"));
    }
    if !engine.copula_theta.is_finite() || engine.copula_theta == 0.0 {
        return Err(ValidationError::DegenerateCopula);
    }
    if !(engine.baseline.is_finite() && engine.home_effect.is_finite()) {
        return Err(ValidationError::NonPositiveParameter("baseline/home_effect"));
    }
    if !(0.0..=1.0).contains(&engine.goalkeeper_weight) {
        return Err(ValidationError::GoalkeeperWeight);
    }
    if engine.formation.goalkeepers != 1 {
        return Err(ValidationError::GoalkeeperCount(engine.formation.goalkeepers));
    }
    for group in PositionGroup::ALL {
        let wanted = engine.formation.count(group);
        let available = cfg.group_size(group);
        if wanted > available {
            return Err(ValidationError::FormationOverflow {
                group,
                wanted,
                available,
            });
        }
    }
    if engine.formation.defenders == 0 {
        return Err(ValidationError::ZeroCount("formation.defenders"));
    }
    let available = cfg.squad_size.saturating_sub(engine.formation.starters());
    if engine.bench_size > available {
        return Err(ValidationError::BenchSize {
            bench: engine.bench_size,
            available,
        });
    }
    Ok(())
}

/// Validate the whole configuration. Called by [`crate::World::new`].
pub fn validate_config(cfg: &LeagueConfig) -> Result<(), ValidationError> {
    validate_counts(cfg)?;
    validate_multipliers(&cfg.division_multipliers)?;
    // club attributes sweep across a division, player attributes across a squad
    for (name, range) in cfg.club_ranges.named() {
        validate_range(name, range, &cfg.division_multipliers, cfg.clubs_per_league)?;
    }
    for (name, range) in cfg.player_ranges.named() {
        validate_range(name, range, &cfg.division_multipliers, cfg.squad_size)?;
    }
    validate_off_focus_skills(cfg)?;
    if cfg.player_ranges.skill.max > u64::from(u8::MAX) {
        return Err(ValidationError::SkillCeiling(cfg.player_ranges.skill.max));
    }
    let expected = PositionGroup::ALL.len();
    let shares: Decimal = cfg.group_wage_shares.iter().copied().sum();
    if cfg.group_wage_shares.len() != expected
        || shares != Decimal::ONE
        || cfg.group_wage_shares.iter().any(|s| *s < Decimal::ZERO)
    {
        return Err(ValidationError::WageShares { expected });
    }
    validate_match_engine(&cfg.match_engine, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = LeagueConfig::default();
        validate_config(&cfg).unwrap();
        assert_eq!(cfg.clubs_per_country(), 100);
        assert_eq!(cfg.total_clubs(), 400);
        assert_eq!(cfg.goalkeepers(), 4);
        assert_eq!(cfg.home_games(), 19);
    }

    #[test]
    fn odd_league_rejected() {
        let cfg = LeagueConfig {
            clubs_per_league: 19,
            ..LeagueConfig::default()
        };
        assert_eq!(validate_config(&cfg), Err(ValidationError::OddClubCount(19)));
    }

    #[test]
    fn collapsing_range_rejected() {
        let mut cfg = LeagueConfig::default();
        // [2, 9] scaled by 0.1 floors to [0, 0]
        cfg.club_ranges.ticket_price = AttributeRange::new(2, 9, 1);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::CollapsedRange {
                name: "ticket_price",
                level: 4
            })
        );
    }

    #[test]
    fn unscaled_range_ignores_multipliers() {
        let mut cfg = LeagueConfig::default();
        cfg.club_ranges.ticket_price = AttributeRange::unscaled(2, 9, 3);
        validate_config(&cfg).unwrap();
    }

    #[test]
    fn stalled_cycles_rejected() {
        let mut cfg = LeagueConfig::default();
        // 5 years * 2 / 25 players floors to a zero step
        cfg.player_ranges.contract_years = AttributeRange::unscaled(1, 6, 2);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::DegenerateCycle {
                name: "contract_years",
                level: 0,
                period: 25
            })
        );

        // bottom division [2, 6) over 20 clubs stalls at three sweeps
        let mut cfg = LeagueConfig::default();
        cfg.club_ranges.ticket_price = AttributeRange::new(20, 60, 3);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::DegenerateCycle {
                name: "ticket_price",
                level: 4,
                period: 20
            })
        );

        // bottom division [3, 9) over 25 players
        let mut cfg = LeagueConfig::default();
        cfg.player_ranges.skill = AttributeRange::new(35, 99, 3);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::DegenerateCycle {
                name: "skill",
                level: 4,
                period: 25
            })
        );
    }

    #[test]
    fn stalled_off_focus_skills_rejected() {
        let mut cfg = LeagueConfig::default();
        // full bottom range [3, 9) steps by 1, its lower half [3, 6) by 0
        cfg.player_ranges.skill = AttributeRange::new(35, 99, 5);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::DegenerateCycle {
                name: "skill (off-focus)",
                level: 4,
                period: 25
            })
        );
    }

    #[test]
    fn period_depends_on_league_size() {
        let mut cfg = LeagueConfig::default();
        // 30 * 4 / 20 steps by 6, but 4 clubs step by a whole range length
        cfg.club_ranges.wage_ratio_pct = AttributeRange::unscaled(45, 75, 4);
        validate_config(&cfg).unwrap();
        cfg.clubs_per_league = 4;
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::DegenerateCycle {
                name: "wage_ratio_pct",
                level: 0,
                period: 4
            })
        );
    }

    #[test]
    fn oversized_bench_rejected() {
        let mut cfg = LeagueConfig::default();
        cfg.match_engine.bench_size = 14;
        validate_config(&cfg).unwrap();
        cfg.match_engine.bench_size = u32::MAX;
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::BenchSize {
                bench: u32::MAX,
                available: 14
            })
        );
    }

    #[test]
    fn increasing_multipliers_rejected() {
        let mut cfg = LeagueConfig::default();
        cfg.division_multipliers = vec![Decimal::new(5, 1), Decimal::ONE];
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::MultipliersIncreasing)
        );
        cfg.division_multipliers = vec![Decimal::new(15, 1)];
        assert!(matches!(
            validate_config(&cfg),
            Err(ValidationError::MultiplierOutOfRange(_))
        ));
    }

    #[test]
    fn squad_shape_rejected() {
        // 3 * 7 + 7 leaves a goalkeeper group as large as an outfield group
        let cfg = LeagueConfig {
            squad_size: 28,
            ..LeagueConfig::default()
        };
        assert!(matches!(
            validate_config(&cfg),
            Err(ValidationError::SquadShape { .. })
        ));
    }

    #[test]
    fn wage_shares_must_sum_to_one() {
        let mut cfg = LeagueConfig::default();
        cfg.group_wage_shares[0] = Decimal::new(31, 2);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::WageShares { expected: 4 })
        );
    }

    #[test]
    fn degenerate_match_engine_rejected() {
        let mut cfg = LeagueConfig::default();
        cfg.match_engine.copula_theta = 0.0;
        assert_eq!(validate_config(&cfg), Err(ValidationError::DegenerateCopula));
        cfg.match_engine.copula_theta = 0.6;
        cfg.match_engine.weibull_shape = f64::NAN;
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::NonPositiveParameter("weibull_shape"))
        );
        cfg.match_engine.weibull_shape = 1.4;
        cfg.match_engine.formation.goalkeepers = 2;
        assert_eq!(validate_config(&cfg), Err(ValidationError::GoalkeeperCount(2)));
    }

    #[test]
    fn yaml_overrides_merge_with_defaults() {
        let text = "countries: 2\nclubs_per_league: 4\nmatch_engine:\n  copula_theta: -1.5\n";
        let cfg = LeagueConfig::from_yaml_str(text).unwrap();
        assert_eq!(cfg.countries, 2);
        assert_eq!(cfg.clubs_per_league, 4);
        assert_eq!(cfg.match_engine.copula_theta, -1.5);
        assert_eq!(cfg.match_engine.match_length, 90);
        assert_eq!(cfg.squad_size, 25);
        validate_config(&cfg).unwrap();
    }

    #[test]
    fn shipped_yaml_matches_defaults() {
        let text = include_str!("../../../assets/config/default.yaml");
        let cfg = LeagueConfig::from_yaml_str(text).unwrap();
        assert_eq!(cfg, LeagueConfig::default());
    }

    #[test]
    fn config_json_roundtrip() {
        let cfg = LeagueConfig::default();
        let s = serde_json::to_string(&cfg).unwrap();
        let back: LeagueConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(back, cfg);
    }
}
