//! Scoreline model: intensities, Weibull goal margins, a Frank copula
//! joint table, and weighted sampling over it.

use crate::strength::Strength;
use crate::MatchError;
use league_core::MatchEngineConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Goals scored by each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreline {
    pub home: u32,
    pub away: u32,
}

/// Scoring intensities `(home, away)`.
///
/// Each is `exp(-exp(U + home_effect * is_home + attack + opponent_defense))`
/// where attack and defense are shares of the four ratings combined.
pub fn scoring_intensities(home: Strength, away: Strength, cfg: &MatchEngineConfig) -> (f64, f64) {
    let total = home.attack + home.defense + away.attack + away.defense;
    let share = |v: f64| if total > 0.0 { v / total } else { 0.0 };
    let intensity = |x: f64| (-x.exp()).exp();
    let home_x = cfg.baseline + cfg.home_effect + share(home.attack) + share(away.defense);
    let away_x = cfg.baseline + share(away.attack) + share(home.defense);
    (intensity(home_x), intensity(away_x))
}

/// Weibull CDF with unit scale: `1 - exp(-x^shape)`.
pub fn weibull_cdf(x: f64, shape: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    -(-x.powf(shape)).exp_m1()
}

/// `P(goals <= g)` for `g` in `0..=max_goals`.
pub fn goal_margins(intensity: f64, shape: f64, max_goals: u32) -> Vec<f64> {
    (0..=max_goals)
        .map(|g| weibull_cdf(f64::from(g + 1) * intensity, shape))
        .collect()
}

/// Frank copula `C(u, v)` with dependence `theta != 0`.
pub fn frank_copula(u: f64, v: f64, theta: f64) -> f64 {
    if u <= 0.0 || v <= 0.0 {
        return 0.0;
    }
    let num = (-theta * u).exp_m1() * (-theta * v).exp_m1();
    let den = (-theta).exp_m1();
    -(num / den).ln_1p() / theta
}

/// Joint probabilities over the `(max_goals + 1)²` scoreline grid, row-major by home goals.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreTable {
    side: usize,
    cells: Vec<f64>,
}

impl ScoreTable {
    /// Combine two margins with the copula. Margins must have equal length.
    pub fn build(home_cdf: &[f64], away_cdf: &[f64], theta: f64) -> Self {
        let side = home_cdf.len().min(away_cdf.len());
        let cdf = |m: &[f64], g: usize| if g == 0 { 0.0 } else { m[g - 1] };
        let mut cells = Vec::with_capacity(side * side);
        for h in 0..side {
            for a in 0..side {
                let (hu, hl) = (home_cdf[h], cdf(home_cdf, h));
                let (au, al) = (away_cdf[a], cdf(away_cdf, a));
                let p = frank_copula(hu, au, theta) - frank_copula(hl, au, theta)
                    - frank_copula(hu, al, theta)
                    + frank_copula(hl, al, theta);
                // rounding can push an empty cell a hair below zero
                cells.push(p.max(0.0));
            }
        }
        Self { side, cells }
    }

    /// Table for two strengths under `cfg`.
    pub fn for_match(home: Strength, away: Strength, cfg: &MatchEngineConfig) -> Self {
        let (hi, ai) = scoring_intensities(home, away, cfg);
        let home_cdf = goal_margins(hi, cfg.weibull_shape, cfg.max_goals);
        let away_cdf = goal_margins(ai, cfg.weibull_shape, cfg.max_goals);
        Self::build(&home_cdf, &away_cdf, cfg.copula_theta)
    }

    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Unnormalized weight of a scoreline; zero outside the grid.
    pub fn probability(&self, home: u32, away: u32) -> f64 {
        let (h, a) = (home as usize, away as usize);
        if h >= self.side || a >= self.side {
            return 0.0;
        }
        self.cells[h * self.side + a]
    }

    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    fn scoreline(&self, index: usize) -> Scoreline {
        Scoreline {
            home: (index / self.side) as u32,
            away: (index % self.side) as u32,
        }
    }
}

/// Draw a scoreline in proportion to the table's weights.
///
/// A uniform value scaled to the running-sum maximum selects the first
/// non-empty bucket whose cumulative weight reaches it.
pub fn sample_scoreline<R: Rng + ?Sized>(
    table: &ScoreTable,
    rng: &mut R,
) -> Result<Scoreline, MatchError> {
    let total = table.total();
    if !(total.is_finite() && total > 0.0) {
        return Err(MatchError::EmptyProbabilityTable);
    }
    let target = rng.gen::<f64>() * total;
    let mut running = 0.0;
    for (i, w) in table.cells().iter().enumerate() {
        running += w;
        if *w > 0.0 && running >= target {
            return Ok(table.scoreline(i));
        }
    }
    Err(MatchError::EmptyProbabilityTable)
}
