//! Division-adjusted ranges and the cyclic index-to-value mapping.

use crate::config::AttributeRange;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scale one bound by a division multiplier, flooring to an integer.
pub fn scale_bound(value: u64, multiplier: Decimal) -> u64 {
    (Decimal::from(value) * multiplier)
        .floor()
        .to_u64()
        .unwrap_or(0)
}

/// Multiplier for a division level; levels past the table reuse its last entry.
pub fn multiplier_for(multipliers: &[Decimal], level: u32) -> Decimal {
    let idx = (level as usize).min(multipliers.len().saturating_sub(1));
    multipliers.get(idx).copied().unwrap_or(Decimal::ONE)
}

/// A range after division scaling. Values produced from it lie in `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedRange {
    pub min: u64,
    pub max: u64,
}

impl AdjustedRange {
    pub const fn len(&self) -> u64 {
        self.max - self.min
    }

    pub const fn is_empty(&self) -> bool {
        self.max <= self.min
    }

    /// Whether `value` can be produced by [`AdjustedRange::value_at`].
    pub const fn contains(&self, value: u64) -> bool {
        value >= self.min && value < self.max
    }

    /// Lower half of the range, never shorter than one value.
    pub fn lower_half(&self) -> Self {
        Self {
            min: self.min,
            max: self.min + (self.len() / 2).max(1),
        }
    }

    /// Distance between consecutive indices: `len * cycles / period`.
    pub fn step(&self, cycles: u64, period: u64) -> u64 {
        let wide = u128::from(self.len()) * u128::from(cycles) / u128::from(period.max(1));
        u64::try_from(wide).unwrap_or(u64::MAX)
    }

    /// Whether neighbouring indices map to different values.
    pub fn sweeps(&self, cycles: u64, period: u64) -> bool {
        !self.is_empty() && self.step(cycles, period) % self.len() != 0
    }

    /// Map `index` in `0..period` onto the range, sweeping it `cycles` times.
    pub fn value_at(&self, index: u64, cycles: u64, period: u64) -> u64 {
        let len = self.len();
        if len == 0 {
            return self.min;
        }
        let step = u128::from(self.step(cycles, period));
        let offset = (u128::from(index) * step) % u128::from(len);
        // offset < len, so it fits back into u64
        self.min + offset as u64
    }
}

/// Scale a base range for the given division level.
pub fn adjust_range(range: &AttributeRange, multipliers: &[Decimal], level: u32) -> AdjustedRange {
    if !range.scaled_by_division {
        return AdjustedRange {
            min: range.min,
            max: range.max,
        };
    }
    let m = multiplier_for(multipliers, level);
    AdjustedRange {
        min: scale_bound(range.min, m),
        max: scale_bound(range.max, m),
    }
}
