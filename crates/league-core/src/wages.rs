//! Wage curve built on generalized pentagonal numbers.
//!
//! A position group's wage allotment is split in proportion to the terms
//! 7, 12, 15, 22, 26, 35, 40, ... of the generalized pentagonal sequence.
//! The largest weight goes to rank 0, so the curve falls with rank and the
//! shares of a group always add up to one.

use rust_decimal::Decimal;

/// Index of the term 7 in 0, 1, 2, 5, 7, 12, ...; the curve starts there.
pub const WAGE_CURVE_OFFSET: u64 = 4;

/// `k`-th generalized pentagonal number: 0, 1, 2, 5, 7, 12, 15, 22, 26, 35, 40, ...
///
/// These are `m(3m - 1) / 2` for `m = 0, 1, -1, 2, -2, ...`.
pub const fn generalized_pentagonal(k: u64) -> u64 {
    let m = (k + 1) / 2;
    if k % 2 == 1 {
        m * (3 * m - 1) / 2
    } else {
        m * (3 * m + 1) / 2
    }
}

/// Unnormalized weight of the `i`-th curve term.
pub const fn curve_weight(i: u64) -> u64 {
    generalized_pentagonal(i + WAGE_CURVE_OFFSET)
}

/// Share of a group's allotment for `rank` in a group of `group_size`, computed without a table.
///
/// # Panics
/// When `rank >= group_size`.
pub fn wage_share(rank: u32, group_size: u32) -> f64 {
    assert!(rank < group_size, "rank {rank} outside group of {group_size}");
    let total: u64 = (0..u64::from(group_size)).map(curve_weight).sum();
    curve_weight(u64::from(group_size - 1 - rank)) as f64 / total as f64
}

/// Memoized curve weights and prefix sums for groups up to a fixed size.
///
/// Owned by whoever derives wages; there is no global cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WageCurve {
    weights: Vec<u64>,
    /// `totals[k]` is the sum of the first `k` weights.
    totals: Vec<u64>,
}

impl WageCurve {
    /// Precompute weights for groups of at most `max_group` players.
    pub fn new(max_group: usize) -> Self {
        let weights: Vec<u64> = (0..max_group as u64).map(curve_weight).collect();
        let mut totals = Vec::with_capacity(max_group + 1);
        totals.push(0);
        let mut acc = 0u64;
        for w in &weights {
            acc += w;
            totals.push(acc);
        }
        Self { weights, totals }
    }

    /// Largest group this table covers.
    pub fn capacity(&self) -> usize {
        self.weights.len()
    }

    /// Weight assigned to `rank` in a group of `group_size`; `None` out of range.
    pub fn weight(&self, rank: u32, group_size: u32) -> Option<u64> {
        if rank >= group_size || group_size as usize > self.capacity() {
            return None;
        }
        self.weights.get((group_size - 1 - rank) as usize).copied()
    }

    /// Sum of all weights of a group of `group_size`.
    pub fn total(&self, group_size: u32) -> Option<u64> {
        self.totals.get(group_size as usize).copied()
    }

    /// Fractional share of `rank` in a group of `group_size`.
    pub fn share(&self, rank: u32, group_size: u32) -> Option<f64> {
        let w = self.weight(rank, group_size)?;
        let total = self.total(group_size)?;
        Some(w as f64 / total as f64)
    }

    /// Exact share of `rank` as a decimal, for money arithmetic.
    pub fn share_decimal(&self, rank: u32, group_size: u32) -> Option<Decimal> {
        let w = self.weight(rank, group_size)?;
        let total = self.total(group_size)?;
        Some(Decimal::from(w) / Decimal::from(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sequence_matches_known_terms() {
        let terms: Vec<u64> = (0..11).map(generalized_pentagonal).collect();
        assert_eq!(terms, vec![0, 1, 2, 5, 7, 12, 15, 22, 26, 35, 40]);
        let curve: Vec<u64> = (0..7).map(curve_weight).collect();
        assert_eq!(curve, vec![7, 12, 15, 22, 26, 35, 40]);
    }

    #[test]
    fn top_rank_takes_largest_share() {
        let curve = WageCurve::new(7);
        assert_eq!(curve.weight(0, 7), Some(40));
        assert_eq!(curve.weight(6, 7), Some(7));
        assert_eq!(curve.total(7), Some(157));
        assert_eq!(curve.weight(7, 7), None);
        assert_eq!(curve.share(0, 8), None);
    }

    #[test]
    fn decimal_shares_sum_exactly_for_goalkeepers() {
        let curve = WageCurve::new(7);
        let sum: Decimal = (0..4).filter_map(|r| curve.share_decimal(r, 4)).sum();
        assert!((sum - Decimal::ONE).abs() < Decimal::new(1, 20));
    }

    proptest! {
        #[test]
        fn shares_sum_to_one(k in 1u32..40) {
            let curve = WageCurve::new(40);
            let sum: f64 = (0..k).filter_map(|r| curve.share(r, k)).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
            let direct: f64 = (0..k).map(|r| wage_share(r, k)).sum();
            prop_assert!((direct - 1.0).abs() < 1e-9);
        }

        #[test]
        fn shares_fall_with_rank(k in 2u32..40) {
            let curve = WageCurve::new(40);
            for r in 1..k {
                prop_assert!(curve.share(r - 1, k) > curve.share(r, k));
            }
        }
    }
}
