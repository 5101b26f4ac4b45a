//! Clamped (open) knot vectors.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::Constants;

/// A non-decreasing, clamped knot sequence of length `m = n + 1 + k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnotVector {
    knots: Vec<f64>,
}

impl KnotVector {
    /// Build the clamped knot vector for `n` and `k`, starting at zero.
    pub fn clamped(n: usize, k: usize) -> Self {
        Self::clamped_from(n, k, 0.0)
    }

    /// Build the clamped knot vector for `n` and `k` whose first `k` entries
    /// equal `start`.
    ///
    /// Entry `i` is:
    /// * `start` when `i < k`
    /// * `i - k + 1` when `k <= i <= n`
    /// * `n - k + 2` otherwise
    ///
    /// The ramp is inclusive at both ends, so index `k` always takes the ramp
    /// value `1` whenever `k <= n`.
    ///
    /// `start` must not exceed the first ramp value (`1`, or the end value when
    /// the ramp is empty); larger values break monotonicity and are caught by a
    /// debug assertion.
    pub fn clamped_from(n: usize, k: usize, start: f64) -> Self {
        let m = n + 1 + k;
        let end = (n + 2).saturating_sub(k) as f64;
        let knots = (0..m)
            .map(|i| {
                if i < k {
                    start
                } else if i <= n {
                    (i + 1 - k) as f64
                } else {
                    end
                }
            })
            .collect();
        let knots = Self { knots };
        debug_assert!(
            knots.is_non_decreasing(),
            "knot start {start} exceeds the following knots: {:?}",
            knots.as_slice()
        );
        knots
    }

    pub fn from_constants(consts: &Constants) -> Self {
        Self::clamped(consts.n, consts.k)
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.knots
    }

    pub fn last(&self) -> f64 {
        self.knots.last().copied().unwrap_or(0.0)
    }

    pub fn is_non_decreasing(&self) -> bool {
        self.knots.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Index<usize> for KnotVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.knots[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_knots() {
        // 4 control points, degree 2
        let t = KnotVector::clamped(3, 3);
        assert_eq!(t.as_slice(), &[0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_ramp_starts_at_index_k() {
        let t = KnotVector::clamped(5, 3);
        assert_eq!(t.as_slice(), &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0, 4.0]);
        assert_eq!(t[3], 1.0);
    }

    #[test]
    fn test_ramp_single_entry_when_k_equals_n() {
        // 3 control points, degree 1: index k == n is both ramp start and end
        let t = KnotVector::clamped(2, 2);
        assert_eq!(t.as_slice(), &[0.0, 0.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_linear_two_points() {
        let t = KnotVector::clamped(1, 1);
        assert_eq!(t.as_slice(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_custom_start_only_moves_flat_region() {
        let t = KnotVector::clamped_from(3, 3, -1.0);
        assert_eq!(t.as_slice(), &[-1.0, -1.0, -1.0, 1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_start_at_ramp_value_is_accepted() {
        let t = KnotVector::clamped_from(3, 3, 1.0);
        assert_eq!(t.as_slice(), &[1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
        assert!(t.is_non_decreasing());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "knot start 5 exceeds")]
    fn test_start_above_ramp_panics_in_debug() {
        KnotVector::clamped_from(3, 3, 5.0);
    }

    #[test]
    fn test_length_and_monotonicity() {
        for num_points in 2..12 {
            for p in 0..=num_points - 2 {
                let consts = Constants::new(num_points, p);
                let t = KnotVector::from_constants(&consts);
                assert_eq!(t.len(), consts.m);
                assert_eq!(t.len(), consts.n + 1 + consts.k);
                assert!(t.is_non_decreasing(), "knots {:?}", t.as_slice());
                assert_eq!(t[0], 0.0);
                assert_eq!(t.last(), consts.domain_end());
            }
        }
    }
}
