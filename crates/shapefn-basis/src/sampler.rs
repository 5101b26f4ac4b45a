//! Parameter and plotting grids.

use shapefn_math::linspace;

use crate::config::Constants;
use crate::knot::KnotVector;

/// `sample_count` parameter values spanning `[0, (n + 1) - (k - 1)]`.
pub fn parameter_samples(consts: &Constants, sample_count: usize) -> Vec<f64> {
    linspace(0.0, consts.domain_end(), sample_count)
}

/// `sample_count` horizontal plot positions spanning `[0, t[m - 1]]`.
pub fn x_grid(knots: &KnotVector, sample_count: usize) -> Vec<f64> {
    linspace(0.0, knots.last(), sample_count)
}
