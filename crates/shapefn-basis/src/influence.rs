//! Per-control-point influence at a parameter value.

use std::fmt;

use serde::Serialize;
use shapefn_core::{Result, ShapeFnError, Tolerance};

use crate::basis::BasisLevel;

/// Index of the first sample that is `>= value`, scanning from the start.
///
/// `None` when every sample is below `value` or `value` is NaN.
pub fn find_first_at_or_above(samples: &[f64], value: f64) -> Option<usize> {
    samples.iter().position(|&u| u >= value)
}

/// Top-order shape function values of every control point at one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Influence {
    /// The parameter value that was asked for.
    pub requested: f64,
    /// Index of the sample the lookup resolved to.
    pub index: usize,
    /// Parameter value at `index`.
    pub parameter: f64,
    /// `weights[i]` is `N_{i,k}` at `index`.
    pub weights: Vec<f64>,
}

impl Influence {
    /// Resolve `value` against `params` and read every row of `top` there.
    pub fn lookup(params: &[f64], top: &BasisLevel, value: f64) -> Result<Self> {
        let index = find_first_at_or_above(params, value).ok_or_else(|| {
            ShapeFnError::lookup(format!(
                "u = {value} lies outside the sampled domain [{}, {}]",
                params.first().copied().unwrap_or(0.0),
                params.last().copied().unwrap_or(0.0)
            ))
        })?;
        let weights = top.rows.iter().map(|row| row[index]).collect();
        Ok(Self {
            requested: value,
            index,
            parameter: params[index],
            weights,
        })
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn is_partition_of_unity(&self, tol: Tolerance) -> bool {
        tol.approx_eq(self.total(), 1.0)
    }
}

impl fmt::Display for Influence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Influence of the points on the curve at u = {:.4}:",
            self.requested
        )?;
        for (i, w) in self.weights.iter().enumerate() {
            writeln!(f, "P{i}: {w:.4}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> BasisLevel {
        BasisLevel {
            order: 2,
            rows: vec![
                vec![1.0, 0.5, 0.0, 0.0, 0.0],
                vec![0.0, 0.5, 1.0, 0.5, 0.0],
                vec![0.0, 0.0, 0.0, 0.5, 1.0],
            ],
        }
    }

    const PARAMS: [f64; 5] = [0.0, 0.5, 1.0, 1.5, 2.0];

    #[test]
    fn test_find_first() {
        assert_eq!(find_first_at_or_above(&PARAMS, -3.0), Some(0));
        assert_eq!(find_first_at_or_above(&PARAMS, 1.0), Some(2));
        assert_eq!(find_first_at_or_above(&PARAMS, 1.2), Some(3));
        assert_eq!(find_first_at_or_above(&PARAMS, 2.0), Some(4));
        assert_eq!(find_first_at_or_above(&PARAMS, 2.01), None);
        assert_eq!(find_first_at_or_above(&PARAMS, f64::NAN), None);
    }

    #[test]
    fn test_lookup_reads_column() {
        let inf = Influence::lookup(&PARAMS, &level(), 0.7).unwrap();
        assert_eq!(inf.index, 2);
        assert_eq!(inf.parameter, 1.0);
        assert_eq!(inf.weights, vec![0.0, 1.0, 0.0]);
        assert_eq!(inf.total(), 1.0);
        assert!(inf.is_partition_of_unity(Tolerance::default()));
    }

    #[test]
    fn test_lookup_outside_domain() {
        let err = Influence::lookup(&PARAMS, &level(), 2.5).unwrap_err();
        assert!(err.is_lookup());
        assert!(err.to_string().contains("[0, 2]"));
    }

    #[test]
    fn test_display() {
        let inf = Influence::lookup(&PARAMS, &level(), 0.5).unwrap();
        assert_eq!(
            inf.to_string(),
            "Influence of the points on the curve at u = 0.5000:\nP0: 0.5000\nP1: 0.5000\nP2: 0.0000\n"
        );
    }
}
