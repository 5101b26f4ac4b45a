//! Validated inputs for a basis session and the constants derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};
use shapefn_core::{Result, ShapeFnError, Validate};
use shapefn_math::{dvec2, Point2};

/// Polynomial order, sample count and control polygon of a B-spline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisConfig {
    /// Polynomial degree `p` of the curve.
    pub polynomial_order: usize,
    /// Number of parameter samples `S`.
    pub sample_count: usize,
    pub control_points: Vec<Point2>,
}

impl BasisConfig {
    pub const DEFAULT_POLYNOMIAL_ORDER: usize = 2;
    pub const DEFAULT_SAMPLE_COUNT: usize = 1001;

    /// Build and validate a configuration.
    pub fn new(
        polynomial_order: usize,
        sample_count: usize,
        control_points: Vec<Point2>,
    ) -> Result<Self> {
        let config = Self {
            polynomial_order,
            sample_count,
            control_points,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from `[x0, x1, ...]` and `[y0, y1, ...]` rows.
    pub fn from_coordinate_rows(
        polynomial_order: usize,
        sample_count: usize,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(ShapeFnError::configuration(format!(
                "control point rows differ in length: {} x values, {} y values",
                xs.len(),
                ys.len()
            )));
        }
        let points = xs.iter().zip(ys).map(|(&x, &y)| dvec2(x, y)).collect();
        Self::new(polynomial_order, sample_count, points)
    }

    pub fn num_control_points(&self) -> usize {
        self.control_points.len()
    }

    /// A copy of `self` with every given field replaced. The result is not
    /// validated.
    pub fn merged(
        &self,
        polynomial_order: Option<usize>,
        sample_count: Option<usize>,
        control_points: Option<Vec<Point2>>,
    ) -> Self {
        Self {
            polynomial_order: polynomial_order.unwrap_or(self.polynomial_order),
            sample_count: sample_count.unwrap_or(self.sample_count),
            control_points: control_points.unwrap_or_else(|| self.control_points.clone()),
        }
    }

    /// Derived constants. Only meaningful on a validated configuration.
    pub fn constants(&self) -> Constants {
        Constants::new(self.num_control_points(), self.polynomial_order)
    }
}

impl Default for BasisConfig {
    /// Quadratic curve over `(1, 2) (3, 4) (5, 1) (9, 5)` with 1001 samples.
    fn default() -> Self {
        Self {
            polynomial_order: Self::DEFAULT_POLYNOMIAL_ORDER,
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
            control_points: vec![
                dvec2(1.0, 2.0),
                dvec2(3.0, 4.0),
                dvec2(5.0, 1.0),
                dvec2(9.0, 5.0),
            ],
        }
    }
}

impl Validate for BasisConfig {
    fn validate(&self) -> Result<()> {
        let num_points = self.control_points.len();
        if num_points < 2 {
            return Err(ShapeFnError::configuration(format!(
                "at least 2 control points are required, got {num_points}"
            )));
        }
        if self.polynomial_order > num_points - 2 {
            return Err(ShapeFnError::configuration(format!(
                "polynomial order {} exceeds the bound {} (number of control points {} minus 2)",
                self.polynomial_order,
                num_points - 2,
                num_points
            )));
        }
        if self.sample_count < 2 {
            return Err(ShapeFnError::configuration(format!(
                "sample count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if let Some((i, p)) = self
            .control_points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite())
        {
            return Err(ShapeFnError::configuration(format!(
                "control point P{i} is not finite: ({}, {})",
                p.x, p.y
            )));
        }
        Ok(())
    }
}

/// Constants resolved from a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constants {
    /// Index of the last control point.
    pub n: usize,
    /// Order of the shape functions.
    pub k: usize,
    /// Polynomial degree.
    pub p: usize,
    /// Size of the knot vector.
    pub m: usize,
}

impl Constants {
    pub fn new(num_control_points: usize, polynomial_order: usize) -> Self {
        let n = num_control_points.saturating_sub(1);
        let p = polynomial_order;
        let k = p + 1;
        Self { n, k, p, m: n + 1 + k }
    }

    /// Number of order-1 functions; one fewer at each higher order.
    pub fn first_order_count(&self) -> usize {
        self.n + self.k
    }

    /// Upper end of the parameter domain, `(n + 1) - (k - 1)`.
    pub fn domain_end(&self) -> f64 {
        (self.n + 2 - self.k) as f64
    }
}

impl fmt::Display for Constants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "consts: n = {}, k = {}, p = {}, m = {}",
            self.n, self.k, self.p, self.m
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<Point2> {
        (0..n).map(|i| dvec2(i as f64, (i * i) as f64)).collect()
    }

    #[test]
    fn test_reference_constants() {
        let config =
            BasisConfig::from_coordinate_rows(2, 1001, &[1.0, 3.0, 5.0, 9.0], &[2.0, 4.0, 1.0, 5.0])
                .unwrap();
        let c = config.constants();
        assert_eq!(c, Constants { n: 3, k: 3, p: 2, m: 7 });
        assert_eq!(c.to_string(), "consts: n = 3, k = 3, p = 2, m = 7");
        assert_eq!(c.domain_end(), 2.0);
        assert_eq!(c.first_order_count(), 6);
    }

    #[test]
    fn test_order_bound() {
        assert!(BasisConfig::new(2, 10, points(4)).is_ok());
        let err = BasisConfig::new(3, 10, points(4)).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("exceeds the bound 2"));
    }

    #[test]
    fn test_too_few_points() {
        assert!(BasisConfig::new(0, 10, points(1)).is_err());
        assert!(BasisConfig::new(0, 10, points(2)).is_ok());
    }

    #[test]
    fn test_sample_count_bound() {
        assert!(BasisConfig::new(1, 1, points(4)).unwrap_err().is_configuration());
        assert!(BasisConfig::new(1, 2, points(4)).is_ok());
    }

    #[test]
    fn test_mismatched_rows() {
        let err = BasisConfig::from_coordinate_rows(1, 10, &[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("3 x values, 2 y values"));
    }

    #[test]
    fn test_non_finite_point() {
        let mut pts = points(4);
        pts[2].y = f64::NAN;
        let err = BasisConfig::new(1, 10, pts).unwrap_err();
        assert!(err.to_string().contains("P2"));
    }

    #[test]
    fn test_default_is_valid_reference() {
        let config = BasisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.polynomial_order, 2);
        assert_eq!(config.sample_count, 1001);
        let rows = BasisConfig::from_coordinate_rows(2, 1001, &[1.0, 3.0, 5.0, 9.0], &[2.0, 4.0, 1.0, 5.0])
            .unwrap();
        assert_eq!(config, rows);
    }

    #[test]
    fn test_merged_keeps_omitted_fields() {
        let base = BasisConfig::default();

        let order_only = base.merged(Some(1), None, None);
        assert_eq!(order_only.polynomial_order, 1);
        assert_eq!(order_only.sample_count, base.sample_count);
        assert_eq!(order_only.control_points, base.control_points);

        let points_only = base.merged(None, None, Some(points(6)));
        assert_eq!(points_only.polynomial_order, 2);
        assert_eq!(points_only.sample_count, 1001);
        assert_eq!(points_only.control_points, points(6));

        assert_eq!(base.merged(None, None, None), base);
    }

    #[test]
    fn test_json_round_trip() {
        let config = BasisConfig::new(1, 5, points(3)).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: BasisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
