//! Sampled B-spline curves.

use shapefn_math::{dvec2, Matrix2xX, Point2};

use crate::basis::BasisLevel;

/// A B-spline curve sampled at every parameter value, stored as a `2 × S`
/// matrix with the x coordinates in row 0 and the y coordinates in row 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    samples: Matrix2xX<f64>,
}

impl Curve {
    /// Multiply the `2 × nPts` control matrix with the stacked top-order rows.
    ///
    /// `top` must hold one row per control point.
    pub fn evaluate(control_points: &[Point2], top: &BasisLevel) -> Self {
        debug_assert_eq!(
            control_points.len(),
            top.len(),
            "one top-order shape function per control point"
        );
        let control = Matrix2xX::from_fn(control_points.len(), |r, c| {
            let p = control_points[c];
            if r == 0 {
                p.x
            } else {
                p.y
            }
        });
        Self {
            samples: control * top.to_matrix(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.ncols() == 0
    }

    pub fn as_matrix(&self) -> &Matrix2xX<f64> {
        &self.samples
    }

    pub fn point(&self, j: usize) -> Option<Point2> {
        (j < self.len()).then(|| dvec2(self.samples[(0, j)], self.samples[(1, j)]))
    }

    pub fn points(&self) -> Vec<Point2> {
        self.samples
            .column_iter()
            .map(|c| dvec2(c[0], c[1]))
            .collect()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.row(0).iter().copied().collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.row(1).iter().copied().collect()
    }
}
