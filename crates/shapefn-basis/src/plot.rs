//! Serializable payloads handed to a plotting front end.

use serde::Serialize;
use shapefn_math::{Aabb2, Point2};

use crate::basis::BasisLevel;
use crate::curve::Curve;

/// Every shape function of one order over the x grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeFunctionPlot {
    pub order: usize,
    pub x: Vec<f64>,
    /// One series per active function, `series[i]` being `N_{i,order}`.
    pub series: Vec<Vec<f64>>,
}

impl ShapeFunctionPlot {
    pub fn new(x_grid: &[f64], level: &BasisLevel) -> Self {
        Self {
            order: level.order,
            x: x_grid.to_vec(),
            series: level.rows.clone(),
        }
    }
}

/// A sampled curve together with its control polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvePlot {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub control_points: Vec<Point2>,
    /// Box around both the curve samples and the control polygon.
    pub bounds: Option<Aabb2>,
}

impl CurvePlot {
    pub fn new(curve: &Curve, control_points: &[Point2]) -> Self {
        let bounds = match (
            Aabb2::from_points(&curve.points()),
            Aabb2::from_points(control_points),
        ) {
            (Some(a), Some(b)) => Some(a.merge(&b)),
            (a, b) => a.or(b),
        };
        Self {
            x: curve.xs(),
            y: curve.ys(),
            control_points: control_points.to_vec(),
            bounds,
        }
    }
}
