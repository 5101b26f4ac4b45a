//! Evaluation context owning a configuration and everything derived from it.

use log::info;
use shapefn_core::{Result, ShapeFnError, Validate};
use shapefn_math::Point2;

use crate::basis::{BasisLevel, BasisTable};
use crate::config::{BasisConfig, Constants};
use crate::curve::Curve;
use crate::influence::Influence;
use crate::knot::KnotVector;
use crate::plot::{CurvePlot, ShapeFunctionPlot};
use crate::sampler::{parameter_samples, x_grid};

/// A configured B-spline together with its knots, sample grids, shape
/// functions and curve.
///
/// Reconfiguring rebuilds the knots and grids and drops the computed shape
/// functions and curve. Shape functions and the curve are computed on demand.
#[derive(Debug, Clone)]
pub struct BasisSession {
    config: BasisConfig,
    consts: Constants,
    knots: KnotVector,
    parameters: Vec<f64>,
    x_grid: Vec<f64>,
    table: BasisTable,
    curve: Option<Curve>,
}

impl BasisSession {
    /// Validate `config` and build the derived knot vector and sample grids.
    pub fn new(config: BasisConfig) -> Result<Self> {
        config.validate()?;

        let consts = config.constants();
        let knots = KnotVector::from_constants(&consts);
        let parameters = parameter_samples(&consts, config.sample_count);
        let x_grid = x_grid(&knots, config.sample_count);

        info!("{consts}");
        info!("knot vector: {:?}", knots.as_slice());

        Ok(Self {
            config,
            consts,
            knots,
            parameters,
            x_grid,
            table: BasisTable::new(),
            curve: None,
        })
    }

    /// Replace the configuration.
    ///
    /// On error the session keeps its previous configuration and derived
    /// state untouched.
    pub fn configure(
        &mut self,
        polynomial_order: usize,
        sample_count: usize,
        control_points: Vec<Point2>,
    ) -> Result<Constants> {
        self.reconfigure(BasisConfig {
            polynomial_order,
            sample_count,
            control_points,
        })
    }

    /// Replace only the given fields; omitted ones keep their current value.
    ///
    /// On error the session is left untouched, as with [`Self::configure`].
    pub fn update(
        &mut self,
        polynomial_order: Option<usize>,
        sample_count: Option<usize>,
        control_points: Option<Vec<Point2>>,
    ) -> Result<Constants> {
        let config = self
            .config
            .merged(polynomial_order, sample_count, control_points);
        self.reconfigure(config)
    }

    pub fn reconfigure(&mut self, config: BasisConfig) -> Result<Constants> {
        *self = Self::new(config)?;
        Ok(self.consts)
    }

    /// Compute every shape function up to order `k`.
    pub fn compute_basis(&mut self) -> &BasisTable {
        self.fill_to(self.consts.k);
        &self.table
    }

    /// Compute every shape function up to `order`, which must lie in `1..=k`.
    pub fn compute_basis_to(&mut self, order: usize) -> Result<&BasisTable> {
        self.check_order(order)?;
        self.fill_to(order);
        Ok(&self.table)
    }

    /// The curve sampled at every parameter value, computing the top-order
    /// shape functions first when they are missing.
    pub fn compute_curve(&mut self) -> &Curve {
        self.curve_with_points().0
    }

    /// Each control point's top-order shape function value at the first
    /// parameter sample `>= value`.
    pub fn influence_at(&mut self, value: f64) -> Result<Influence> {
        self.ensure_top_order();
        Influence::lookup(&self.parameters, self.top_order(), value)
    }

    /// Shape functions of `order` (default `k`) over the x grid.
    pub fn shape_function_plot(&mut self, order: Option<usize>) -> Result<ShapeFunctionPlot> {
        let order = order.unwrap_or(self.consts.k);
        self.check_order(order)?;
        if self.table.max_order() < order {
            self.fill_to(order);
        }
        let level = &self.table.levels()[order - 1];
        Ok(ShapeFunctionPlot::new(&self.x_grid, level))
    }

    pub fn curve_plot(&mut self) -> CurvePlot {
        let (curve, points) = self.curve_with_points();
        CurvePlot::new(curve, points)
    }

    pub fn config(&self) -> &BasisConfig {
        &self.config
    }

    pub fn constants(&self) -> Constants {
        self.consts
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    pub fn x_grid(&self) -> &[f64] {
        &self.x_grid
    }

    pub fn basis(&self) -> &BasisTable {
        &self.table
    }

    /// Rows of `order`, if computed.
    pub fn basis_rows(&self, order: usize) -> Option<&[Vec<f64>]> {
        self.table.rows(order)
    }

    /// The curve, if computed.
    pub fn curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }

    fn check_order(&self, order: usize) -> Result<()> {
        if order == 0 || order > self.consts.k {
            return Err(ShapeFnError::configuration(format!(
                "shape function order must lie in 1..={}, got {order}",
                self.consts.k
            )));
        }
        Ok(())
    }

    fn fill_to(&mut self, order: usize) {
        let fresh = BasisTable::compute(
            &self.knots,
            &self.parameters,
            self.consts.first_order_count(),
            order,
        );
        self.table.overwrite(fresh);
    }

    fn ensure_top_order(&mut self) {
        if self.table.max_order() < self.consts.k {
            self.fill_to(self.consts.k);
        }
    }

    fn curve_with_points(&mut self) -> (&Curve, &[Point2]) {
        self.ensure_top_order();
        let k = self.consts.k;
        let table = &self.table;
        let points: &[Point2] = &self.config.control_points;
        let curve: &Curve = self
            .curve
            .get_or_insert_with(|| Curve::evaluate(points, &table.levels()[k - 1]));
        (curve, points)
    }

    fn top_order(&self) -> &BasisLevel {
        &self.table.levels()[self.consts.k - 1]
    }
}
