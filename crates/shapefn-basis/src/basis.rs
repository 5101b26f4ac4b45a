//! Cox–de Boor evaluation of B-spline shape functions over a parameter grid.
//!
//! Shape functions are built level by level. Level `ord` holds the functions
//! `N_{i,ord}` for every active index `i`, each sampled at every parameter
//! value. A level only reads the level below it, so rows inside a level are
//! independent and are evaluated in parallel while levels run in sequence.

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shapefn_math::DMatrix;

use crate::knot::KnotVector;

/// Threshold the second-to-last sample must exceed for the endpoint fix.
pub const CLEANUP_THRESHOLD: f64 = 0.7;

/// Which terms of the Cox–de Boor recurrence survive for a given pair of
/// denominators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// Both denominators vanish; the function is identically zero.
    Zero,
    /// Only the left denominator vanishes; keep the right term.
    RightOnly,
    /// Only the right denominator vanishes; keep the left term.
    LeftOnly,
    /// Sum both terms.
    Both,
}

impl Recurrence {
    /// Classify the denominators `t[i+ord-1] - t[i]` and `t[i+ord] - t[i+1]`.
    pub fn classify(left_den: f64, right_den: f64) -> Self {
        match (left_den == 0.0, right_den == 0.0) {
            (true, true) => Self::Zero,
            (true, false) => Self::RightOnly,
            (false, true) => Self::LeftOnly,
            (false, false) => Self::Both,
        }
    }
}

/// Force the last sample to `1.0` when the row ends with a value above
/// [`CLEANUP_THRESHOLD`] followed by an exact zero.
///
/// The order-1 functions are half-open on the right, so the function owning
/// the last non-empty span drops to zero exactly at the closing domain value.
/// Returns whether the row was changed.
pub fn apply_boundary_cleanup(row: &mut [f64]) -> bool {
    let s = row.len();
    if s >= 2 && row[s - 2] > CLEANUP_THRESHOLD && row[s - 1] == 0.0 {
        row[s - 1] = 1.0;
        true
    } else {
        false
    }
}

/// All shape functions of a single order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisLevel {
    pub order: usize,
    /// `rows[i][j]` is `N_{i,order}` at parameter sample `j`.
    pub rows: Vec<Vec<f64>>,
}

impl BasisLevel {
    /// Order-1 step functions: `1` on `[t[i], t[i+1])`, else `0`.
    pub fn first_order(knots: &KnotVector, params: &[f64], active: usize) -> Self {
        let rows = (0..active)
            .into_par_iter()
            .map(|i| {
                let (lo, hi) = (knots[i], knots[i + 1]);
                let mut row: Vec<f64> = params
                    .iter()
                    .map(|&u| if lo <= u && u < hi { 1.0 } else { 0.0 })
                    .collect();
                if apply_boundary_cleanup(&mut row) {
                    trace!("boundary cleanup on N_{{{i},1}}");
                }
                row
            })
            .collect();
        Self { order: 1, rows }
    }

    /// The level above `prev`, with `active` functions.
    ///
    /// `prev` must hold at least `active + 1` rows.
    pub fn next_order(prev: &BasisLevel, knots: &KnotVector, params: &[f64], active: usize) -> Self {
        let ord = prev.order + 1;
        let rows = (0..active)
            .into_par_iter()
            .map(|i| {
                let mut row = recurrence_row(knots, params, &prev.rows[i], &prev.rows[i + 1], i, ord);
                if apply_boundary_cleanup(&mut row) {
                    trace!("boundary cleanup on N_{{{i},{ord}}}");
                }
                row
            })
            .collect();
        Self { order: ord, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum over every active function at sample `j`.
    pub fn column_sum(&self, j: usize) -> f64 {
        self.rows.iter().map(|row| row[j]).sum()
    }

    /// Stack the rows into an `active × samples` matrix.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        let ncols = self.rows.first().map_or(0, Vec::len);
        DMatrix::from_fn(self.rows.len(), ncols, |r, c| self.rows[r][c])
    }
}

fn recurrence_row(
    knots: &KnotVector,
    params: &[f64],
    lower: &[f64],
    lower_next: &[f64],
    i: usize,
    ord: usize,
) -> Vec<f64> {
    let left_den = knots[i + ord - 1] - knots[i];
    let right_den = knots[i + ord] - knots[i + 1];
    let (ti, tio) = (knots[i], knots[i + ord]);

    let left = |j: usize, u: f64| (u - ti) * lower[j] / left_den;
    let right = |j: usize, u: f64| (tio - u) * lower_next[j] / right_den;

    match Recurrence::classify(left_den, right_den) {
        Recurrence::Zero => vec![0.0; params.len()],
        Recurrence::RightOnly => params.iter().enumerate().map(|(j, &u)| right(j, u)).collect(),
        Recurrence::LeftOnly => params.iter().enumerate().map(|(j, &u)| left(j, u)).collect(),
        Recurrence::Both => params
            .iter()
            .enumerate()
            .map(|(j, &u)| left(j, u) + right(j, u))
            .collect(),
    }
}

/// Evaluate every level from order 1 through `max_order`.
///
/// `first_count` is the number of order-1 functions; each following level has
/// one fewer.
pub fn compute_levels(
    knots: &KnotVector,
    params: &[f64],
    first_count: usize,
    max_order: usize,
) -> Vec<BasisLevel> {
    let mut levels: Vec<BasisLevel> = Vec::with_capacity(max_order);
    let mut active = first_count;

    for ord in 1..=max_order {
        let level = match levels.last() {
            None => BasisLevel::first_order(knots, params, active),
            Some(prev) => BasisLevel::next_order(prev, knots, params, active),
        };
        debug!("computed {} shape functions of order {}", level.len(), ord);
        levels.push(level);
        active = active.saturating_sub(1);
    }

    levels
}

/// Shape functions of every computed order, lowest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasisTable {
    levels: Vec<BasisLevel>,
}

impl BasisTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute(knots: &KnotVector, params: &[f64], first_count: usize, max_order: usize) -> Self {
        Self {
            levels: compute_levels(knots, params, first_count, max_order),
        }
    }

    /// Highest order present, or `0` for an empty table.
    pub fn max_order(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[BasisLevel] {
        &self.levels
    }

    pub fn level(&self, ord: usize) -> Option<&BasisLevel> {
        ord.checked_sub(1).and_then(|idx| self.levels.get(idx))
    }

    pub fn rows(&self, ord: usize) -> Option<&[Vec<f64>]> {
        self.level(ord).map(|level| level.rows.as_slice())
    }

    /// `N_{i,ord}` at parameter sample `j`.
    pub fn value(&self, i: usize, ord: usize, j: usize) -> Option<f64> {
        self.level(ord)?.rows.get(i)?.get(j).copied()
    }

    /// Replace the levels `fresh` covers and keep any higher ones.
    pub fn overwrite(&mut self, fresh: BasisTable) {
        let mut fresh = fresh.levels.into_iter();
        for slot in self.levels.iter_mut() {
            match fresh.next() {
                Some(level) => *slot = level,
                None => return,
            }
        }
        self.levels.extend(fresh);
    }
}
