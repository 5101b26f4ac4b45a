//! B-spline shape functions via the Cox–de Boor recursion.
//!
//! A [`BasisSession`] owns a validated [`BasisConfig`] and everything derived
//! from it: the clamped [`KnotVector`], the parameter samples, the
//! [`BasisTable`] of shape functions for every order, and the sampled
//! [`Curve`].
//!
//! ```
//! use shapefn_basis::{BasisConfig, BasisSession};
//!
//! let config = BasisConfig::from_coordinate_rows(
//!     2,
//!     1001,
//!     &[1.0, 3.0, 5.0, 9.0],
//!     &[2.0, 4.0, 1.0, 5.0],
//! )?;
//! let mut session = BasisSession::new(config)?;
//! assert_eq!(session.knots().as_slice(), &[0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0]);
//!
//! let influence = session.influence_at(1.0)?;
//! assert!((influence.total() - 1.0).abs() < 1e-9);
//! # Ok::<(), shapefn_basis::ShapeFnError>(())
//! ```

pub mod basis;
pub mod config;
pub mod curve;
pub mod influence;
pub mod knot;
pub mod plot;
pub mod sampler;
pub mod session;

pub use basis::{BasisLevel, BasisTable, Recurrence};
pub use config::{BasisConfig, Constants};
pub use curve::Curve;
pub use influence::Influence;
pub use knot::KnotVector;
pub use plot::{CurvePlot, ShapeFunctionPlot};
pub use session::BasisSession;

pub use shapefn_core::{Result, ShapeFnError, Tolerance};
