//! Quadratic B-spline through four control points.
//!
//! Prints the resolved constants and knot vector (with `RUST_LOG=info`), the
//! influence of every control point at `u = 1.0`, and writes the shape
//! function and curve plot payloads as JSON to stdout.
//!
//! ```bash
//! RUST_LOG=info cargo run -p shapefn-basis --example reference_curve
//! ```

use std::process;

use shapefn_basis::{BasisConfig, BasisSession, Result};

fn run() -> Result<()> {
    let mut session = BasisSession::new(BasisConfig::default())?;

    session.compute_curve();
    println!("{}", session.influence_at(1.0)?);

    let shapes = session.shape_function_plot(None)?;
    let curve = session.curve_plot();
    match serde_json::to_string(&(shapes, curve)) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to serialize plot data: {e}");
            process::exit(1);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}
