//! Uniform sample grids.

/// Return `count` evenly spaced samples over the closed interval `[start, stop]`.
///
/// Sample `i` is computed as `start + (stop - start) * i / (count - 1)` rather
/// than by accumulating a step, so the last sample is exactly `stop` and a
/// grid with twice the resolution reproduces every sample of the coarser one
/// bit for bit.
///
/// `count == 0` yields an empty grid and `count == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let div = (count - 1) as f64;
            let span = stop - start;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        stop
                    } else {
                        start + span * i as f64 / div
                    }
                })
                .collect()
        }
    }
}
