//! Turns a histogram `(edges, counts)` into the corner points of its step plot.
//!
//! Two constructions are provided. [`step_points_with_risers`] walks the
//! interior edges and emits the vertical riser at each one, while
//! [`step_points_per_bin`] emits the flat top of every bin. For any histogram
//! with `edges.len() == counts.len() + 1` both yield the same `2n` points.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistogramError {
    #[error("Histogram needs one more edge than counts: got {edges} edge(s) for {counts} count(s)")]
    EdgeCountMismatch { edges: usize, counts: usize },
}

fn check_shape(bins: &[f64], hist: &[f64]) -> Result<(), HistogramError> {
    if bins.len() != hist.len() + 1 {
        return Err(HistogramError::EdgeCountMismatch {
            edges: bins.len(),
            counts: hist.len(),
        });
    }
    Ok(())
}

/// First corner, then both ends of every interior riser, then the last corner.
pub fn step_points_with_risers(
    bins: &[f64],
    hist: &[f64],
) -> Result<Vec<(f64, f64)>, HistogramError> {
    check_shape(bins, hist)?;
    let n = hist.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut points = Vec::with_capacity(2 * n);
    points.push((bins[0], hist[0]));
    for i in 1..n {
        points.push((bins[i], hist[i - 1]));
        points.push((bins[i], hist[i]));
    }
    points.push((bins[n], hist[n - 1]));
    Ok(points)
}

/// Left and right corner of every bin top.
pub fn step_points_per_bin(bins: &[f64], hist: &[f64]) -> Result<Vec<(f64, f64)>, HistogramError> {
    check_shape(bins, hist)?;
    Ok(hist
        .iter()
        .enumerate()
        .flat_map(|(i, &count)| [(bins[i], count), (bins[i + 1], count)])
        .collect())
}
