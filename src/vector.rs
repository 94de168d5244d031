//! Histogram normalization and Euclidean distance.

use crate::error::{RankError, Result};
use crate::histogram::Histogram;

/// Normalize a histogram to a unit-length vector. An all-zero histogram
/// has no direction and is rejected instead of dividing by zero.
pub fn normalize(hist: &Histogram) -> Result<Vec<f64>> {
    let v = hist.to_vector();
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm == 0.0 {
        return Err(RankError::ZeroNorm);
    }
    Ok(v.into_iter().map(|x| x / norm).collect())
}

/// Euclidean distance between two equal-length vectors.
pub fn distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RankError::DimensionMismatch { left: a.len(), right: b.len() });
    }
    let sum = a.iter().zip(b).map(|(x, y)| (y - x) * (y - x)).sum::<f64>();
    Ok(sum.sqrt())
}
