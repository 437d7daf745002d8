//! Pen's parade ordering data
//!
//! Pen's parade lines units up by increasing attribute value, one bar per
//! unit (or per weighted slot). This module produces the ordering data
//! only; rendering belongs to external plotting code.

use ineq_core::{validate, Error, Result};

/// Units ordered by increasing value
#[derive(Debug, Clone, PartialEq)]
pub struct PenParade {
    order: Vec<usize>,
    values: Vec<f64>,
}

impl PenParade {
    /// Original unit index of the k-th bar.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Bar heights, ascending.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Order units by increasing value (stable for ties).
pub fn pen_parade(x: &[f64]) -> Result<PenParade> {
    validate::sample(x, "attribute vector")?;
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&a, &b| x[a].total_cmp(&x[b]));
    let values = order.iter().map(|&i| x[i]).collect();
    Ok(PenParade { order, values })
}

/// Number of bars per unit for a weighted parade:
/// `ceil(w_i / Σw · total_bars)`.
pub fn weighted_bar_counts(weights: &[f64], total_bars: usize) -> Result<Vec<usize>> {
    validate::sample(weights, "weight vector")?;
    if weights.iter().any(|&w| w < 0.0) {
        return Err(Error::InvalidInput(
            "weights must be non-negative".to_string(),
        ));
    }
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(Error::Degenerate(
            "weighted parade is undefined for all-zero weights".to_string(),
        ));
    }
    if total_bars == 0 {
        return Err(Error::InvalidParameter(
            "total_bars must be at least 1".to_string(),
        ));
    }
    Ok(weights
        .iter()
        .map(|&w| (w / total * total_bars as f64).ceil() as usize)
        .collect())
}

/// Weighted parade: one entry per bar, carrying the original unit index,
/// ordered by increasing value.
pub fn weighted_parade(x: &[f64], weights: &[f64], total_bars: usize) -> Result<Vec<usize>> {
    validate::sample(x, "attribute vector")?;
    if weights.len() != x.len() {
        return Err(Error::size_mismatch(x.len(), weights.len(), "weight vector"));
    }
    let counts = weighted_bar_counts(weights, total_bars)?;
    let parade = pen_parade(x)?;
    let mut bars = Vec::new();
    for &i in parade.order() {
        for _ in 0..counts[i] {
            bars.push(i);
        }
    }
    Ok(bars)
}
