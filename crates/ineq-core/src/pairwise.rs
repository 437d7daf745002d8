//! Sum-of-absolute-differences (SAD) kernels
//!
//! The pairwise workhorse behind the Gini family. All SAD values use the
//! ordered-pair convention: `Σ_i Σ_j |x_i - x_j|` over `i ≠ j`, so each
//! unordered pair contributes twice. That matches the classic Gini
//! denominator `2·mean·n²` and the reference decomposition values; pair
//! *counts* are always unordered.

use crate::error::{Error, Result};
use crate::validate;
use crate::weights::NeighborRelation;

/// Total SAD of an attribute vector, ordered-pair convention.
///
/// Computed in O(n log n) from the sorted vector via
/// `2·Σ_i (2i - n + 1)·x_(i)`. Because the computation only sees the sorted
/// order, the result is bit-identical under any permutation of `x`.
///
/// # Examples
///
/// ```
/// let sad = ineq_core::total_sad(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(sad, 20.0);
/// ```
pub fn total_sad(x: &[f64]) -> Result<f64> {
    validate::sample(x, "attribute vector")?;
    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len() as f64;
    let mut acc = 0.0;
    for (i, &v) in sorted.iter().enumerate() {
        acc += (2.0 * i as f64 - (n - 1.0)) * v;
    }
    Ok(2.0 * acc)
}

/// SAD of an attribute vector split by a neighbor relation
///
/// Holds the neighbor-pair and distant-pair components; the total is their
/// sum by construction, so the decomposition identity
/// `neighbor + distant == total` is exact, not approximate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SadSplit {
    neighbor: f64,
    distant: f64,
}

impl SadSplit {
    /// SAD over neighbor pairs (ordered-pair convention).
    pub fn neighbor(&self) -> f64 {
        self.neighbor
    }

    /// SAD over distant (non-neighbor) pairs.
    pub fn distant(&self) -> f64 {
        self.distant
    }

    /// Total SAD, exactly `neighbor() + distant()`.
    pub fn total(&self) -> f64 {
        self.neighbor + self.distant
    }
}

/// Split the SAD of `x` into neighbor and distant components under `w`.
///
/// O(n² log d) over unordered pairs with a binary-search membership test
/// per pair; each component is doubled once at the end to the ordered-pair
/// convention.
pub fn split_sad(x: &[f64], w: &NeighborRelation) -> Result<SadSplit> {
    validate::sample(x, "attribute vector")?;
    if w.n_units() != x.len() {
        return Err(Error::size_mismatch(x.len(), w.n_units(), "neighbor relation"));
    }

    let mut neighbor = 0.0;
    let mut distant = 0.0;
    for i in 0..x.len() {
        for j in (i + 1)..x.len() {
            let d = (x[i] - x[j]).abs();
            if w.is_neighbor(i, j) {
                neighbor += d;
            } else {
                distant += d;
            }
        }
    }

    Ok(SadSplit {
        neighbor: 2.0 * neighbor,
        distant: 2.0 * distant,
    })
}
