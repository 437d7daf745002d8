//! Theil's T entropy index and its group decomposition
//!
//! The classic Theil index in entropy form:
//!
//! ```text
//! T = Σ_i s_i · ln(n · s_i),   s_i = y_i / Σ y
//! ```
//!
//! [`theil_d`] decomposes `T` over an exhaustive partition of the units into
//! a between-group term (inequality of group means) and a within-group
//! remainder. Unlike the reference implementation, zero or negative values
//! are rejected outright instead of being nudged by a tiny epsilon; the
//! logarithm makes positivity a hard domain requirement.

use ineq_core::{validate, Error, GroupPartition, Result};

/// Compute Theil's T index. All values must be strictly positive.
///
/// # Examples
///
/// ```
/// let t = ineq_measures::theil(&[5.0, 5.0, 5.0]).unwrap();
/// assert!(t.abs() < 1e-12);
/// ```
pub fn theil(x: &[f64]) -> Result<f64> {
    validate::sample(x, "attribute vector")?;
    validate::positive(x, "Theil index")?;
    let n = x.len() as f64;
    let total: f64 = x.iter().sum();
    Ok(x.iter()
        .map(|&v| {
            let s = v / total;
            s * (n * s).ln()
        })
        .sum())
}

/// Theil decomposition over a group partition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheilDResult {
    /// Global Theil's T.
    pub t: f64,
    /// Between-group inequality (inequality of group means).
    pub between: f64,
    /// Within-group inequality, `t - between`.
    pub within: f64,
}

impl TheilDResult {
    /// Share of total inequality attributable to the between-group term.
    ///
    /// Degenerate when the vector carries no inequality at all
    /// (`t == 0`); a constant vector has no share to attribute.
    pub fn between_share(&self) -> Result<f64> {
        if self.t == 0.0 {
            return Err(Error::Degenerate(
                "between-group share is undefined when total inequality is zero".to_string(),
            ));
        }
        Ok(self.between / self.t)
    }
}

/// Decompose Theil's T over an exhaustive, mutually exclusive partition.
///
/// The between-group term is
/// `Σ_g s_g · ln((n / n_g) · s_g)` where `s_g` is group g's income share
/// and `n_g` its population; the within-group term is the remainder.
pub fn theil_d(x: &[f64], partition: &GroupPartition) -> Result<TheilDResult> {
    if partition.n() != x.len() {
        return Err(Error::size_mismatch(x.len(), partition.n(), "partition"));
    }
    let t = theil(x)?;

    let n = x.len() as f64;
    let total: f64 = x.iter().sum();
    let mut group_totals = vec![0.0; partition.n_groups()];
    for (i, &v) in x.iter().enumerate() {
        group_totals[partition.group_of(i)] += v;
    }

    let between: f64 = group_totals
        .iter()
        .zip(partition.sizes())
        .map(|(&gt, &ng)| {
            let sg = gt / total;
            sg * ((n / ng as f64) * sg).ln()
        })
        .sum();

    Ok(TheilDResult {
        t,
        between,
        within: t - between,
    })
}
