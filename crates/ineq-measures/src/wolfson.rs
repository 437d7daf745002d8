//! Wolfson bipolarization index
//!
//! Measures how hollowed-out the middle of an income distribution is:
//!
//! ```text
//! W = (2·d50 - G) · mean / median
//! ```
//!
//! where `d50` is the vertical gap between the equality line and the Lorenz
//! curve at the median and `G` the Lorenz-based Gini coefficient. Higher
//! values mean a more polarized (twin-peaked) distribution.

use crate::lorenz::lorenz_curve;
use ineq_core::{Error, Result};

/// Median via the even/odd midpoint rule over a sorted copy.
fn median(x: &[f64]) -> f64 {
    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Compute the Wolfson bipolarization index.
///
/// Requires non-negative values with a positive total (via the Lorenz
/// curve) and a non-zero median.
///
/// # Examples
///
/// ```
/// let w = ineq_measures::wolfson(&[6.0, 6.0, 8.0, 8.0, 10.0, 10.0, 12.0, 12.0]).unwrap();
/// assert!((w - 1.0 / 12.0).abs() < 1e-10);
/// ```
pub fn wolfson(x: &[f64]) -> Result<f64> {
    let curve = lorenz_curve(x)?;
    let g = curve.gini();
    let med = median(x);
    if med == 0.0 {
        return Err(Error::Degenerate(
            "Wolfson index is undefined for a zero median".to_string(),
        ));
    }
    let mean = x.iter().sum::<f64>() / x.len() as f64;
    let d50 = 0.5 - curve.share_at(0.5)?;
    Ok((2.0 * d50 - g) * (mean / med))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wolfson_reference_values() {
        let w = wolfson(&[6.0, 6.0, 8.0, 8.0, 10.0, 10.0, 12.0, 12.0]).unwrap();
        assert_abs_diff_eq!(w, 1.0 / 12.0, epsilon = 1e-10);

        let w = wolfson(&[2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]).unwrap();
        assert_abs_diff_eq!(w, 11.0 / 72.0, epsilon = 1e-10);
    }

    #[test]
    fn test_wolfson_equality_is_zero() {
        let w = wolfson(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        assert_abs_diff_eq!(w, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wolfson_zero_median_is_degenerate() {
        assert!(matches!(
            wolfson(&[0.0, 0.0, 0.0, 10.0]),
            Err(Error::Degenerate(_))
        ));
    }

    #[test]
    fn test_median_rules() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
    }
}
