//! Schutz inequality measures
//!
//! The Schutz distance is the maximum vertical gap between the line of
//! perfect equality and the Lorenz curve; the intersection point is the
//! cumulative population share where that gap peaks (equivalently, where
//! the Lorenz slope crosses one). The original Schutz coefficient sums the
//! above-equality slope excesses, scaled by ten.

use ineq_core::{validate, Error, Result};

/// Schutz distance, intersection point, and coefficient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchutzResult {
    /// Maximum gap between the equality line and the Lorenz curve.
    pub distance: f64,
    /// Cumulative population share at which the gap peaks.
    pub intersection_point: f64,
    /// Original Schutz coefficient, `10 · Σ_{slope > 1} (slope - 1)`.
    pub coefficient: f64,
}

/// Compute the Schutz measures of a non-negative attribute vector.
///
/// # Examples
///
/// ```
/// let r = ineq_measures::schutz(&[1000.0, 2000.0, 1500.0, 3000.0, 2500.0]).unwrap();
/// assert!((r.distance - 0.15).abs() < 1e-10);
/// assert!((r.intersection_point - 0.6).abs() < 1e-10);
/// assert!((r.coefficient - 7.5).abs() < 1e-10);
/// ```
pub fn schutz(x: &[f64]) -> Result<SchutzResult> {
    validate::sample(x, "attribute vector")?;
    if x.iter().any(|&v| v < 0.0) {
        return Err(Error::InvalidInput(
            "Schutz measures require non-negative values".to_string(),
        ));
    }
    let total: f64 = x.iter().sum();
    if total == 0.0 {
        return Err(Error::Degenerate(
            "Schutz measures are undefined for an all-zero vector".to_string(),
        ));
    }

    let n = x.len();
    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mut distance = f64::NEG_INFINITY;
    let mut intersection_point = 0.0;
    let mut coefficient = 0.0;
    let mut cum_share = 0.0;
    for (i, &v) in sorted.iter().enumerate() {
        let share = v / total;
        cum_share += share;
        let cum_population = (i + 1) as f64 / n as f64;
        let gap = cum_population - cum_share;
        // `>=` lands the tie on the slope-one crossing, where the gap
        // stops growing.
        if gap >= distance {
            distance = gap;
            intersection_point = cum_population;
        }
        let slope = share * n as f64;
        if slope > 1.0 {
            coefficient += 10.0 * (slope - 1.0);
        }
    }

    Ok(SchutzResult {
        distance,
        intersection_point,
        coefficient,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_schutz_reference_values() {
        let r = schutz(&[1000.0, 2000.0, 1500.0, 3000.0, 2500.0]).unwrap();
        assert_abs_diff_eq!(r.distance, 0.15, epsilon = 1e-12);
        assert_abs_diff_eq!(r.intersection_point, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(r.coefficient, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_schutz_equality() {
        let r = schutz(&[4.0, 4.0, 4.0, 4.0]).unwrap();
        assert_abs_diff_eq!(r.distance, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.coefficient, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_schutz_rejects_bad_input() {
        assert!(schutz(&[0.0, 0.0]).is_err());
        assert!(schutz(&[-1.0, 2.0]).is_err());
        assert!(schutz(&[1.0]).is_err());
    }
}
