//! Atkinson inequality index
//!
//! The Atkinson index folds a social aversion-to-inequality parameter `ε`
//! into the measurement: higher `ε` weights the lower tail of the
//! distribution more heavily. At `ε = 1` the index degenerates to one minus
//! the ratio of the geometric to the arithmetic mean.

use ineq_core::{validate, Error, Result};

/// Atkinson index plus the equally-distributed equivalent income
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtkinsonResult {
    /// The Atkinson index, in `[0, 1]` for positive input.
    pub a: f64,
    /// Equally-distributed equivalent: the uniform income level yielding
    /// the same social welfare, `mean · (1 - a)`.
    pub ede: f64,
    /// The aversion parameter the index was computed with.
    pub epsilon: f64,
}

/// Compute the Atkinson index with aversion parameter `epsilon`.
///
/// Requires strictly positive values ([`Error::Degenerate`] otherwise) and
/// `epsilon >= 0` ([`Error::InvalidParameter`]).
///
/// # Examples
///
/// ```
/// let r = ineq_measures::atkinson(&[10.0, 20.0, 30.0, 40.0, 50.0], 0.5).unwrap();
/// assert!((r.a - 0.06315).abs() < 1e-5);
/// ```
pub fn atkinson(x: &[f64], epsilon: f64) -> Result<AtkinsonResult> {
    validate::sample(x, "attribute vector")?;
    validate::positive(x, "Atkinson index")?;
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "aversion parameter {epsilon} must be non-negative"
        )));
    }

    let n = x.len() as f64;
    let mean = validate::mean(x);
    let a = if epsilon == 1.0 {
        let geom_mean = (x.iter().map(|v| v.ln()).sum::<f64>() / n).exp();
        1.0 - geom_mean / mean
    } else {
        let ye_mean = x.iter().map(|v| v.powf(1.0 - epsilon)).sum::<f64>() / n;
        1.0 - ye_mean.powf(1.0 / (1.0 - epsilon)) / mean
    };

    Ok(AtkinsonResult {
        a,
        ede: mean * (1.0 - a),
        epsilon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const INCOMES: [f64; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];

    #[test]
    fn test_atkinson_half() {
        let r = atkinson(&INCOMES, 0.5).unwrap();
        assert_abs_diff_eq!(r.a, 0.06315339222708616, epsilon = 1e-10);
        assert_abs_diff_eq!(r.ede, 28.105398233187415, epsilon = 1e-8);
    }

    #[test]
    fn test_atkinson_unit_epsilon_uses_geometric_mean() {
        let r = atkinson(&INCOMES, 1.0).unwrap();
        assert_abs_diff_eq!(r.a, 0.1316096384342157, epsilon = 1e-10);
        assert_abs_diff_eq!(r.ede, 26.051710846973528, epsilon = 1e-8);
    }

    #[test]
    fn test_atkinson_zero_epsilon_is_zero() {
        let r = atkinson(&INCOMES, 0.0).unwrap();
        assert_abs_diff_eq!(r.a, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.ede, 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_atkinson_equality_gives_zero() {
        let r = atkinson(&[7.0, 7.0, 7.0], 0.5).unwrap();
        assert_abs_diff_eq!(r.a, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_atkinson_rejects_bad_input() {
        assert!(atkinson(&[1.0, 0.0], 0.5).is_err());
        assert!(atkinson(&[1.0, -1.0], 0.5).is_err());
        assert!(atkinson(&INCOMES, -0.1).is_err());
        assert!(atkinson(&INCOMES, f64::NAN).is_err());
    }
}
