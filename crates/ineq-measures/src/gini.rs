//! Classic Gini coefficient in absolute deviation form
//!
//! The Gini coefficient is computed from the sum of absolute pairwise
//! differences (SAD, ordered-pair convention):
//!
//! ```text
//! G = SAD / (2 · mean(x) · n²)
//! ```
//!
//! For non-negative input `G ∈ [0, 1]`, with `G = 0` iff all values are
//! equal. The algorithm itself does not require non-negative values, but
//! the economic interpretation does; callers feeding signed data own that
//! interpretation.

use ineq_core::{total_sad, validate, Error, Result};

/// Gini coefficient together with its intermediates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GiniResult {
    /// The Gini coefficient.
    pub g: f64,
    /// Sum of absolute pairwise differences, ordered-pair convention.
    pub sad: f64,
    /// Arithmetic mean of the input.
    pub mean: f64,
    /// Number of observations.
    pub n: usize,
}

/// Compute the classic Gini coefficient of an attribute vector.
///
/// Fails with [`Error::Degenerate`] on a zero-mean vector (the denominator
/// vanishes; an all-zero vector must be handled by the caller) and with
/// [`Error::InsufficientData`] for fewer than two observations.
///
/// # Examples
///
/// ```
/// let r = ineq_measures::gini(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(r.sad, 20.0);
/// assert_eq!(r.g, 0.25);
/// ```
pub fn gini(x: &[f64]) -> Result<GiniResult> {
    validate::sample(x, "attribute vector")?;
    let mean = validate::mean(x);
    if mean == 0.0 {
        return Err(Error::zero_mean("Gini coefficient"));
    }
    let n = x.len();
    let sad = total_sad(x)?;
    Ok(GiniResult {
        g: sad / (2.0 * mean * (n * n) as f64),
        sad,
        mean,
        n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_gini_reference_value() {
        let r = gini(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(r.sad, 20.0);
        assert_eq!(r.mean, 2.5);
        assert_eq!(r.g, 0.25);
    }

    #[test]
    fn test_gini_perfect_equality() {
        let r = gini(&[10.0, 10.0, 10.0, 10.0]).unwrap();
        assert_eq!(r.g, 0.0);
    }

    #[test]
    fn test_gini_zero_mean_is_degenerate() {
        assert!(matches!(
            gini(&[0.0, 0.0, 0.0]),
            Err(Error::Degenerate(_))
        ));
        // Signed data cancelling to zero mean is degenerate too.
        assert!(gini(&[-1.0, 1.0]).is_err());
    }

    #[test]
    fn test_gini_near_maximal_concentration() {
        // One unit holds everything; G -> (n-1)/n.
        let r = gini(&[0.0, 0.0, 0.0, 100.0]).unwrap();
        assert_abs_diff_eq!(r.g, 0.75, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_gini_in_unit_interval(x in prop::collection::vec(0.0f64..1000.0, 2..50)) {
            prop_assume!(x.iter().sum::<f64>() > 0.0);
            let r = gini(&x).unwrap();
            prop_assert!(r.g >= 0.0 && r.g <= 1.0);
        }

        #[test]
        fn prop_gini_permutation_invariant(x in prop::collection::vec(0.1f64..1000.0, 2..50)) {
            let mut rotated = x.clone();
            rotated.rotate_left(1);
            // Bit-exact: the SAD kernel only sees sorted order.
            prop_assert_eq!(gini(&x).unwrap().g, gini(&rotated).unwrap().g);
        }

        #[test]
        fn prop_gini_zero_iff_constant(x in prop::collection::vec(0.1f64..1000.0, 2..50)) {
            let r = gini(&x).unwrap();
            let constant = x.iter().all(|&v| v == x[0]);
            prop_assert_eq!(r.g == 0.0, constant);
        }
    }
}
