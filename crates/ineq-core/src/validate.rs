//! Input validation shared by the inequality measures
//!
//! All measures operate on a plain `&[f64]` attribute vector with one value
//! per spatial unit. Validation is eager: malformed input is rejected before
//! any arithmetic happens, so no NaN ever propagates silently into a result.

use crate::error::{Error, Result};

/// Minimum attribute-vector length for any pairwise computation.
pub const MIN_OBSERVATIONS: usize = 2;

/// Check that `x` has at least [`MIN_OBSERVATIONS`] finite values.
pub fn sample(x: &[f64], context: &str) -> Result<()> {
    if x.len() < MIN_OBSERVATIONS {
        return Err(Error::too_few(MIN_OBSERVATIONS, x.len()));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Check that every value in `x` is strictly positive.
///
/// Required by measures with a logarithmic or power form (Theil, Atkinson).
pub fn positive(x: &[f64], context: &str) -> Result<()> {
    if x.iter().any(|&v| v <= 0.0) {
        return Err(Error::non_positive(context));
    }
    Ok(())
}

/// Arithmetic mean of `x`. Callers validate the slice first.
pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}
