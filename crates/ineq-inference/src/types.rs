//! Null distributions from permutation resampling

use ineq_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// An observed statistic against its empirical null distribution
///
/// Holds the statistic computed on the observed arrangement and the values
/// recomputed under each of `P` random permutations. The observed value is
/// never counted among the simulated draws.
#[derive(Debug, Clone, PartialEq)]
pub struct NullDistribution {
    observed: f64,
    simulated: Vec<f64>,
}

impl NullDistribution {
    /// Pair an observed statistic with its simulated draws.
    pub fn new(observed: f64, simulated: Vec<f64>) -> Result<Self> {
        if simulated.is_empty() {
            return Err(Error::InvalidParameter(
                "null distribution requires at least one permutation".to_string(),
            ));
        }
        Ok(Self {
            observed,
            simulated,
        })
    }

    /// The statistic on the observed arrangement.
    pub fn observed(&self) -> f64 {
        self.observed
    }

    /// Per-permutation statistic values, in permutation order.
    pub fn simulated(&self) -> &[f64] {
        &self.simulated
    }

    /// Number of permutations `P`.
    pub fn n_permutations(&self) -> usize {
        self.simulated.len()
    }

    /// Number of simulated draws at or above the observed value.
    pub fn count_at_or_above(&self) -> usize {
        self.simulated.iter().filter(|&&v| v >= self.observed).count()
    }

    /// One-sided pseudo p-value, `(1 + #{sim >= obs}) / (1 + P)`.
    ///
    /// The add-one correction keeps the p-value off zero; the result is
    /// always in `[1/(P+1), 1]`.
    pub fn pseudo_p(&self) -> f64 {
        (1 + self.count_at_or_above()) as f64 / (1 + self.n_permutations()) as f64
    }

    /// Mean of the simulated draws.
    pub fn mean(&self) -> f64 {
        self.simulated.iter().sum::<f64>() / self.simulated.len() as f64
    }

    /// Population standard deviation of the simulated draws.
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let var = self
            .simulated
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / self.simulated.len() as f64;
        var.sqrt()
    }

    /// Standard score of the observed value within the null.
    ///
    /// Degenerate when every permutation produced the same value.
    pub fn z_score(&self) -> Result<f64> {
        let sd = self.std_dev();
        if sd == 0.0 {
            return Err(Error::Degenerate(
                "null distribution has zero spread; z-score undefined".to_string(),
            ));
        }
        Ok((self.observed - self.mean()) / sd)
    }

    /// Upper-tail p-value from a standard-normal approximation of the null.
    pub fn normal_p(&self) -> Result<f64> {
        let z = self.z_score()?;
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| Error::Computation(format!("failed to create normal distribution: {e}")))?;
        Ok(1.0 - normal.cdf(z))
    }
}
