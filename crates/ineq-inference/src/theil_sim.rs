//! Permutation inference for the Theil decomposition
//!
//! Shuffles the attribute values while the group partition stays fixed
//! (equivalently, randomly reassigns values to groups with group sizes
//! held constant) and builds the null distribution of the between-group
//! term.

use crate::engine::PermutationEngine;
use crate::types::NullDistribution;
use ineq_core::{Error, GroupPartition, Result};
use ineq_measures::theil_d;

/// Theil decomposition with permutation inference
///
/// # Examples
///
/// ```
/// use ineq_core::GroupPartition;
/// use ineq_inference::TheilDSim;
///
/// let income = [1.0, 2.0, 3.0, 7.0, 8.0, 9.0];
/// let regimes = GroupPartition::from_labels(&[0, 0, 0, 1, 1, 1]).unwrap();
/// let r = TheilDSim::new()
///     .with_permutations(99)
///     .with_seed(10)
///     .compute(&income, &regimes)
///     .unwrap();
///
/// assert!(r.between > 0.0);
/// assert!(r.p_sim() >= 0.01 && r.p_sim() <= 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TheilDSim {
    engine: PermutationEngine,
}

impl TheilDSim {
    /// Create with the default permutation count and a random seed.
    pub fn new() -> Self {
        Self {
            engine: PermutationEngine::new(),
        }
    }

    /// Set the number of permutations.
    pub fn with_permutations(mut self, permutations: usize) -> Self {
        self.engine = self.engine.with_permutations(permutations);
        self
    }

    /// Set the random seed for reproducible inference.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.engine = self.engine.with_seed(seed);
        self
    }

    /// Decompose and run the permutation test on the between-group term.
    pub fn compute(&self, x: &[f64], partition: &GroupPartition) -> Result<TheilDSimResult> {
        let observed = theil_d(x, partition)?;
        let between_null = self
            .engine
            .run(x, |perm| theil_d(perm, partition).map(|r| r.between))?;

        Ok(TheilDSimResult {
            t: observed.t,
            between: observed.between,
            within: observed.within,
            between_null,
        })
    }
}

/// Theil decomposition together with the simulated null of its
/// between-group term
#[derive(Debug, Clone)]
pub struct TheilDSimResult {
    /// Global Theil's T (permutation-invariant).
    pub t: f64,
    /// Observed between-group inequality.
    pub between: f64,
    /// Observed within-group inequality.
    pub within: f64,
    between_null: NullDistribution,
}

impl TheilDSimResult {
    /// Null distribution of the between-group term.
    ///
    /// T itself is invariant under relabelling, so the null of the
    /// between-group *share* bg/T is this distribution scaled by 1/T; its
    /// pseudo p-value is identical.
    pub fn between_null(&self) -> &NullDistribution {
        &self.between_null
    }

    /// Observed share of inequality attributable to the between-group
    /// term.
    ///
    /// Degenerate when the vector carries no inequality at all
    /// (`t == 0`).
    pub fn between_share(&self) -> Result<f64> {
        if self.t == 0.0 {
            return Err(Error::Degenerate(
                "between-group share is undefined when total inequality is zero".to_string(),
            ));
        }
        Ok(self.between / self.t)
    }

    /// Pseudo p-value for the between-group term (one-sided, upper tail).
    pub fn p_sim(&self) -> f64 {
        self.between_null.pseudo_p()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_deterministic_per_seed() {
        let x = [1.0, 4.0, 2.0, 9.0, 3.0, 7.0];
        let p = GroupPartition::from_labels(&[0, 0, 1, 1, 2, 2]).unwrap();
        let sim = TheilDSim::new().with_permutations(99).with_seed(5);
        let a = sim.compute(&x, &p).unwrap();
        let b = sim.compute(&x, &p).unwrap();
        assert_eq!(a.between_null().simulated(), b.between_null().simulated());
        assert_eq!(a.p_sim(), b.p_sim());
    }

    #[test]
    fn test_observed_matches_plain_decomposition() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let p = GroupPartition::from_labels(&[0, 0, 0, 1, 1, 1]).unwrap();
        let r = TheilDSim::new().with_permutations(19).with_seed(1).compute(&x, &p).unwrap();
        let d = theil_d(&x, &p).unwrap();
        assert_eq!(r.t, d.t);
        assert_eq!(r.between, d.between);
        assert_eq!(r.within, d.within);
        assert_abs_diff_eq!(r.between_share().unwrap(), d.between / d.t, epsilon = 1e-15);
    }

    #[test]
    fn test_simulated_between_bounded_by_total() {
        // 0 <= bg <= T for every permutation.
        let x = [2.0, 5.0, 1.0, 9.0, 4.0, 8.0, 3.0, 7.0];
        let p = GroupPartition::from_labels(&[0, 0, 0, 0, 1, 1, 1, 1]).unwrap();
        let r = TheilDSim::new().with_permutations(199).with_seed(23).compute(&x, &p).unwrap();
        for &bg in r.between_null().simulated() {
            assert!(bg >= -1e-12 && bg <= r.t + 1e-12);
        }
    }

    #[test]
    fn test_segregated_groups_are_detected() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 91.0, 92.0, 93.0, 94.0, 95.0];
        let p = GroupPartition::from_labels(&[0, 0, 0, 0, 0, 1, 1, 1, 1, 1]).unwrap();
        let r = TheilDSim::new().with_permutations(999).with_seed(17).compute(&x, &p).unwrap();
        assert!(r.between_share().unwrap() > 0.9);
        assert!(r.p_sim() <= 0.05);
    }

    #[test]
    fn test_constant_vector_share_is_degenerate() {
        // Inference itself runs (every draw is zero), but the share is
        // an error, never NaN.
        let x = [5.0, 5.0, 5.0, 5.0];
        let p = GroupPartition::from_labels(&[0, 0, 1, 1]).unwrap();
        let r = TheilDSim::new().with_permutations(19).with_seed(3).compute(&x, &p).unwrap();
        assert!(matches!(r.between_share(), Err(Error::Degenerate(_))));
        assert_eq!(r.p_sim(), 1.0);
    }

    #[test]
    fn test_p_value_bounds() {
        let x = [3.0, 1.0, 4.0, 1.5, 5.0, 9.0];
        let p = GroupPartition::from_labels(&["a", "b", "a", "b", "a", "b"]).unwrap();
        let r = TheilDSim::new().with_permutations(49).with_seed(2).compute(&x, &p).unwrap();
        assert!(r.p_sim() >= 1.0 / 50.0 && r.p_sim() <= 1.0);
    }
}
