//! Spatial inequality statistics with permutation-based inference
//!
//! `ineq-stats` bundles the workspace crates behind one façade:
//!
//! - [`ineq_core`]: pairwise deviation kernels, neighbor relations, group
//!   partitions, and the shared error type,
//! - [`ineq_measures`]: classic indices: Gini, Theil (and its group
//!   decomposition), Atkinson, Wolfson, Schutz, Pen's parade data,
//! - [`ineq_inference`]: the permutation engine, the spatial Gini
//!   decomposition, and the simulated Theil decomposition.
//!
//! # Examples
//!
//! ```
//! use ineq_stats::{GiniSpatial, NeighborRelation};
//!
//! let income = [4.0, 5.0, 4.5, 12.0, 13.0, 12.5];
//! let regimes = NeighborRelation::block(&["w", "w", "w", "e", "e", "e"]).unwrap();
//!
//! let result = GiniSpatial::new()
//!     .with_permutations(999)
//!     .with_seed(12345)
//!     .compute(&income, &regimes)
//!     .unwrap();
//!
//! assert!(result.decomposition.polarization > 1.0);
//! ```

pub use ineq_core;
pub use ineq_inference;
pub use ineq_measures;

// Flat re-exports of the main surface
pub use ineq_core::{
    split_sad, total_sad, Error, GroupPartition, NeighborRelation, Result, SadSplit,
};
pub use ineq_inference::{
    decompose, GiniSpatial, NullDistribution, PermutationEngine, SpatialGiniDecomposition,
    SpatialGiniResult, TheilDSim, TheilDSimResult,
};
pub use ineq_measures::{
    atkinson, gini, lorenz_curve, pen_parade, schutz, theil, theil_d, weighted_bar_counts,
    weighted_parade, wolfson, AtkinsonResult, GiniResult, LorenzCurve, PenParade, SchutzResult,
    TheilDResult,
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_facade_round_trip() {
        let income = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(gini(&income).unwrap().g, 0.25);

        let regimes = NeighborRelation::block(&[0, 0, 1, 1]).unwrap();
        let d = decompose(&income, &regimes).unwrap();
        assert_abs_diff_eq!(d.polarization, 2.0, epsilon = 1e-12);
    }
}
