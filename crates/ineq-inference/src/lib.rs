//! Permutation-based inference for spatial inequality
//!
//! This crate asks the question the scalar indices cannot: is the spatial
//! arrangement of inequality different from what random placement would
//! produce? It provides:
//!
//! - [`PermutationEngine`]: a generic Monte Carlo null-distribution
//!   builder for any scalar statistic of an attribute vector, with
//!   explicit seeding for reproducible inference,
//! - [`GiniSpatial`]: the spatial Gini decomposition over a neighbor
//!   relation, with pseudo p-values for the distant-pair component and the
//!   polarization index,
//! - [`TheilDSim`]: permutation inference for the between-group term of
//!   the Theil decomposition.
//!
//! The permutation loop is embarrassingly parallel; enable the `parallel`
//! feature to spread permutations across rayon workers. Seeded results are
//! bit-identical either way, because each permutation derives its own RNG
//! from the seed and the p-value is a count over an unordered collection.
//!
//! # Examples
//!
//! ```
//! use ineq_core::NeighborRelation;
//! use ineq_inference::GiniSpatial;
//!
//! // Are the two regimes more unequal between than within?
//! let income = [2.0, 3.0, 2.5, 11.0, 12.0, 13.0];
//! let regimes = NeighborRelation::block(&["w", "w", "w", "e", "e", "e"]).unwrap();
//!
//! let result = GiniSpatial::new()
//!     .with_permutations(999)
//!     .with_seed(12345)
//!     .compute(&income, &regimes)
//!     .unwrap();
//!
//! println!(
//!     "polarization = {:.3}, p = {:.3}",
//!     result.decomposition.polarization,
//!     result.polarization_p_sim()
//! );
//! ```

mod engine;
mod spatial_gini;
mod theil_sim;
mod types;

// Re-exports
pub use engine::{PermutationEngine, DEFAULT_PERMUTATIONS};
pub use spatial_gini::{decompose, GiniSpatial, SpatialGiniDecomposition, SpatialGiniResult};
pub use theil_sim::{TheilDSim, TheilDSimResult};
pub use types::NullDistribution;
