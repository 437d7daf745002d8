//! Core building blocks for spatial inequality analysis
//!
//! This crate provides the pieces every inequality measure in the workspace
//! is built from:
//!
//! - a unified [`Error`]/[`Result`] pair used across all ineq-stats crates,
//! - pairwise sum-of-absolute-differences kernels ([`total_sad`],
//!   [`split_sad`]),
//! - the [`NeighborRelation`] consumed by the spatial Gini decomposition,
//! - the [`GroupPartition`] consumed by the Theil decomposition.
//!
//! # Examples
//!
//! ```
//! use ineq_core::{split_sad, NeighborRelation};
//!
//! // Two regimes of two units each.
//! let w = NeighborRelation::block(&["a", "a", "b", "b"]).unwrap();
//! let split = split_sad(&[1.0, 2.0, 3.0, 4.0], &w).unwrap();
//!
//! assert_eq!(split.neighbor(), 4.0);
//! assert_eq!(split.distant(), 16.0);
//! assert_eq!(split.total(), 20.0);
//! ```

mod error;
mod pairwise;
mod partition;
mod weights;

pub mod validate;

// Re-exports
pub use error::{Error, Result};
pub use pairwise::{split_sad, total_sad, SadSplit};
pub use partition::GroupPartition;
pub use weights::NeighborRelation;
