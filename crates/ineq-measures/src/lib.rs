//! Classic inequality indices
//!
//! Scalar inequality measures over an attribute vector, one value per
//! spatial unit:
//!
//! - **Gini** in absolute-deviation form ([`gini`])
//! - **Theil's T** and its group decomposition ([`theil`], [`theil_d`])
//! - **Atkinson** with aversion parameter ([`atkinson`])
//! - **Wolfson** bipolarization and the Lorenz curve behind it
//!   ([`wolfson`], [`lorenz_curve`])
//! - **Schutz** distance and coefficient ([`schutz`])
//! - **Pen's parade** ordering data ([`pen_parade`])
//!
//! All measures validate eagerly and return the shared
//! [`ineq_core::Error`]; none of them produce NaN. The spatially
//! decomposed variants with permutation inference live in
//! `ineq-inference`.
//!
//! # Examples
//!
//! ```
//! use ineq_core::GroupPartition;
//! use ineq_measures::{gini, theil_d};
//!
//! let income = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(gini(&income).unwrap().g, 0.25);
//!
//! let regimes = GroupPartition::from_labels(&["n", "n", "s", "s"]).unwrap();
//! let d = theil_d(&income, &regimes).unwrap();
//! assert!(d.between > 0.0 && d.within > 0.0);
//! ```

mod atkinson;
mod gini;
mod lorenz;
mod pen;
mod schutz;
mod theil;
mod wolfson;

// Re-exports
pub use atkinson::{atkinson, AtkinsonResult};
pub use gini::{gini, GiniResult};
pub use lorenz::{lorenz_curve, LorenzCurve};
pub use pen::{pen_parade, weighted_bar_counts, weighted_parade, PenParade};
pub use schutz::{schutz, SchutzResult};
pub use theil::{theil, theil_d, TheilDResult};
pub use wolfson::wolfson;
