//! Error types for inequality analysis
//!
//! Provides a unified error type shared by all ineq-stats crates.

use thiserror::Error;

/// Core error type for inequality computations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The distribution is degenerate for the requested index
    /// (zero mean, zero deviation, non-positive values, ...)
    #[error("Degenerate distribution: {0}")]
    Degenerate(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a vector that is too short
    pub fn too_few(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for a zero-mean vector
    pub fn zero_mean(context: &str) -> Self {
        Self::Degenerate(format!("{context} is undefined for a zero-mean vector"))
    }

    /// Create an error for non-positive values where positivity is required
    pub fn non_positive(context: &str) -> Self {
        Self::Degenerate(format!("{context} requires strictly positive values"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
