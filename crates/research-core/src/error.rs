//! Error types for research statistics
//!
//! Provides a unified error type for all research-stats crates.

use thiserror::Error;

/// Core error type for statistical operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input is not one-dimensional where one dimension is required
    #[error("Shape error: expected {expected}-dimensional input, got {actual} dimensions")]
    Shape { expected: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A statistical test could not be computed on the given data
    #[error("{test} test failed: {reason}")]
    StatisticalTest { test: &'static str, reason: String },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a probability mass outside (0, 1]
    pub fn invalid_mass(mass: f64) -> Self {
        Self::InvalidParameter(format!("Probability mass {mass} must be in (0, 1]"))
    }

    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Significance level {alpha} must be in (0, 1)"))
    }

    /// Create an error for a test that cannot run on degenerate data
    pub fn degenerate(test: &'static str, reason: impl Into<String>) -> Self {
        Self::StatisticalTest {
            test,
            reason: reason.into(),
        }
    }

    /// Create an error for input that is not one-dimensional
    pub fn not_one_dimensional(dims: usize) -> Self {
        Self::Shape {
            expected: 1,
            actual: dims,
        }
    }

    /// Name of the statistical test that failed, if any
    pub fn failed_test(&self) -> Option<&'static str> {
        match self {
            Self::StatisticalTest { test, .. } => Some(test),
            _ => None,
        }
    }
}

/// Validate a shape descriptor as one-dimensional.
///
/// Trailing and leading unit axes are not squeezed: a `[n, 1]` shape is
/// two-dimensional.
pub fn ensure_one_dimensional(shape: &[usize]) -> Result<()> {
    if shape.len() != 1 {
        return Err(Error::not_one_dimensional(shape.len()));
    }
    Ok(())
}
