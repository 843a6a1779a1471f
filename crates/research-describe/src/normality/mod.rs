//! Normality tests
//!
//! The summarizer reaches the tests only through [`NormalityTest`], so any
//! backend producing a statistic and a p-value can stand in for the
//! built-in Shapiro-Wilk and Anderson-Darling implementations.

mod anderson;
mod shapiro;

pub use anderson::{AndersonDarling, AndersonPValue};
pub use shapiro::ShapiroWilk;

use research_core::Result;
use serde::{Deserialize, Serialize};
use statrs::function::erf::{erfc, erfc_inv};
use std::f64::consts::SQRT_2;
use std::fmt;

/// Statistic and p-value produced by a normality test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// The calculated test statistic
    pub statistic: f64,
    /// Probability of a statistic at least this extreme under normality
    pub p_value: f64,
}

impl TestOutcome {
    pub fn new(statistic: f64, p_value: f64) -> Self {
        Self { statistic, p_value }
    }

    /// Whether normality survives at significance level `alpha`
    pub fn fails_to_reject(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "statistic = {:.6}, p = {:.6}", self.statistic, self.p_value)
    }
}

/// A hypothesis test of whether a sample comes from a normal distribution
///
/// Implementations receive the non-missing values of a series in their
/// original order. A sample the test cannot handle (too short, zero
/// spread, non-finite values) must produce an error, never a placeholder
/// outcome.
pub trait NormalityTest: Send + Sync {
    /// Name used in error messages and reports
    fn name(&self) -> &'static str;

    /// Run the test
    fn test(&self, samples: &[f64]) -> Result<TestOutcome>;
}

/// Standard normal CDF
#[inline]
pub(crate) fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal survival function
#[inline]
pub(crate) fn norm_sf(x: f64) -> f64 {
    0.5 * erfc(x / SQRT_2)
}

/// Standard normal quantile function
#[inline]
pub(crate) fn norm_ppf(p: f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}

/// Evaluate `c[0] + c[1] x + c[2] x^2 + ...`
#[inline]
pub(crate) fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_helpers() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.959963984540054), 0.975, epsilon = 1e-10);
        assert_relative_eq!(norm_sf(1.959963984540054), 0.025, epsilon = 1e-10);
        assert_relative_eq!(norm_ppf(0.975), 1.959963984540054, epsilon = 1e-9);
        assert_relative_eq!(norm_ppf(0.5), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_poly() {
        assert_eq!(poly(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_eq!(poly(&[-2.273, 0.459], 0.0), -2.273);
    }

    #[test]
    fn test_outcome_verdict() {
        let outcome = TestOutcome::new(0.98, 0.2);
        assert!(outcome.fails_to_reject(0.05));
        assert!(!outcome.fails_to_reject(0.2));
    }
}
