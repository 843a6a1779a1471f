//! Core trait for credible interval estimation

use crate::types::{Interval, ProbabilityMass};
use research_core::utils::finite_sorted;

/// Credible interval estimator over a one-dimensional sample set
///
/// Implementors only need to handle a cleaned buffer: finite values,
/// sorted ascending. The default [`interval`](IntervalEstimator::interval)
/// performs that cleaning.
pub trait IntervalEstimator {
    /// Calculate the interval for raw samples
    ///
    /// Non-finite entries are dropped before estimation.
    fn interval(&self, samples: &[f64]) -> Interval {
        self.interval_sorted(&finite_sorted(samples))
    }

    /// Calculate the interval from finite, ascending samples
    fn interval_sorted(&self, sorted_samples: &[f64]) -> Interval;

    /// Probability mass the interval covers
    fn mass(&self) -> ProbabilityMass;

    /// Method name for reporting
    fn name(&self) -> &'static str;
}
