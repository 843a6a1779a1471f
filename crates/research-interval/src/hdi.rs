//! Highest density interval
//!
//! For a sorted sample, the narrowest interval holding `k` samples is always
//! a run of `k` consecutive order statistics, so a single pass over the
//! `n - k + 1` windows `[x[i], x[i + k - 1]]` finds it.

use crate::traits::IntervalEstimator;
use crate::types::{Interval, ProbabilityMass};
use research_core::Result;

/// Highest density interval estimator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HighestDensity {
    mass: ProbabilityMass,
}

impl HighestDensity {
    /// Create a new HDI estimator covering `mass`
    pub fn new(mass: f64) -> Result<Self> {
        Ok(Self::with_mass(ProbabilityMass::new(mass)?))
    }

    /// Create a new HDI estimator from a validated mass
    pub fn with_mass(mass: ProbabilityMass) -> Self {
        Self { mass }
    }
}

impl IntervalEstimator for HighestDensity {
    fn interval_sorted(&self, sorted_samples: &[f64]) -> Interval {
        hdi_sorted(sorted_samples, self.mass)
    }

    fn mass(&self) -> ProbabilityMass {
        self.mass
    }

    fn name(&self) -> &'static str {
        "hdi"
    }
}

/// Highest density interval of finite, ascending samples.
///
/// Returns the NaN interval for an empty slice and the single smallest
/// value when `mass * n` rounds down to zero retained samples. Ties between
/// equally narrow windows go to the lowest one.
pub fn hdi_sorted(sorted_samples: &[f64], mass: ProbabilityMass) -> Interval {
    let n = sorted_samples.len();
    if n == 0 {
        return Interval::nan();
    }

    let k = mass.retained(n);
    if k < 1 {
        return Interval::point(sorted_samples[0]);
    }

    let mut best_start = 0;
    let mut best_width = sorted_samples[k - 1] - sorted_samples[0];
    for start in 1..=n - k {
        let width = sorted_samples[start + k - 1] - sorted_samples[start];
        if width < best_width {
            best_start = start;
            best_width = width;
        }
    }

    Interval::new(sorted_samples[best_start], sorted_samples[best_start + k - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mass(p: f64) -> ProbabilityMass {
        ProbabilityMass::new(p).unwrap()
    }

    #[test]
    fn test_evenly_spaced_picks_first_window() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let hdi = hdi_sorted(&data, mass(0.9));
        assert_eq!(hdi.bounds(), (1.0, 9.0));
    }

    #[test]
    fn test_full_mass_spans_sample() {
        let data = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(hdi_sorted(&data, ProbabilityMass::FULL).bounds(), (1.0, 8.0));
    }

    #[test]
    fn test_skewed_sample_moves_to_dense_region() {
        let data = [1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0];
        assert_eq!(hdi_sorted(&data, mass(0.5)).bounds(), (1.0, 2.0));
    }

    #[test]
    fn test_dense_cluster_in_middle() {
        let data = [0.0, 10.0, 10.1, 10.2, 10.3, 20.0];
        assert_eq!(hdi_sorted(&data, mass(0.7)).bounds(), (10.0, 10.3));
    }

    #[test]
    fn test_too_few_samples_returns_smallest() {
        let data = [3.0, 4.0, 5.0];
        let hdi = hdi_sorted(&data, mass(0.2));
        assert!(hdi.is_degenerate());
        assert_eq!(hdi.lower, 3.0);
    }

    #[test]
    fn test_single_retained_sample() {
        // k = 1: every window has zero width, the first wins
        let data = [3.0, 4.0, 5.0];
        assert_eq!(hdi_sorted(&data, mass(0.4)).bounds(), (3.0, 3.0));
    }

    #[test]
    fn test_empty_is_nan() {
        assert!(hdi_sorted(&[], mass(0.9)).is_nan());
    }

    #[test]
    fn test_estimator_cleans_input() {
        let estimator = HighestDensity::new(0.9).unwrap();
        let data = [10.0, f64::NAN, 1.0, 5.0, f64::INFINITY, 3.0, 2.0, 4.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(estimator.interval(&data).bounds(), (1.0, 9.0));
        assert_eq!(estimator.name(), "hdi");
    }

    #[test]
    fn test_estimator_rejects_bad_mass() {
        assert!(HighestDensity::new(0.0).is_err());
        assert!(HighestDensity::new(1.5).is_err());
    }
}
