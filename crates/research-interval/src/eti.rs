//! Equal-tailed interval

use crate::traits::IntervalEstimator;
use crate::types::{Interval, ProbabilityMass};
use research_core::{quantile_sorted, Result};

/// Equal-tailed interval estimator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EqualTailed {
    mass: ProbabilityMass,
}

impl EqualTailed {
    /// Create a new ETI estimator covering `mass`
    pub fn new(mass: f64) -> Result<Self> {
        Ok(Self::with_mass(ProbabilityMass::new(mass)?))
    }

    /// Create a new ETI estimator from a validated mass
    pub fn with_mass(mass: ProbabilityMass) -> Self {
        Self { mass }
    }
}

impl IntervalEstimator for EqualTailed {
    fn interval_sorted(&self, sorted_samples: &[f64]) -> Interval {
        eti_sorted(sorted_samples, self.mass)
    }

    fn mass(&self) -> ProbabilityMass {
        self.mass
    }

    fn name(&self) -> &'static str {
        "eti"
    }
}

/// Equal-tailed interval of finite, ascending samples.
///
/// The bounds are the linear-interpolation quantiles at `(1 - mass) / 2`
/// and `1 - (1 - mass) / 2`; they need not be observed values.
pub fn eti_sorted(sorted_samples: &[f64], mass: ProbabilityMass) -> Interval {
    if sorted_samples.is_empty() {
        return Interval::nan();
    }
    let lower_tail = mass.tail_probability();
    let upper_tail = 1.0 - lower_tail;
    Interval::new(
        quantile_sorted(sorted_samples, lower_tail),
        quantile_sorted(sorted_samples, upper_tail),
    )
}
