//! High-level API for credible intervals
//!
//! This module provides the plain function entry points for computing
//! intervals directly from raw sample slices.

use crate::{
    eti::eti_sorted,
    hdi::hdi_sorted,
    types::{CredibleIntervals, Interval, ProbabilityMass},
};
use research_core::{utils::finite_sorted, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Default probability mass for credible intervals
pub const DEFAULT_MASS: f64 = 0.90;

/// Interval construction methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalMethod {
    /// Highest density interval
    #[default]
    Hdi,
    /// Equal-tailed interval
    Eti,
}

impl IntervalMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hdi => "hdi",
            Self::Eti => "eti",
        }
    }

    /// Compute this interval for raw samples
    pub fn estimate(&self, samples: &[f64], mass: f64) -> Result<Interval> {
        match self {
            Self::Hdi => highest_density_interval(samples, mass),
            Self::Eti => equal_tailed_interval(samples, mass),
        }
    }
}

impl fmt::Display for IntervalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn clean(samples: &[f64]) -> Vec<f64> {
    let sorted = finite_sorted(samples);
    let dropped = samples.len() - sorted.len();
    if dropped > 0 {
        debug!(dropped, retained = sorted.len(), "dropped non-finite samples");
    }
    sorted
}

/// Compute the highest density interval of `samples`
///
/// Non-finite values are removed first. An empty (or all non-finite)
/// sample set yields `(NaN, NaN)`; if `mass * n` rounds down to zero the
/// interval collapses onto the smallest sample.
///
/// # Errors
/// Returns an error if `mass` is not in (0, 1].
///
/// # Example
/// ```rust
/// use research_interval::highest_density_interval;
///
/// let samples: Vec<f64> = (1..=10).map(f64::from).collect();
/// let hdi = highest_density_interval(&samples, 0.9).unwrap();
/// assert_eq!(hdi.bounds(), (1.0, 9.0));
/// ```
#[instrument(level = "debug", skip(samples), fields(n = samples.len()))]
pub fn highest_density_interval(samples: &[f64], mass: f64) -> Result<Interval> {
    let mass = ProbabilityMass::new(mass)?;
    Ok(hdi_sorted(&clean(samples), mass))
}

/// Compute the equal-tailed interval of `samples`
///
/// Non-finite values are removed first. An empty (or all non-finite)
/// sample set yields `(NaN, NaN)`.
///
/// # Errors
/// Returns an error if `mass` is not in (0, 1].
///
/// # Example
/// ```rust
/// use research_interval::equal_tailed_interval;
///
/// let eti = equal_tailed_interval(&[10.0, 20.0, 30.0, 40.0, 50.0], 0.5).unwrap();
/// assert_eq!(eti.bounds(), (20.0, 40.0));
/// ```
#[instrument(level = "debug", skip(samples), fields(n = samples.len()))]
pub fn equal_tailed_interval(samples: &[f64], mass: f64) -> Result<Interval> {
    let mass = ProbabilityMass::new(mass)?;
    Ok(eti_sorted(&clean(samples), mass))
}

/// Compute both intervals from a single clean-and-sort pass
///
/// # Errors
/// Returns an error if `mass` is not in (0, 1].
#[instrument(level = "debug", skip(samples), fields(n = samples.len()))]
pub fn credible_intervals(samples: &[f64], mass: f64) -> Result<CredibleIntervals> {
    let mass = ProbabilityMass::new(mass)?;
    let sorted = clean(samples);
    Ok(CredibleIntervals {
        hdi: hdi_sorted(&sorted, mass),
        eti: eti_sorted(&sorted, mass),
        mass,
        n_finite: sorted.len(),
    })
}

/// Highest density interval at the default 90% mass
pub fn hdi_default(samples: &[f64]) -> Interval {
    hdi_sorted(&clean(samples), ProbabilityMass::default())
}

/// Equal-tailed interval at the default 90% mass
pub fn eti_default(samples: &[f64]) -> Interval {
    eti_sorted(&clean(samples), ProbabilityMass::default())
}
