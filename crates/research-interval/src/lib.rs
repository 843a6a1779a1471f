//! Credible interval estimation from posterior samples
//!
//! This crate provides the two standard ways of summarising a sampled
//! posterior with an interval:
//!
//! - **Highest density interval (HDI)**: the narrowest interval holding the
//!   requested probability mass
//! - **Equal-tailed interval (ETI)**: the interval between the quantiles
//!   that exclude equal mass from each tail
//!
//! Non-finite samples are ignored. A sample set with no finite values
//! produces the `(NaN, NaN)` interval rather than an error; the only error
//! is a probability mass outside (0, 1].
//!
//! # Examples
//!
//! ```rust
//! use research_interval::{credible_intervals, IntervalEstimator, HighestDensity};
//!
//! let samples = vec![1.0, 1.2, 1.3, 1.9, 2.0, 2.1, 2.2, 2.4, 5.0, 9.0];
//!
//! let both = credible_intervals(&samples, 0.8).unwrap();
//! println!("{both}");
//!
//! let hdi = HighestDensity::new(0.5).unwrap();
//! let interval = hdi.interval(&samples);
//! assert!(interval.width() <= both.hdi.width());
//! ```

pub mod api;
mod eti;
mod hdi;
mod traits;
mod types;

// Re-exports
pub use api::{
    credible_intervals, equal_tailed_interval, eti_default, hdi_default,
    highest_density_interval, IntervalMethod, DEFAULT_MASS,
};
pub use eti::{eti_sorted, EqualTailed};
pub use hdi::{hdi_sorted, HighestDensity};
pub use traits::IntervalEstimator;
pub use types::{CredibleIntervals, Interval, ProbabilityMass};

// Convenience constructors
pub fn hdi(mass: f64) -> research_core::Result<HighestDensity> {
    HighestDensity::new(mass)
}

pub fn eti(mass: f64) -> research_core::Result<EqualTailed> {
    EqualTailed::new(mass)
}
