//! Common types for credible intervals

use research_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A credible interval with lower and upper bounds
///
/// `lower == upper` is a valid degenerate interval. An interval computed
/// from a sample set with no finite values has both bounds NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
}

impl Interval {
    /// Create a new interval
    pub fn new(lower: f64, upper: f64) -> Self {
        debug_assert!(
            !(lower > upper),
            "interval bounds out of order: [{lower}, {upper}]"
        );
        Self { lower, upper }
    }

    /// Degenerate interval collapsed onto a single value
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    /// The not-a-number sentinel returned for empty input
    pub fn nan() -> Self {
        Self {
            lower: f64::NAN,
            upper: f64::NAN,
        }
    }

    /// Whether this is the empty-input sentinel
    pub fn is_nan(&self) -> bool {
        self.lower.is_nan() || self.upper.is_nan()
    }

    /// Whether both bounds coincide
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval
    pub fn midpoint(&self) -> f64 {
        self.lower + self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Bounds as a `(lower, upper)` tuple
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        interval.bounds()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Probability mass an interval must cover, validated to lie in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ProbabilityMass(f64);

impl ProbabilityMass {
    /// Create a new probability mass
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `mass` is not in (0, 1].
    pub fn new(mass: f64) -> Result<Self> {
        if mass > 0.0 && mass <= 1.0 {
            Ok(Self(mass))
        } else {
            Err(Error::invalid_mass(mass))
        }
    }

    /// Get the mass value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Probability excluded from each tail of an equal-tailed interval
    pub fn tail_probability(&self) -> f64 {
        (1.0 - self.0) / 2.0
    }

    /// Number of order statistics a highest density window retains out of `n`
    pub fn retained(&self, n: usize) -> usize {
        (self.0 * n as f64).floor() as usize
    }

    /// Common probability masses
    pub const EIGHTY_NINE: Self = Self(0.89);
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const FULL: Self = Self(1.0);
}

impl Default for ProbabilityMass {
    fn default() -> Self {
        Self::NINETY
    }
}

impl TryFrom<f64> for ProbabilityMass {
    type Error = Error;

    fn try_from(mass: f64) -> Result<Self> {
        Self::new(mass)
    }
}

impl From<ProbabilityMass> for f64 {
    fn from(mass: ProbabilityMass) -> Self {
        mass.0
    }
}

impl fmt::Display for ProbabilityMass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Both credible intervals computed from one cleaned sample set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CredibleIntervals {
    /// Highest density interval
    pub hdi: Interval,
    /// Equal-tailed interval
    pub eti: Interval,
    /// Mass covered by both intervals
    pub mass: ProbabilityMass,
    /// Number of finite samples the intervals were computed from
    pub n_finite: usize,
}

impl fmt::Display for CredibleIntervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} HDI: {}, ETI: {} (n = {})",
            self.mass, self.hdi, self.eti, self.n_finite
        )
    }
}
