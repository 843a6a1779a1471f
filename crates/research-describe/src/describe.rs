//! The summarizer: descriptive statistics plus normality tests

use crate::{
    normality::{AndersonDarling, NormalityTest, ShapiroWilk},
    stats::DescriptiveStats,
    summary::DescriptiveSummary,
};
use research_core::{utils::non_missing, Error, Result};
use tracing::{debug, instrument};

/// Conventional significance level for the Shapiro-Wilk verdict
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Summarizer configured with a significance level and two normality backends
///
/// # Example
/// ```rust
/// use research_describe::{AndersonDarling, AndersonPValue, Describer};
///
/// let describer = Describer::new(0.01)
///     .unwrap()
///     .with_anderson(AndersonDarling::new().with_pvalue(AndersonPValue::Stephens));
///
/// let summary = describer.describe(&[2.1, 3.4, 1.9, 5.6, 4.4, 3.3, 2.8]).unwrap();
/// assert_eq!(summary.n_non_na, 7);
/// ```
#[derive(Debug, Clone)]
pub struct Describer<S = ShapiroWilk, A = AndersonDarling> {
    alpha: f64,
    shapiro: S,
    anderson: A,
}

impl Describer {
    /// Create a summarizer with the built-in tests
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] unless `alpha` is in (0, 1).
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::invalid_alpha(alpha));
        }
        Ok(Self {
            alpha,
            shapiro: ShapiroWilk,
            anderson: AndersonDarling::default(),
        })
    }
}

impl Default for Describer {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            shapiro: ShapiroWilk,
            anderson: AndersonDarling::default(),
        }
    }
}

impl<S: NormalityTest, A: NormalityTest> Describer<S, A> {
    /// Replace the backend reported under the `shapiro_*` keys
    pub fn with_shapiro<T: NormalityTest>(self, shapiro: T) -> Describer<T, A> {
        Describer {
            alpha: self.alpha,
            shapiro,
            anderson: self.anderson,
        }
    }

    /// Replace the backend reported under the `anderson_*` keys
    pub fn with_anderson<T: NormalityTest>(self, anderson: T) -> Describer<S, T> {
        Describer {
            alpha: self.alpha,
            shapiro: self.shapiro,
            anderson,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Summarise `series`, treating NaN entries as missing
    ///
    /// # Errors
    /// Fails when either normality test cannot run on the non-missing
    /// values (too few of them, zero spread, infinities).
    #[instrument(level = "debug", skip_all, fields(n = series.len(), alpha = self.alpha))]
    pub fn describe(&self, series: &[f64]) -> Result<DescriptiveSummary> {
        let present = non_missing(series);
        debug!(
            present = present.len(),
            missing = series.len() - present.len(),
            "summarising series"
        );

        let stats = DescriptiveStats::from_present(&present);
        let shapiro = self.shapiro.test(&present)?;
        let anderson = self.anderson.test(&present)?;

        Ok(DescriptiveSummary {
            stats,
            n_non_na: present.len(),
            shapiro,
            shapiro_normality: shapiro.fails_to_reject(self.alpha),
            anderson,
        })
    }

    /// Summarise a series whose missing entries are `None`
    pub fn describe_options(&self, series: &[Option<f64>]) -> Result<DescriptiveSummary> {
        let values: Vec<f64> = series.iter().map(|v| v.unwrap_or(f64::NAN)).collect();
        self.describe(&values)
    }
}

/// Summarise `series` with the built-in normality tests
///
/// # Example
/// ```rust
/// use research_describe::describe;
///
/// let summary = describe(&[1.0, 2.0, 3.0, 4.0, 5.0, f64::NAN], 0.05).unwrap();
/// assert_eq!(summary.n_non_na, 5);
/// assert!(summary.shapiro_normality);
/// ```
pub fn describe(series: &[f64], alpha: f64) -> Result<DescriptiveSummary> {
    Describer::new(alpha)?.describe(series)
}

/// Summarise a series with explicit missing markers
pub fn describe_options(series: &[Option<f64>], alpha: f64) -> Result<DescriptiveSummary> {
    Describer::new(alpha)?.describe_options(series)
}
