//! Basic descriptive statistics with NaN sentinels

use crate::moments::{kurtosis, skewness};
use research_core::{
    quantile::quantile_sorted,
    utils::{mean, non_missing, std_dev},
};
use serde::{Deserialize, Serialize};

/// Location, spread and shape of a series, ignoring missing entries
///
/// Never fails: statistics that need more values than are present are NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1)
    pub std: f64,
    pub min: f64,
    /// 25th percentile
    pub q25: f64,
    /// Median
    pub q50: f64,
    /// 75th percentile
    pub q75: f64,
    pub max: f64,
    pub skew: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
}

impl DescriptiveStats {
    /// Compute statistics of `series`, treating NaN as missing
    ///
    /// ```rust
    /// use research_describe::DescriptiveStats;
    ///
    /// let stats = DescriptiveStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0, f64::NAN]);
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.q50, 3.0);
    /// ```
    pub fn compute(series: &[f64]) -> Self {
        Self::from_present(&non_missing(series))
    }

    /// Compute statistics of values already stripped of missing entries
    pub fn from_present(values: &[f64]) -> Self {
        let mut ordered = values.to_vec();
        ordered.sort_unstable_by(f64::total_cmp);

        let (min, max) = match (ordered.first(), ordered.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (f64::NAN, f64::NAN),
        };

        Self {
            count: values.len(),
            mean: mean(values),
            std: std_dev(values),
            min,
            q25: quantile_sorted(&ordered, 0.25),
            q50: quantile_sorted(&ordered, 0.5),
            q75: quantile_sorted(&ordered, 0.75),
            max,
            skew: skewness(values),
            kurtosis: kurtosis(values),
        }
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q75 - self.q25
    }
}
