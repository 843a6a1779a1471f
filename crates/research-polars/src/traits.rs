//! Extension trait for research statistics on Polars DataFrames

use crate::{
    methods::{describe::describe_frame_impl, interval::credible_intervals_impl},
    MultiSeriesSummary, Result,
};
use polars::prelude::*;
use research_describe::{Describer, NormalityTest};
use research_interval::IntervalMethod;

/// Extension trait for summarising DataFrame columns
pub trait ResearchStatsExt {
    /// Describe every column with the built-in normality tests
    ///
    /// # Arguments
    /// * `alpha` - Significance level for the Shapiro-Wilk verdict, in (0, 1)
    ///
    /// # Returns
    /// One summary per column, in column order. The first column that
    /// cannot be converted or summarised fails the whole call with
    /// [`crate::Error::Column`] naming it.
    fn describe_all(&self, alpha: f64) -> Result<MultiSeriesSummary>;

    /// Describe the named columns only
    fn describe_columns(&self, columns: &[&str], alpha: f64) -> Result<MultiSeriesSummary>;

    /// Describe every column with a configured summarizer
    fn describe_with<S, A>(&self, describer: &Describer<S, A>) -> Result<MultiSeriesSummary>
    where
        S: NormalityTest,
        A: NormalityTest;

    /// Compute a credible interval for each named column
    ///
    /// # Arguments
    /// * `columns` - Column names to compute intervals for
    /// * `mass` - Probability mass in (0, 1]
    /// * `method` - Highest density or equal-tailed
    ///
    /// # Returns
    /// One-row DataFrame with columns `{column}_lower` and `{column}_upper`
    fn credible_intervals(
        &self,
        columns: &[&str],
        mass: f64,
        method: IntervalMethod,
    ) -> Result<DataFrame>;
}

impl ResearchStatsExt for DataFrame {
    fn describe_all(&self, alpha: f64) -> Result<MultiSeriesSummary> {
        describe_frame_impl(self, None, &Describer::new(alpha)?)
    }

    fn describe_columns(&self, columns: &[&str], alpha: f64) -> Result<MultiSeriesSummary> {
        describe_frame_impl(self, Some(columns), &Describer::new(alpha)?)
    }

    fn describe_with<S, A>(&self, describer: &Describer<S, A>) -> Result<MultiSeriesSummary>
    where
        S: NormalityTest,
        A: NormalityTest,
    {
        describe_frame_impl(self, None, describer)
    }

    fn credible_intervals(
        &self,
        columns: &[&str],
        mass: f64,
        method: IntervalMethod,
    ) -> Result<DataFrame> {
        credible_intervals_impl(self, columns, mass, method)
    }
}

/// Describe every column of `df` with a configured summarizer
pub fn describe_frame<S, A>(describer: &Describer<S, A>, df: &DataFrame) -> Result<MultiSeriesSummary>
where
    S: NormalityTest,
    A: NormalityTest,
{
    df.describe_with(describer)
}
