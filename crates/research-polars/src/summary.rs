//! Summaries of several columns

use crate::Result;
use polars::prelude::*;
use research_describe::{DescriptiveSummary, STAT_NAMES};

/// Column name → [`DescriptiveSummary`], in input column order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSeriesSummary {
    entries: Vec<(String, DescriptiveSummary)>,
}

impl MultiSeriesSummary {
    /// Summary of the named column
    pub fn get(&self, column: &str) -> Option<&DescriptiveSummary> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, summary)| summary)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DescriptiveSummary)> {
        self.entries
            .iter()
            .map(|(name, summary)| (name.as_str(), summary))
    }

    /// Column names in input order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report layout: a `statistic` column of names followed by one Float64
    /// column per summarised column
    ///
    /// Counts are reported as floats and the normality verdict as 1.0/0.0.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut result_series: Vec<Column> = Vec::with_capacity(self.entries.len() + 1);
        result_series.push(Series::new("statistic".into(), STAT_NAMES.to_vec()).into());

        for (name, summary) in &self.entries {
            let values: Vec<f64> = summary.iter().map(|(_, value)| value.as_f64()).collect();
            result_series.push(Series::new(name.as_str().into(), values).into());
        }

        Ok(DataFrame::new(result_series)?)
    }
}

impl FromIterator<(String, DescriptiveSummary)> for MultiSeriesSummary {
    fn from_iter<I: IntoIterator<Item = (String, DescriptiveSummary)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MultiSeriesSummary {
    type Item = &'a (String, DescriptiveSummary);
    type IntoIter = std::slice::Iter<'a, (String, DescriptiveSummary)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
