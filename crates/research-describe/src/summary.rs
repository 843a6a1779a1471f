//! Named statistics produced by the summarizer

use crate::{normality::TestOutcome, stats::DescriptiveStats};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::fmt;

/// Statistic names in report order
pub const STAT_NAMES: [&str; 16] = [
    "count",
    "mean",
    "std",
    "min",
    "25%",
    "50%",
    "75%",
    "max",
    "skew",
    "kurtosis",
    "n_non_na",
    "shapiro_stat",
    "shapiro_pvalue",
    "shapiro_normality",
    "anderson_stat",
    "anderson_pvalue",
];

/// A single value in a [`DescriptiveSummary`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(usize),
    Number(f64),
    Flag(bool),
}

impl StatValue {
    /// Numeric view used by tabular reports: counts as floats, flags as 1/0
    pub fn as_f64(&self) -> f64 {
        match *self {
            StatValue::Count(n) => n as f64,
            StatValue::Number(x) => x,
            StatValue::Flag(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Number(x) => write!(f, "{x:.6}"),
            StatValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Descriptive statistics of one series together with its normality tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveSummary {
    pub stats: DescriptiveStats,
    /// Number of non-missing entries
    pub n_non_na: usize,
    pub shapiro: TestOutcome,
    /// Shapiro-Wilk p-value exceeds the significance level
    pub shapiro_normality: bool,
    pub anderson: TestOutcome,
}

impl DescriptiveSummary {
    /// Look up a statistic by its report name
    ///
    /// ```rust
    /// use research_describe::{describe, StatValue};
    ///
    /// let summary = describe(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.05).unwrap();
    /// assert_eq!(summary.get("50%"), Some(StatValue::Number(3.0)));
    /// assert_eq!(summary.get("unknown"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<StatValue> {
        let s = &self.stats;
        let value = match name {
            "count" => StatValue::Count(s.count),
            "mean" => StatValue::Number(s.mean),
            "std" => StatValue::Number(s.std),
            "min" => StatValue::Number(s.min),
            "25%" => StatValue::Number(s.q25),
            "50%" => StatValue::Number(s.q50),
            "75%" => StatValue::Number(s.q75),
            "max" => StatValue::Number(s.max),
            "skew" => StatValue::Number(s.skew),
            "kurtosis" => StatValue::Number(s.kurtosis),
            "n_non_na" => StatValue::Count(self.n_non_na),
            "shapiro_stat" => StatValue::Number(self.shapiro.statistic),
            "shapiro_pvalue" => StatValue::Number(self.shapiro.p_value),
            "shapiro_normality" => StatValue::Flag(self.shapiro_normality),
            "anderson_stat" => StatValue::Number(self.anderson.statistic),
            "anderson_pvalue" => StatValue::Number(self.anderson.p_value),
            _ => return None,
        };
        Some(value)
    }

    /// All statistics in report order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, StatValue)> + '_ {
        STAT_NAMES
            .iter()
            .filter_map(move |&name| self.get(name).map(|value| (name, value)))
    }
}

impl Serialize for DescriptiveSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(STAT_NAMES.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

impl fmt::Display for DescriptiveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name:<18}{value}")?;
        }
        Ok(())
    }
}
