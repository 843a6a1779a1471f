//! Descriptive statistics with normality tests
//!
//! [`describe`] reports pandas-style location and spread, bias-corrected
//! skewness and excess kurtosis, and the outcome of two normality tests:
//!
//! - **Shapiro-Wilk**: W statistic, p-value and a verdict at the chosen
//!   significance level
//! - **Anderson-Darling**: A² statistic and its p-value
//!
//! NaN entries are treated as missing. The descriptive part never fails;
//! a normality test that cannot run on the data is an error.
//!
//! # Examples
//!
//! ```rust
//! use research_describe::describe;
//!
//! let series = [2.1, 3.4, 1.9, 5.6, 4.4, 3.3, 2.8, 3.9, 4.1, 3.0, 2.5, 3.7];
//! let summary = describe(&series, 0.05).unwrap();
//!
//! for (name, value) in summary.iter() {
//!     println!("{name}: {value}");
//! }
//! ```

pub mod describe;
pub mod moments;
pub mod normality;
pub mod stats;
pub mod summary;

// Re-exports
pub use describe::{describe, describe_options, Describer, DEFAULT_ALPHA};
pub use normality::{
    AndersonDarling, AndersonPValue, NormalityTest, ShapiroWilk, TestOutcome,
};
pub use stats::DescriptiveStats;
pub use summary::{DescriptiveSummary, StatValue, STAT_NAMES};
