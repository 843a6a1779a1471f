//! Polars integration for descriptive summaries and credible intervals
//!
//! This crate summarises DataFrame columns through a single extension
//! trait. Numeric columns of any width are read as `f64` with nulls treated
//! as missing; nested columns are rejected as not one-dimensional.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use research_polars::{IntervalMethod, ResearchStatsExt};
//!
//! let df = df![
//!     "reaction_ms" => [212.0, 198.5, 250.1, 231.7, 205.3, 219.9],
//!     "errors" => [Some(1i64), Some(0), None, Some(2), Some(1), Some(0)],
//! ]
//! .unwrap();
//!
//! let summary = df.describe_all(0.05).unwrap();
//! assert_eq!(summary.len(), 2);
//! println!("{}", summary.to_dataframe().unwrap());
//!
//! let intervals = df
//!     .credible_intervals(&["reaction_ms"], 0.9, IntervalMethod::Hdi)
//!     .unwrap();
//! assert_eq!(intervals.shape(), (1, 2));
//! ```

mod error;
mod methods;
mod summary;
mod traits;

pub use error::{Error, Result};
pub use summary::MultiSeriesSummary;
pub use traits::{describe_frame, ResearchStatsExt};

// Re-export the configuration types used by the extension trait
pub use research_describe::{AndersonDarling, AndersonPValue, Describer, ShapiroWilk};
pub use research_interval::{IntervalMethod, ProbabilityMass};
