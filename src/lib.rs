//! Credible intervals and normality-aware descriptive statistics
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`core`]: error type, sorting helpers and linear quantiles
//! - [`interval`]: highest density and equal-tailed credible intervals
//! - [`describe`]: descriptive statistics with Shapiro-Wilk and
//!   Anderson-Darling normality tests
//! - [`polars`] (feature `polars`): the same summaries over DataFrame columns
//!
//! # Example
//!
//! ```rust
//! use research_stats::prelude::*;
//!
//! let draws = [0.8, 1.1, 1.3, 1.4, 1.6, 1.7, 1.9, 2.2, 2.6, 3.9];
//! let hdi = highest_density_interval(&draws, 0.8).unwrap();
//! let eti = equal_tailed_interval(&draws, 0.8).unwrap();
//! assert!(hdi.width() <= eti.width() + 1e-12);
//!
//! let summary = describe(&draws, 0.05).unwrap();
//! assert_eq!(summary.n_non_na, 10);
//! ```

pub use research_core as core;
pub use research_describe as describe;
pub use research_interval as interval;
#[cfg(feature = "polars")]
pub use research_polars as polars;

pub use research_core::{Error, Result};

pub mod prelude {
    pub use research_core::{quantile::quantile, Error, Result};
    pub use research_describe::{
        describe, describe_options, AndersonDarling, AndersonPValue, Describer,
        DescriptiveStats, DescriptiveSummary, NormalityTest, ShapiroWilk, StatValue,
        TestOutcome,
    };
    pub use research_interval::{
        credible_intervals, equal_tailed_interval, highest_density_interval, EqualTailed,
        HighestDensity, Interval, IntervalEstimator, IntervalMethod, ProbabilityMass,
    };
    #[cfg(feature = "polars")]
    pub use research_polars::{describe_frame, MultiSeriesSummary, ResearchStatsExt};
}
