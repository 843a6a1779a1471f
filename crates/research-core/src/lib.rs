//! Core types for research statistics
//!
//! This crate holds the pieces shared by the interval estimators and the
//! descriptive summarizer:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`utils`]: sample cleaning (finite filtering, NaN-aware sorting) and
//!   basic moments
//! - [`quantile`]: linear-interpolation quantiles over sorted samples
//!
//! # Example
//!
//! ```rust
//! use research_core::{quantile::quantile_sorted, utils::finite_sorted};
//!
//! let clean = finite_sorted(&[3.0, f64::NAN, 1.0, 2.0]);
//! assert_eq!(quantile_sorted(&clean, 0.5), 2.0);
//! ```

pub mod error;
pub mod quantile;
pub mod utils;

// Re-export core types
pub use error::{ensure_one_dimensional, Error, Result};
pub use quantile::{quantile, quantile_sorted, quantiles_sorted};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::quantile::{quantile, quantile_sorted};
    pub use crate::utils::{finite_sorted, mean, non_missing, std_dev};
}
