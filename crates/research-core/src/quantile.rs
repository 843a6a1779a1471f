//! Linear-interpolation quantiles
//!
//! The estimator places probability `p` at rank `p * (n - 1)` of the sorted
//! sample and interpolates linearly between the two bracketing order
//! statistics (Hyndman & Fan type 7, the default of most array libraries).
//! Both the equal-tailed interval and the descriptive quartiles use it.

use crate::utils::sorted;

/// Linear interpolation between `a` and `b` at fraction `t`.
///
/// Interpolates from the nearer endpoint so that `t == 1` returns `b`
/// exactly. Falls back to the weighted sum when `b - a` overflows.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if !diff.is_finite() {
        return a * (1.0 - t) + b * t;
    }
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Quantile of an ascending, NaN-free slice.
///
/// Returns NaN for an empty slice. `p` must lie in `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// use research_core::quantile::quantile_sorted;
///
/// let data = [10.0, 20.0, 30.0, 40.0, 50.0];
/// assert_eq!(quantile_sorted(&data, 0.25), 20.0);
/// assert_eq!(quantile_sorted(&data, 0.5), 30.0);
/// ```
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p), "probability {p} outside [0, 1]");
    let n = sorted_data.len();
    match n {
        0 => f64::NAN,
        1 => sorted_data[0],
        _ => {
            let h = p * (n - 1) as f64;
            let lo = (h.floor() as usize).min(n - 1);
            let hi = (lo + 1).min(n - 1);
            lerp(sorted_data[lo], sorted_data[hi], h - lo as f64)
        }
    }
}

/// Quantiles of an ascending, NaN-free slice for several probabilities.
pub fn quantiles_sorted(sorted_data: &[f64], probabilities: &[f64]) -> Vec<f64> {
    probabilities
        .iter()
        .map(|&p| quantile_sorted(sorted_data, p))
        .collect()
}

/// Quantile of unsorted data with NaN entries treated as missing.
///
/// ```rust
/// use research_core::quantile::quantile;
///
/// let median = quantile(&[5.0, f64::NAN, 1.0, 3.0], 0.5);
/// assert_eq!(median, 3.0);
/// ```
pub fn quantile(data: &[f64], p: f64) -> f64 {
    let ordered = sorted(data);
    let present = ordered.partition_point(|x| !x.is_nan());
    quantile_sorted(&ordered[..present], p)
}
