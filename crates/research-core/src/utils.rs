//! Utility functions for working with sample slices

use std::cmp::Ordering;

/// Total order on `f64` that places NaN after every other value.
#[inline]
pub fn nan_last_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(b),
    }
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use research_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(nan_last_cmp);
    sorted
}

/// Copy the finite values of `data` and sort them ascending.
///
/// NaN and both infinities are dropped.
///
/// ```rust
/// use research_core::utils::finite_sorted;
///
/// let clean = finite_sorted(&[3.0, f64::NAN, 1.0, f64::INFINITY, 2.0]);
/// assert_eq!(clean, vec![1.0, 2.0, 3.0]);
/// ```
pub fn finite_sorted(data: &[f64]) -> Vec<f64> {
    let mut clean: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    clean.sort_unstable_by(f64::total_cmp);
    clean
}

/// Copy the non-missing values of `data`, where NaN marks a missing entry.
///
/// Infinite values are kept.
pub fn non_missing(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| !x.is_nan()).collect()
}

/// Calculate the mean of a slice
///
/// Returns NaN for empty slices.
///
/// # Examples
///
/// ```rust
/// use research_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation (ddof = 1)
///
/// Returns NaN for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use research_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}
