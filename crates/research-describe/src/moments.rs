//! Higher-order moments: skewness and kurtosis
//!
//! Bias-corrected sample estimators computed from central sums. Sums whose
//! magnitude is below `1e-14` are treated as exactly zero so that constant
//! data reports no skew instead of rounding noise.

use research_core::utils::mean;

const ROUNDING_FLOOR: f64 = 1e-14;

#[inline]
fn zero_out_rounding(value: f64) -> f64 {
    if value.abs() < ROUNDING_FLOOR {
        0.0
    } else {
        value
    }
}

/// Central sums of squares, cubes and fourth powers
fn central_sums(data: &[f64]) -> (f64, f64, f64) {
    let m = mean(data);
    data.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), &x| {
        let d = x - m;
        let d2 = d * d;
        (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
    })
}

/// Adjusted Fisher-Pearson skewness `G1`
///
/// NaN for fewer than 3 values, zero when the data has no spread.
///
/// ```rust
/// use research_describe::moments::skewness;
///
/// assert_eq!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]), 0.0);
/// assert!(skewness(&[1.0, 2.0]).is_nan());
/// ```
pub fn skewness(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 3 {
        return f64::NAN;
    }
    let (m2, m3, _) = central_sums(data);
    let m2 = zero_out_rounding(m2);
    let m3 = zero_out_rounding(m3);
    if m2 == 0.0 {
        return 0.0;
    }
    let nf = n as f64;
    (nf * (nf - 1.0).sqrt() / (nf - 2.0)) * (m3 / m2.powf(1.5))
}

/// Bias-corrected excess kurtosis `G2`
///
/// NaN for fewer than 4 values, zero when the data has no spread.
pub fn kurtosis(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 4 {
        return f64::NAN;
    }
    let (m2, _, m4) = central_sums(data);
    let m2 = zero_out_rounding(m2);
    let m4 = zero_out_rounding(m4);

    let nf = n as f64;
    let numerator = nf * (nf + 1.0) * (nf - 1.0) * m4;
    let denominator = (nf - 2.0) * (nf - 3.0) * m2 * m2;
    if denominator == 0.0 {
        return 0.0;
    }
    let adjustment = 3.0 * (nf - 1.0).powi(2) / ((nf - 2.0) * (nf - 3.0));
    numerator / denominator - adjustment
}
