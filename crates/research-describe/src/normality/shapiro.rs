//! Shapiro-Wilk test
//!
//! Royston's approximation (Applied Statistics algorithm R94): polynomial
//! approximations for the extreme coefficients, scaled normal scores for
//! the rest, and a normalising transform of `1 - W` for the p-value.

use super::{norm_ppf, norm_sf, poly, NormalityTest, TestOutcome};
use research_core::{utils::sorted, Error, Result};
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use tracing::warn;

const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.544, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

const SMALL: f64 = 1e-19;
const SMALLEST_P: f64 = 1e-99;

/// Shapiro-Wilk W test for normality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapiroWilk;

impl ShapiroWilk {
    pub const NAME: &'static str = "Shapiro-Wilk";

    /// Smallest sample the test accepts
    pub const MIN_SAMPLES: usize = 3;

    /// Largest sample the p-value approximation was fitted for
    pub const MAX_ACCURATE_SAMPLES: usize = 5000;

    pub fn new() -> Self {
        Self
    }
}

impl NormalityTest for ShapiroWilk {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn test(&self, samples: &[f64]) -> Result<TestOutcome> {
        let n = samples.len();
        if n < Self::MIN_SAMPLES {
            return Err(Error::InsufficientData {
                expected: Self::MIN_SAMPLES,
                actual: n,
            });
        }
        if samples.iter().any(|x| !x.is_finite()) {
            return Err(Error::degenerate(Self::NAME, "data contains infinite values"));
        }
        if n > Self::MAX_ACCURATE_SAMPLES {
            warn!(n, "Shapiro-Wilk p-value may be inaccurate for N > 5000");
        }

        let mut x = sorted(samples);
        let median = x[n / 2];
        x.iter_mut().for_each(|v| *v -= median);

        let range = x[n - 1] - x[0];
        if range < SMALL {
            return Err(Error::degenerate(Self::NAME, "data has zero range"));
        }

        let w = w_statistic(&x, range, &coefficients(n));
        Ok(TestOutcome::new(w, p_value(w, n)))
    }
}

/// Upper half of the antisymmetric coefficient vector, largest first.
fn coefficients(n: usize) -> Vec<f64> {
    if n == 3 {
        return vec![FRAC_1_SQRT_2];
    }

    let half = n / 2;
    let an = n as f64;
    let an25 = an + 0.25;
    let m: Vec<f64> = (1..=half)
        .map(|i| norm_ppf((i as f64 - 0.375) / an25))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / an.sqrt();

    let mut a = vec![0.0; half];
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    a[0] = a1;

    let (first, fac) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };
    for i in first..half {
        a[i] = -m[i] / fac;
    }
    a
}

/// W as the squared correlation between the ordered sample and the
/// full coefficient vector.
fn w_statistic(x: &[f64], range: f64, half_coefficients: &[f64]) -> f64 {
    let n = x.len();
    let mut full = vec![0.0; n];
    for (i, &a) in half_coefficients.iter().enumerate() {
        full[i] = -a;
        full[n - 1 - i] = a;
    }

    let nf = n as f64;
    let mean_a = full.iter().sum::<f64>() / nf;
    let mean_x = x.iter().map(|v| v / range).sum::<f64>() / nf;

    let (mut ssa, mut ssx, mut sax) = (0.0, 0.0, 0.0);
    for (&a, &v) in full.iter().zip(x) {
        let asa = a - mean_a;
        let xsx = v / range - mean_x;
        ssa += asa * asa;
        ssx += xsx * xsx;
        sax += asa * xsx;
    }

    let ssassx = (ssa * ssx).sqrt();
    1.0 - (ssassx - sax) * (ssassx + sax) / (ssa * ssx)
}

fn p_value(w: f64, n: usize) -> f64 {
    if n == 3 {
        let p = (6.0 / PI) * (w.min(1.0).sqrt().asin() - PI / 3.0);
        return p.max(0.0);
    }

    let an = n as f64;
    let w1 = (1.0 - w).ln();
    let (y, m, s) = if n <= 11 {
        let gamma = poly(&G, an);
        if w1 >= gamma {
            return SMALLEST_P;
        }
        (
            -(gamma - w1).ln(),
            poly(&C3, an),
            poly(&C4, an).exp(),
        )
    } else {
        let ln_n = an.ln();
        (w1, poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };
    norm_sf((y - m) / s)
}
