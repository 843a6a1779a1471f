//! End-to-end: summarise posterior draws through the facade crate

use anyhow::Result;
use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gamma, Normal};
use research_stats::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_symmetric_posterior() -> Result<()> {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let normal = Normal::new(0.0, 1.0)?;
    let draws: Vec<f64> = (0..4000).map(|_| normal.sample(&mut rng)).collect();

    let both = credible_intervals(&draws, 0.95)?;
    // Both intervals approach +/-1.96 for a standard normal
    assert_abs_diff_eq!(both.hdi.lower, -1.96, epsilon = 0.15);
    assert_abs_diff_eq!(both.hdi.upper, 1.96, epsilon = 0.15);
    assert_abs_diff_eq!(both.eti.lower, both.hdi.lower, epsilon = 0.15);

    let summary = describe(&draws, 0.05)?;
    assert_abs_diff_eq!(summary.stats.mean, 0.0, epsilon = 0.1);
    assert_abs_diff_eq!(summary.stats.std, 1.0, epsilon = 0.1);
    assert!(summary.shapiro.statistic > 0.99);
    Ok(())
}

#[test]
fn test_skewed_posterior() -> Result<()> {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let gamma = Gamma::new(2.0, 1.0)?;
    let draws: Vec<f64> = (0..2000).map(|_| gamma.sample(&mut rng)).collect();

    let hdi = highest_density_interval(&draws, 0.9)?;
    let eti = equal_tailed_interval(&draws, 0.9)?;
    assert!(hdi.width() < eti.width());
    assert!(hdi.lower < eti.lower);

    let summary = describe(&draws, 0.05)?;
    assert!(summary.stats.skew > 0.8);
    assert!(!summary.shapiro_normality);
    Ok(())
}

#[cfg(feature = "polars")]
#[test]
fn test_frame_report() -> Result<()> {
    use polars::prelude::*;

    init_tracing();
    let df = df![
        "alpha" => [0.9, 1.1, 1.0, 1.3, 0.7, 1.2, 0.8, 1.05],
        "beta" => [2.0, 2.5, 1.5, 3.5, 2.25, 1.75, 3.0, 2.75],
    ]?;

    let summary = df.describe_all(0.05)?;
    assert_eq!(summary.len(), 2);
    let report = summary.to_dataframe()?;
    assert_eq!(report.height(), 16);
    Ok(())
}
