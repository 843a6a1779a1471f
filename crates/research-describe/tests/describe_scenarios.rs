use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};
use research_core::{quantile::quantile, Error, Result};
use research_describe::{
    describe, AndersonDarling, AndersonPValue, Describer, NormalityTest, ShapiroWilk,
    StatValue, TestOutcome, STAT_NAMES,
};

const SKEWED: [f64; 10] = [1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0];

#[test]
fn test_missing_entries_are_ignored() {
    let summary = describe(&[1.0, 2.0, 3.0, 4.0, 5.0, f64::NAN], 0.05).unwrap();

    assert_eq!(summary.n_non_na, 5);
    assert_eq!(summary.get("count"), Some(StatValue::Count(5)));
    assert_eq!(summary.get("mean"), Some(StatValue::Number(3.0)));
    assert_eq!(summary.stats.min, 1.0);
    assert_eq!(summary.stats.q25, 2.0);
    assert_eq!(summary.stats.q50, 3.0);
    assert_eq!(summary.stats.q75, 4.0);
    assert_eq!(summary.stats.max, 5.0);
    assert_relative_eq!(summary.stats.std, 1.5811388300841898, epsilon = 1e-12);
    assert_eq!(summary.stats.skew, 0.0);
    assert_relative_eq!(summary.stats.kurtosis, -1.2, epsilon = 1e-12);

    assert_relative_eq!(summary.shapiro.statistic, 0.9867621554477194, epsilon = 1e-6);
    assert_relative_eq!(summary.shapiro.p_value, 0.9671739359680398, epsilon = 1e-4);
    assert!(summary.shapiro_normality);
    assert_relative_eq!(summary.anderson.statistic, 0.1435942036725244, epsilon = 1e-9);
    assert_eq!(summary.anderson.p_value, 0.15);
}

#[test]
fn test_constant_series_fails_shapiro() {
    let err = describe(&[5.0; 5], 0.05).unwrap_err();
    assert_eq!(err.failed_test(), Some(ShapiroWilk::NAME));
}

#[test]
fn test_median_matches_quantile() {
    let series = [7.5, f64::NAN, 1.25, 3.0, 9.0, 2.0, 4.5, 6.0];
    let summary = describe(&series, 0.05).unwrap();
    assert_eq!(summary.stats.q50, quantile(&series, 0.5));
}

#[test]
fn test_skewed_series() {
    let summary = describe(&SKEWED, 0.05).unwrap();

    assert_relative_eq!(summary.stats.skew, 1.7015514090849961, epsilon = 1e-10);
    assert_relative_eq!(summary.stats.kurtosis, 2.439857657949223, epsilon = 1e-10);
    assert_relative_eq!(summary.shapiro.statistic, 0.7621364114945075, epsilon = 1e-6);
    assert_relative_eq!(summary.shapiro.p_value, 0.00501580303321103, epsilon = 1e-4);
    assert!(!summary.shapiro_normality);
    assert_relative_eq!(summary.anderson.statistic, 0.9970227108668617, epsilon = 1e-9);
    assert_eq!(summary.anderson.p_value, 0.01);
}

#[test]
fn test_verdict_follows_alpha() {
    let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 20.0];
    // Shapiro-Wilk p is about 0.026
    assert!(!describe(&series, 0.05).unwrap().shapiro_normality);
    assert!(describe(&series, 0.01).unwrap().shapiro_normality);
}

#[test]
fn test_stephens_backend() {
    let summary = Describer::new(0.05)
        .unwrap()
        .with_anderson(AndersonDarling::new().with_pvalue(AndersonPValue::Stephens))
        .describe(&SKEWED)
        .unwrap();
    assert_relative_eq!(summary.anderson.p_value, 0.00721926374418881, epsilon = 1e-8);
}

#[test]
fn test_keys_in_report_order() {
    let summary = describe(&SKEWED, 0.05).unwrap();
    let names: Vec<&str> = summary.iter().map(|(name, _)| name).collect();
    assert_eq!(names, STAT_NAMES);

    let json = serde_json::to_value(summary).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), STAT_NAMES.len());
    assert_eq!(object["count"], 10);
    assert_eq!(object["shapiro_normality"], false);
    assert_eq!(object["50%"], 2.5);
}

#[test]
fn test_invalid_alpha() {
    assert!(matches!(
        describe(&SKEWED, 1.0),
        Err(Error::InvalidParameter(_))
    ));
}

/// Backend reporting the sample size and a fixed p-value
struct Fixed(f64);

impl NormalityTest for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn test(&self, samples: &[f64]) -> Result<TestOutcome> {
        Ok(TestOutcome::new(samples.len() as f64, self.0))
    }
}

/// Backend that always refuses
struct Refusing;

impl NormalityTest for Refusing {
    fn name(&self) -> &'static str {
        "refusing"
    }

    fn test(&self, _samples: &[f64]) -> Result<TestOutcome> {
        Err(Error::degenerate("refusing", "never runs"))
    }
}

#[test]
fn test_custom_backends() {
    let summary = Describer::new(0.05)
        .unwrap()
        .with_shapiro(Fixed(0.5))
        .with_anderson(Fixed(0.01))
        .describe(&[1.0, f64::NAN, 2.0])
        .unwrap();

    assert_eq!(summary.shapiro.statistic, 2.0);
    assert!(summary.shapiro_normality);
    assert_eq!(summary.anderson.p_value, 0.01);
}

#[test]
fn test_backend_failure_propagates() {
    let err = Describer::new(0.05)
        .unwrap()
        .with_anderson(Refusing)
        .describe(&SKEWED)
        .unwrap_err();
    assert_eq!(err.failed_test(), Some("refusing"));
}

#[test]
fn test_sampled_normal_and_exponential() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let normal = Normal::new(10.0, 2.0).unwrap();
    let gaussian: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng)).collect();

    let summary = describe(&gaussian, 0.05).unwrap();
    assert!(summary.shapiro.statistic > 0.99);
    assert!(summary.stats.skew.abs() < 0.5);

    let exp = Exp::new(1.0).unwrap();
    let waiting: Vec<f64> = (0..500).map(|_| exp.sample(&mut rng)).collect();

    let summary = describe(&waiting, 0.05).unwrap();
    assert!(summary.shapiro.p_value < 1e-6);
    assert!(!summary.shapiro_normality);
    assert_eq!(summary.anderson.p_value, 0.01);
    assert!(summary.stats.skew > 1.0);
}
