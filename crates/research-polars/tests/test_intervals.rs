//! Tests for column-wise credible intervals

mod common;

use approx::assert_relative_eq;
use common::extract_single_value;
use polars::prelude::*;
use research_polars::{Error, IntervalMethod, ResearchStatsExt};

fn frame() -> DataFrame {
    df![
        "ranks" => (1..=10).map(f64::from).collect::<Vec<_>>(),
        "tens" => [Some(10i32), Some(20), None, Some(30), Some(40), Some(50), None, None, None, None],
    ]
    .unwrap()
}

#[test]
fn test_hdi_columns() {
    let result = frame()
        .credible_intervals(&["ranks"], 0.9, IntervalMethod::Hdi)
        .unwrap();

    assert_eq!(result.shape(), (1, 2));
    assert_eq!(extract_single_value(&result, "ranks_lower"), 1.0);
    assert_eq!(extract_single_value(&result, "ranks_upper"), 9.0);
}

#[test]
fn test_eti_ignores_nulls() {
    let result = frame()
        .credible_intervals(&["ranks", "tens"], 0.5, IntervalMethod::Eti)
        .unwrap();

    assert_eq!(result.shape(), (1, 4));
    assert_eq!(extract_single_value(&result, "tens_lower"), 20.0);
    assert_eq!(extract_single_value(&result, "tens_upper"), 40.0);
    assert_relative_eq!(extract_single_value(&result, "ranks_lower"), 3.25, epsilon = 1e-12);
    assert_relative_eq!(extract_single_value(&result, "ranks_upper"), 7.75, epsilon = 1e-12);
}

#[test]
fn test_all_null_column_gives_nan() {
    let df = df!["empty" => [None::<f64>, None, None]].unwrap();
    let result = df
        .credible_intervals(&["empty"], 0.9, IntervalMethod::Hdi)
        .unwrap();
    assert!(extract_single_value(&result, "empty_lower").is_nan());
    assert!(extract_single_value(&result, "empty_upper").is_nan());
}

#[test]
fn test_invalid_mass_is_not_attributed_to_a_column() {
    let err = frame()
        .credible_intervals(&["ranks"], 1.5, IntervalMethod::Hdi)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Core(research_core::Error::InvalidParameter(_))
    ));
}

#[test]
fn test_unknown_column() {
    let err = frame()
        .credible_intervals(&["nope"], 0.9, IntervalMethod::Eti)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidColumn(_)));
}
