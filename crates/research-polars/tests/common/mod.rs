//! Common test utilities for research-polars tests

use polars::prelude::*;

/// A frame with one normal-looking column, one skewed column and one
/// integer column holding a null
pub fn mixed_frame() -> DataFrame {
    df![
        "symmetric" => [2.1, 3.4, 1.9, 5.6, 4.4, 3.3, 2.8, 3.9, 4.1, 3.0, 2.5, 3.7],
        "skewed" => [1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, f64::NAN, f64::NAN],
        "counts" => [Some(3i64), Some(5), None, Some(4), Some(8), Some(2), Some(6), Some(5), Some(7), Some(4), Some(3), Some(9)],
    ]
    .unwrap()
}

/// Helper function to extract a single value from a result DataFrame
pub fn extract_single_value(df: &DataFrame, col_name: &str) -> f64 {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .get(0)
        .unwrap()
}

/// Value of `statistic` for `column` in a report frame
pub fn report_value(report: &DataFrame, statistic: &str, column: &str) -> f64 {
    let names = report.column("statistic").unwrap().str().unwrap();
    let row = names
        .iter()
        .position(|name| name == Some(statistic))
        .unwrap();
    report.column(column).unwrap().f64().unwrap().get(row).unwrap()
}
