//! Summarise every column of a small experiment table
//!
//! Run with `RUST_LOG=debug` to see the per-column tracing events.

use polars::prelude::*;
use research_polars::{IntervalMethod, ResearchStatsExt};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let df = df![
        "control" => [4.1, 3.8, 5.2, 4.7, 4.4, 3.9, 5.0, 4.6, 4.3, 4.8],
        "treatment" => [Some(5.9), Some(6.4), None, Some(5.1), Some(7.8), Some(6.0), Some(5.5), Some(9.6), Some(6.2), Some(5.8)],
    ]?;

    let summary = df.describe_all(0.05)?;
    println!("{}", summary.to_dataframe()?);

    for (column, stats) in summary.iter() {
        println!(
            "{column}: Shapiro-Wilk p = {:.4} ({}), Anderson-Darling p = {:.3}",
            stats.shapiro.p_value,
            if stats.shapiro_normality { "normal" } else { "not normal" },
            stats.anderson.p_value,
        );
    }

    let columns = ["control", "treatment"];
    let hdi = df.credible_intervals(&columns, 0.9, IntervalMethod::Hdi)?;
    let eti = df.credible_intervals(&columns, 0.9, IntervalMethod::Eti)?;
    println!("90% HDI\n{hdi}\n90% ETI\n{eti}");

    Ok(())
}
