//! Column-wise credible intervals

use super::{column_values, select_columns};
use crate::Result;
use polars::prelude::*;
use research_interval::{IntervalMethod, ProbabilityMass};
use tracing::instrument;

#[instrument(level = "debug", skip(df, columns), fields(columns = columns.len()))]
pub(crate) fn credible_intervals_impl(
    df: &DataFrame,
    columns: &[&str],
    mass: f64,
    method: IntervalMethod,
) -> Result<DataFrame> {
    let mass = ProbabilityMass::new(mass)?;
    let mut result_series = Vec::with_capacity(2 * columns.len());

    for column in select_columns(df, Some(columns))? {
        let col_name = column.name().to_string();
        let values = column_values(column).map_err(|err| err.in_column(&col_name))?;
        let interval = method
            .estimate(&values, mass.value())
            .map_err(|err| crate::Error::from(err).in_column(&col_name))?;

        let lower = format!("{}_lower", col_name);
        let upper = format!("{}_upper", col_name);
        result_series.push(Series::new(lower.as_str().into(), vec![interval.lower]).into());
        result_series.push(Series::new(upper.as_str().into(), vec![interval.upper]).into());
    }

    Ok(DataFrame::new(result_series)?)
}
