//! Column-wise descriptive summaries

use super::{column_values, select_columns};
use crate::{Error, MultiSeriesSummary, Result};
use polars::prelude::*;
use research_describe::{DescriptiveSummary, Describer, NormalityTest};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn summarise<S, A>(
    describer: &Describer<S, A>,
    name: String,
    values: &[f64],
) -> Result<(String, DescriptiveSummary)>
where
    S: NormalityTest,
    A: NormalityTest,
{
    match describer.describe(values) {
        Ok(summary) => Ok((name, summary)),
        Err(err) => Err(Error::from(err).in_column(&name)),
    }
}

#[instrument(level = "debug", skip_all, fields(alpha = describer.alpha()))]
pub(crate) fn describe_frame_impl<S, A>(
    df: &DataFrame,
    columns: Option<&[&str]>,
    describer: &Describer<S, A>,
) -> Result<MultiSeriesSummary>
where
    S: NormalityTest,
    A: NormalityTest,
{
    let prepared = select_columns(df, columns)?
        .into_iter()
        .map(|column| {
            let name = column.name().to_string();
            match column_values(column) {
                Ok(values) => Ok((name, values)),
                Err(err) => Err(err.in_column(&name)),
            }
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(columns = prepared.len(), rows = df.height(), "describing columns");

    #[cfg(feature = "parallel")]
    let summaries = prepared
        .into_par_iter()
        .map(|(name, values)| summarise(describer, name, &values))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let summaries = prepared
        .into_iter()
        .map(|(name, values)| summarise(describer, name, &values))
        .collect::<Result<Vec<_>>>()?;

    Ok(summaries.into_iter().collect())
}
