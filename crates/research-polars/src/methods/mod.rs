//! Per-column implementations behind [`crate::ResearchStatsExt`]

pub(crate) mod describe;
pub(crate) mod interval;

use crate::{Error, Result};
use polars::prelude::*;

/// Look up the named columns, or take every column when `names` is `None`
pub(crate) fn select_columns<'a>(
    df: &'a DataFrame,
    names: Option<&[&str]>,
) -> Result<Vec<&'a Column>> {
    match names {
        None => Ok(df.get_columns().iter().collect()),
        Some(names) => names
            .iter()
            .map(|name| {
                df.column(name)
                    .map_err(|_| Error::InvalidColumn(name.to_string()))
            })
            .collect(),
    }
}

/// Convert a column to `f64` values with nulls as NaN
///
/// Nested columns hold more than one value per row and are rejected as a
/// shape error; other non-numeric columns are a type mismatch.
pub(crate) fn column_values(column: &Column) -> Result<Vec<f64>> {
    let dtype = column.dtype();
    if dtype.is_nested() {
        return Err(Error::Shape {
            column: column.name().to_string(),
            dtype: dtype.to_string(),
        });
    }

    match dtype {
        DataType::Float64
        | DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => {
            let float_column = column.cast(&DataType::Float64)?;
            Ok(float_column
                .f64()?
                .iter()
                .map(|value| value.unwrap_or(f64::NAN))
                .collect())
        }
        dt => Err(Error::TypeMismatch {
            expected: "numeric".to_string(),
            got: format!("{:?}", dt),
        }),
    }
}
