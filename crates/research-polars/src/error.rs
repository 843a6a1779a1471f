//! Error types for research-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Research core error: {0}")]
    Core(#[from] research_core::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Shape error: column '{column}' of type {dtype} is not one-dimensional")]
    Shape { column: String, dtype: String },

    #[error("Column '{column}': {source}")]
    Column {
        column: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the name of the column whose processing failed
    pub(crate) fn in_column(self, column: &str) -> Self {
        Self::Column {
            column: column.to_string(),
            source: Box::new(self),
        }
    }

    /// Name of the failing column, if the error is attributed to one
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Column { column, .. } => Some(column),
            Self::Shape { column, .. } => Some(column),
            _ => None,
        }
    }

    /// The core statistical error behind this one, if any
    pub fn core(&self) -> Option<&research_core::Error> {
        match self {
            Self::Core(err) => Some(err),
            Self::Column { source, .. } => source.core(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
