//! Table inputs and semantic column kinds.
//!
//! A table is a Polars [`DataFrame`]; the missing marker is the Polars null.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, Series};
use scrub_common::{is_numeric_dtype, is_temporal_dtype};
use serde::Serialize;

use crate::error::Result;

/// Semantic type of a column, derived from its dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Numeric,
    Datetime,
    Text,
    /// Booleans and nested types. Never standardized or coerced.
    Other,
}

impl ColumnKind {
    pub fn of(dtype: &DataType) -> Self {
        if is_numeric_dtype(dtype) {
            ColumnKind::Numeric
        } else if is_temporal_dtype(dtype) {
            ColumnKind::Datetime
        } else if matches!(dtype, DataType::String) {
            ColumnKind::Text
        } else {
            ColumnKind::Other
        }
    }

    pub fn of_column(column: &Column) -> Self {
        Self::of(column.dtype())
    }
}

/// Anything the cleaner accepts: a whole table or a single column.
///
/// The input is only borrowed. Implementations return an owned copy so
/// callers never observe mutation.
pub trait TableInput {
    fn to_table(&self) -> Result<DataFrame>;
}

impl TableInput for DataFrame {
    fn to_table(&self) -> Result<DataFrame> {
        Ok(self.clone())
    }
}

impl TableInput for Series {
    fn to_table(&self) -> Result<DataFrame> {
        Ok(DataFrame::new(vec![self.clone().into_column()])?)
    }
}

impl TableInput for Column {
    fn to_table(&self) -> Result<DataFrame> {
        Ok(DataFrame::new(vec![self.clone()])?)
    }
}

/// Column names of a frame as owned strings, in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
