//! Row-wise cell extraction from Polars columns.

use polars::prelude::{AnyValue, Column, PolarsResult};
use scrub_common::{any_to_f64, any_to_string};

/// Cells of a column rendered as strings, `None` for nulls.
pub fn text_cells(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    (0..column.len())
        .map(|idx| {
            column.get(idx).map(|value| match value {
                AnyValue::Null => None,
                other => Some(any_to_string(other)),
            })
        })
        .collect()
}

/// Cells of a column read as numbers, `None` for nulls and non-numbers.
pub fn numeric_cells(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    (0..column.len())
        .map(|idx| column.get(idx).map(any_to_f64))
        .collect()
}
