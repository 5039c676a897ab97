//! Type inference and coercion of text columns.
//!
//! Detection runs on the whole column first: numeric, then datetime. Only a
//! column that passes detection is converted, and the conversion itself maps
//! any value that fails to parse to null.

use chrono::NaiveDateTime;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use scrub_common::{parse_f64, parse_i64};
use scrub_model::{ColumnKind, Result};
use tracing::debug;

use crate::cells::text_cells;
use crate::normalization::{NumericKind, detect_numeric, is_datetime_column, parse_datetime};

/// Target type chosen for a text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferredType {
    Integer,
    Float,
    Datetime,
    Text,
}

/// Infer the type a set of text values can be converted to.
pub fn infer_type<S: AsRef<str>>(values: &[Option<S>]) -> InferredType {
    match detect_numeric(values) {
        Some(NumericKind::Integer) => InferredType::Integer,
        Some(NumericKind::Float) => InferredType::Float,
        None if is_datetime_column(values) => InferredType::Datetime,
        None => InferredType::Text,
    }
}

/// Convert every text column to the narrowest type all its values parse as.
///
/// Numeric, datetime and other columns are left alone.
pub fn coerce_types(df: &DataFrame) -> Result<DataFrame> {
    let mut out = df.clone();
    for column in df.get_columns() {
        if ColumnKind::of_column(column) != ColumnKind::Text {
            continue;
        }
        let values = text_cells(column)?;
        let inferred = infer_type(&values);
        if inferred == InferredType::Text {
            continue;
        }
        debug!(column = %column.name(), ?inferred, "coercing column");
        out.with_column(coerce_values(column, &values, inferred))?;
    }
    Ok(out)
}

fn coerce_values(column: &Column, values: &[Option<String>], inferred: InferredType) -> Series {
    let name = column.name().clone();
    match inferred {
        InferredType::Integer => {
            let parsed: Vec<Option<i64>> = values
                .iter()
                .map(|value| value.as_deref().and_then(parse_i64))
                .collect();
            Series::new(name, parsed)
        }
        InferredType::Float => {
            let parsed: Vec<Option<f64>> = values
                .iter()
                .map(|value| value.as_deref().and_then(parse_f64))
                .collect();
            Series::new(name, parsed)
        }
        InferredType::Datetime => {
            let parsed: Vec<Option<NaiveDateTime>> = values
                .iter()
                .map(|value| value.as_deref().and_then(parse_datetime))
                .collect();
            Series::new(name, parsed)
        }
        InferredType::Text => column.as_materialized_series().clone(),
    }
}
