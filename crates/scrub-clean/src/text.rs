//! Text standardization.

use polars::prelude::{DataFrame, NamedFrom, Series};
use scrub_model::{ColumnKind, Result};

use crate::cells::text_cells;

/// Lower-case and trim every value of every text column.
///
/// Nulls stay null.
pub fn standardize_text(df: &DataFrame) -> Result<DataFrame> {
    let mut out = df.clone();
    for column in df.get_columns() {
        if ColumnKind::of_column(column) != ColumnKind::Text {
            continue;
        }
        let values: Vec<Option<String>> = text_cells(column)?
            .into_iter()
            .map(|value| value.map(|text| standardize_value(&text)))
            .collect();
        out.with_column(Series::new(column.name().clone(), values))?;
    }
    Ok(out)
}

pub fn standardize_value(value: &str) -> String {
    value.trim().to_lowercase()
}
