//! Exact-duplicate row removal.

use std::collections::HashSet;

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use scrub_common::cell_key;
use scrub_model::Result;

/// Remove rows that repeat an earlier row cell for cell.
///
/// The first occurrence is kept and row order is preserved. Two nulls in
/// the same column compare equal.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<DataFrame> {
    let row_count = df.height();
    if row_count == 0 || df.width() == 0 {
        return Ok(df.clone());
    }
    let columns = df.get_columns();
    let mut seen = HashSet::with_capacity(row_count);
    let mut keep = Vec::with_capacity(row_count);
    for idx in 0..row_count {
        let mut row = Vec::with_capacity(columns.len());
        for column in columns {
            row.push(cell_key(column.get(idx)?));
        }
        keep.push(seen.insert(row));
    }
    if keep.iter().all(|kept| *kept) {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok(df.filter(&mask)?)
}
