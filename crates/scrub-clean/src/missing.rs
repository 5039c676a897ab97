//! Missing-value handling: drop rows or impute numeric columns.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use scrub_model::{ColumnKind, MissingStrategy, Result};
use tracing::{debug, warn};

use crate::cells::numeric_cells;

/// Column statistic used to fill nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
}

impl Statistic {
    /// Compute the statistic, or `None` for an empty sample.
    pub fn compute(self, values: &mut [f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        match self {
            Statistic::Mean => Some(values.iter().sum::<f64>() / values.len() as f64),
            Statistic::Median => {
                values.sort_by(f64::total_cmp);
                let mid = values.len() / 2;
                if values.len() % 2 == 0 {
                    Some((values[mid - 1] + values[mid]) / 2.0)
                } else {
                    Some(values[mid])
                }
            }
        }
    }
}

/// Apply a missing-value strategy.
///
/// `None` and unrecognized strategies leave the frame as it is.
pub fn handle_missing(df: &DataFrame, strategy: Option<&MissingStrategy>) -> Result<DataFrame> {
    match strategy {
        Some(MissingStrategy::Drop) => drop_missing_rows(df),
        Some(MissingStrategy::Mean) => fill_numeric(df, Statistic::Mean),
        Some(MissingStrategy::Median) => fill_numeric(df, Statistic::Median),
        Some(MissingStrategy::Unrecognized(raw)) => {
            warn!(strategy = %raw, "unrecognized missing_strategy, leaving missing values in place");
            Ok(df.clone())
        }
        None => Ok(df.clone()),
    }
}

/// Remove every row that holds a null in any column.
pub fn drop_missing_rows(df: &DataFrame) -> Result<DataFrame> {
    let row_count = df.height();
    let columns = df.get_columns();
    if columns.iter().all(|column| column.null_count() == 0) {
        return Ok(df.clone());
    }
    let mut keep = Vec::with_capacity(row_count);
    for idx in 0..row_count {
        let mut complete = true;
        for column in columns {
            if matches!(column.get(idx)?, AnyValue::Null) {
                complete = false;
                break;
            }
        }
        keep.push(complete);
    }
    let mask = BooleanChunked::from_slice("complete".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Fill nulls in numeric columns with a statistic of the column's present
/// values. Text and datetime columns keep their nulls. A filled column is
/// stored as `Float64`.
pub fn fill_numeric(df: &DataFrame, statistic: Statistic) -> Result<DataFrame> {
    let mut out = df.clone();
    for column in df.get_columns() {
        if ColumnKind::of_column(column) != ColumnKind::Numeric || column.null_count() == 0 {
            continue;
        }
        let values = numeric_cells(column)?;
        let mut present: Vec<f64> = values
            .iter()
            .flatten()
            .copied()
            .filter(|value| !value.is_nan())
            .collect();
        let Some(fill) = statistic.compute(&mut present) else {
            continue;
        };
        debug!(
            column = %column.name(),
            ?statistic,
            fill,
            filled = column.null_count(),
            "imputing missing values"
        );
        let filled: Vec<f64> = values
            .into_iter()
            .map(|value| value.unwrap_or(fill))
            .collect();
        out.with_column(Series::new(column.name().clone(), filled))?;
    }
    Ok(out)
}
