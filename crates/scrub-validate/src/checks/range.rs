//! Inclusive numeric range checks.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, DataFrame};
use scrub_common::any_to_f64;
use scrub_model::ValueRange;

use crate::issue::Violation;

/// Count values outside `[min, max]` per configured column.
///
/// Columns absent from the table are skipped. Nulls and values that do not
/// read as numbers are never counted.
pub fn check(ranges: &BTreeMap<String, ValueRange>, df: &DataFrame) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (column_name, range) in ranges {
        let Ok(column) = df.column(column_name) else {
            continue;
        };
        let count = (0..df.height())
            .filter_map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
            .filter(|value| range.excludes(*value))
            .count();
        if count > 0 {
            violations.push(Violation::OutOfRange {
                column: column_name.clone(),
                count,
                range: *range,
            });
        }
    }

    violations
}
