//! Column uniqueness checks.

use std::collections::HashSet;

use polars::prelude::{AnyValue, DataFrame};
use scrub_common::cell_key;

use crate::issue::Violation;

/// Count repeats of an earlier value per configured column.
///
/// The first occurrence of a value is not a duplicate. Nulls compare equal.
/// Columns absent from the table are skipped.
pub fn check(columns: &[String], df: &DataFrame) -> Vec<Violation> {
    let mut violations = Vec::new();

    for column_name in columns {
        let Ok(column) = df.column(column_name) else {
            continue;
        };
        let mut seen = HashSet::with_capacity(df.height());
        let count = (0..df.height())
            .filter(|idx| !seen.insert(cell_key(column.get(*idx).unwrap_or(AnyValue::Null))))
            .count();
        if count > 0 {
            violations.push(Violation::Duplicates {
                column: column_name.clone(),
                count,
            });
        }
    }

    violations
}
