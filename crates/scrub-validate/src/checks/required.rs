//! Required column presence.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use crate::issue::Violation;

/// Report required columns absent from the table, in one violation.
pub fn check(required: &[String], df: &DataFrame) -> Vec<Violation> {
    let present: BTreeSet<&str> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    let missing: BTreeSet<&str> = required
        .iter()
        .map(String::as_str)
        .filter(|name| !present.contains(name))
        .collect();
    if missing.is_empty() {
        return Vec::new();
    }
    vec![Violation::MissingColumns {
        columns: missing.into_iter().map(str::to_string).collect(),
    }]
}
