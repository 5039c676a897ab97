//! Validation check modules.
//!
//! Each module performs one kind of check. A check runs only when its rule
//! is configured.

mod range;
mod required;
mod unique;

use polars::prelude::DataFrame;
use scrub_model::ValidationRules;
use tracing::debug;

use crate::issue::Violation;

/// Run all configured checks on a table.
pub fn run_all(rules: &ValidationRules, df: &DataFrame) -> Vec<Violation> {
    let mut violations = Vec::new();

    // 1. Required columns (set difference)
    if let Some(required) = &rules.required_columns {
        let found = required::check(required, df);
        debug!(check = "required_columns", violations = found.len());
        violations.extend(found);
    }

    // 2. Inclusive numeric ranges
    if let Some(ranges) = &rules.value_ranges {
        let found = range::check(ranges, df);
        debug!(check = "value_ranges", violations = found.len());
        violations.extend(found);
    }

    // 3. Uniqueness
    if let Some(unique) = &rules.unique_columns {
        let found = unique::check(unique, df);
        debug!(check = "unique_columns", violations = found.len());
        violations.extend(found);
    }

    violations
}
