//! Rule violations and their rendered messages.

use std::fmt;

use scrub_common::format_numeric;
use scrub_model::ValueRange;

/// A single rule violation.
///
/// Rendered into the plain message strings carried by
/// [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    MissingColumns { columns: Vec<String> },
    OutOfRange { column: String, count: usize, range: ValueRange },
    Duplicates { column: String, count: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingColumns { columns } => {
                write!(f, "Missing required columns: {}", columns.join(", "))
            }
            Violation::OutOfRange {
                column,
                count,
                range,
            } => write!(
                f,
                "Column {column} has {count} values outside range [{}, {}]",
                format_numeric(range.min),
                format_numeric(range.max)
            ),
            Violation::Duplicates { column, count } => {
                write!(f, "Column {column} has {count} duplicate values")
            }
        }
    }
}
