//! Value-level parsers used by type detection and coercion.
//!
//! - **numeric**: integer/float detection and parsing
//! - **datetime**: date and datetime parsing across common layouts
//!
//! Detection never fails: it answers whether a whole column can be parsed.
//! Coercion never fails either: values that do not parse become null.

pub mod datetime;
pub mod numeric;

pub use datetime::{is_datetime_column, parse_datetime};
pub use numeric::{NumericKind, detect_numeric};
