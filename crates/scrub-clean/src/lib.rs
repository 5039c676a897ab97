//! Table cleaning.
//!
//! This crate turns a raw table into a cleaned one:
//!
//! - **dedupe**: exact duplicate row removal
//! - **missing**: drop rows with nulls or impute numeric columns
//! - **text**: whitespace and case standardization
//! - **coerce**: numeric/datetime inference and coercion
//! - **normalization**: value-level numeric and datetime parsers
//! - **cleaner**: the [`Cleaner`] that runs all of the above in order

mod cells;
pub mod cleaner;
pub mod coerce;
pub mod dedupe;
pub mod missing;
pub mod normalization;
pub mod text;

pub use cleaner::{Cleaner, CleaningStep};
pub use coerce::{InferredType, coerce_types, infer_type};
pub use dedupe::drop_duplicate_rows;
pub use missing::{Statistic, drop_missing_rows, fill_numeric, handle_missing};
pub use normalization::parse_datetime;
pub use text::standardize_text;
