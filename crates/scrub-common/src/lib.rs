//! Shared utilities for scrub crates.
//!
//! This crate provides common utilities used across the scrub workspace,
//! mostly Polars `AnyValue` and dtype helpers.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use crate::polars::{
    any_to_f64, any_to_string, cell_key, format_numeric, is_numeric_dtype, is_temporal_dtype,
    parse_f64, parse_i64,
};
