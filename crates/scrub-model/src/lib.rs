//! Shared types for the scrub pipeline.
//!
//! - **error**: the workspace error type
//! - **table**: table inputs and semantic column kinds
//! - **options**: cleaner configuration
//! - **rules**: validation rules

pub mod error;
pub mod options;
pub mod rules;
pub mod table;

pub use error::{Result, ScrubError};
pub use options::{CleanerConfig, MissingStrategy};
pub use rules::{ValidationRules, ValueRange};
pub use table::{ColumnKind, TableInput, column_names};
