//! Table cleaner with a fixed sequence of steps.
//!
//! # Step Order
//!
//! 1. **DedupeStep** - Drop exact duplicate rows
//! 2. **MissingValueStep** - Drop or impute nulls per `missing_strategy`
//! 3. **TextStep** - Trim and lower-case text columns
//! 4. **CoercionStep** - Convert text columns to numeric or datetime
//!
//! The order is part of the cleaner's contract and cannot be changed.
//!
//! # Example
//!
//! ```ignore
//! use scrub_clean::Cleaner;
//! use scrub_model::CleanerConfig;
//!
//! let cleaner = Cleaner::new(CleanerConfig::new().with_missing_strategy("drop"));
//! let cleaned = cleaner.clean(&df)?;
//! ```

use std::fmt;

use polars::prelude::DataFrame;
use scrub_model::{CleanerConfig, MissingStrategy, Result, TableInput};
use tracing::{debug, warn};

use crate::coerce::coerce_types;
use crate::dedupe::drop_duplicate_rows;
use crate::missing::handle_missing;
use crate::text::standardize_text;

/// A single cleaning step.
///
/// Steps take a frame by reference and return the transformed copy.
pub trait CleaningStep: Send + Sync {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame>;

    /// Human-readable name for this step (for logging/debugging).
    fn step_name(&self) -> &'static str;
}

pub struct DedupeStep;

impl CleaningStep for DedupeStep {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        drop_duplicate_rows(df)
    }

    fn step_name(&self) -> &'static str {
        "dedupe"
    }
}

pub struct MissingValueStep {
    strategy: Option<MissingStrategy>,
}

impl CleaningStep for MissingValueStep {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        handle_missing(df, self.strategy.as_ref())
    }

    fn step_name(&self) -> &'static str {
        "missing_values"
    }
}

pub struct TextStep;

impl CleaningStep for TextStep {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        standardize_text(df)
    }

    fn step_name(&self) -> &'static str {
        "standardize_text"
    }
}

pub struct CoercionStep;

impl CleaningStep for CoercionStep {
    fn apply(&self, df: &DataFrame) -> Result<DataFrame> {
        coerce_types(df)
    }

    fn step_name(&self) -> &'static str {
        "coerce_types"
    }
}

/// Cleans tables according to a [`CleanerConfig`].
///
/// Holds no mutable state; one instance can clean any number of tables.
pub struct Cleaner {
    config: CleanerConfig,
    steps: Vec<Box<dyn CleaningStep>>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanerConfig::default())
    }
}

impl fmt::Debug for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cleaner")
            .field("config", &self.config)
            .field("steps", &self.step_names())
            .finish()
    }
}

impl Cleaner {
    pub fn new(config: CleanerConfig) -> Self {
        for key in config.unrecognized.keys() {
            warn!(key = %key, "ignoring unrecognized cleaner option");
        }
        let steps: Vec<Box<dyn CleaningStep>> = vec![
            Box::new(DedupeStep),
            Box::new(MissingValueStep {
                strategy: config.missing_strategy.clone(),
            }),
            Box::new(TextStep),
            Box::new(CoercionStep),
        ];
        Self { config, steps }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Names of the steps in execution order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.step_name()).collect()
    }

    /// Clean a table or a single column.
    ///
    /// The input is never modified; a cleaned copy is returned. A single
    /// column comes back as a one-column table.
    ///
    /// # Errors
    ///
    /// Only Polars errors on malformed frames. Parse failures during type
    /// coercion become nulls.
    pub fn clean<T: TableInput + ?Sized>(&self, data: &T) -> Result<DataFrame> {
        let mut df = data.to_table()?;
        for step in &self.steps {
            let rows_before = df.height();
            df = step.apply(&df)?;
            debug!(
                step = step.step_name(),
                rows_before,
                rows_after = df.height(),
                "cleaning step complete"
            );
        }
        Ok(df)
    }
}
