//! Rule-based table validation.
//!
//! Checks run independently and in a fixed order:
//!
//! 1. **required_columns**: every listed column must be present
//! 2. **value_ranges**: numeric values must lie within `[min, max]`
//! 3. **unique_columns**: listed columns must not repeat a value
//!
//! A rule that is absent from [`ValidationRules`] is skipped. Rules naming
//! columns the table lacks are skipped by the range and uniqueness checks;
//! only the required-columns check reports absence.

use polars::prelude::DataFrame;
use scrub_model::ValidationRules;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::checks;

/// Outcome of validating one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub passed: bool,
    /// Human-readable messages, in check order.
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            passed: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.passed
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Split into the `(passed, errors)` pair.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.passed, self.errors)
    }
}

/// Validates tables against a fixed set of rules.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: ValidationRules,
}

impl Validator {
    pub fn new(rules: ValidationRules) -> Self {
        for key in rules.unrecognized.keys() {
            warn!(key = %key, "ignoring unrecognized validation rule");
        }
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate a table. Never fails; every problem becomes a message.
    pub fn validate(&self, df: &DataFrame) -> ValidationResult {
        let errors: Vec<String> = checks::run_all(&self.rules, df)
            .iter()
            .map(ToString::to_string)
            .collect();
        let result = ValidationResult::from_errors(errors);
        if result.passed {
            debug!(rows = df.height(), "validation passed");
        } else {
            info!(
                rows = df.height(),
                errors = result.error_count(),
                "validation failed"
            );
        }
        result
    }
}
