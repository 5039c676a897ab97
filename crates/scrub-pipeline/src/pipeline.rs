//! Validate → clean → validate orchestration.
//!
//! # Run Order
//!
//! 1. Pre-validate the input table
//! 2. If it fails and `force_clean` is off, return the input untouched with
//!    the pre-validation errors and `rows_after = 0`
//! 3. Otherwise clean the table
//! 4. Post-validate the cleaned table; the report carries only this result

use std::fs;
use std::path::Path;

use polars::prelude::DataFrame;
use scrub_clean::Cleaner;
use scrub_model::{Result, ScrubError};
use scrub_validate::Validator;
use tracing::{info, info_span, warn};

use crate::config::PipelineConfig;
use crate::report::PipelineReport;

/// Owns one cleaner and one validator, configured once at construction.
#[derive(Debug)]
pub struct Pipeline {
    cleaner: Cleaner,
    validator: Validator,
    force_clean: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        for key in config.unrecognized.keys() {
            warn!(key = %key, "ignoring unrecognized pipeline option");
        }
        Self {
            cleaner: Cleaner::new(config.cleaner_config),
            validator: Validator::new(config.validator_rules),
            force_clean: config.force_clean,
        }
    }

    /// Build a pipeline from a YAML or JSON configuration document.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(PipelineConfig::from_file(path)?))
    }

    /// Build a pipeline from a YAML configuration document, whatever its
    /// extension.
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScrubError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(PipelineConfig::from_yaml_str(&content)?))
    }

    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn force_clean(&self) -> bool {
        self.force_clean
    }

    /// Run the pipeline on a table.
    ///
    /// Returns the cleaned table, or the input itself when pre-validation
    /// failed without `force_clean`.
    ///
    /// # Errors
    ///
    /// Only Polars errors on malformed frames. Validation failures are
    /// reported in the [`PipelineReport`].
    pub fn run(&self, data: &DataFrame) -> Result<(DataFrame, PipelineReport)> {
        let span = info_span!("pipeline.run", rows_before = data.height());
        let _guard = span.enter();
        let rows_before = data.height();

        let pre = self.validator.validate(data);
        if !pre.passed && !self.force_clean {
            warn!(
                errors = pre.error_count(),
                "pre-validation failed, skipping cleaning"
            );
            let report = PipelineReport::short_circuited(rows_before, pre.errors);
            return Ok((data.clone(), report));
        }
        if !pre.passed {
            info!(
                errors = pre.error_count(),
                "pre-validation failed, cleaning anyway (force_clean)"
            );
        }

        let cleaned = self.cleaner.clean(data)?;
        let rows_after = cleaned.height();

        let post = self.validator.validate(&cleaned);
        info!(
            rows_before,
            rows_after,
            passed = post.passed,
            "pipeline finished"
        );
        let report = PipelineReport {
            validation_passed: post.passed,
            validation_errors: post.errors,
            rows_before,
            rows_after,
        };
        Ok((cleaned, report))
    }
}
