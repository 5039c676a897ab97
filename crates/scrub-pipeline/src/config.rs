//! Pipeline configuration and configuration-document loading.
//!
//! Documents are YAML (`.yaml`/`.yml`) or JSON (any other extension):
//!
//! ```yaml
//! cleaner_config:
//!   missing_strategy: drop
//! validator_rules:
//!   required_columns: [id, name]
//!   unique_columns: [id]
//!   value_ranges:
//!     value: [0, 100]
//! force_clean: false
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use scrub_model::{CleanerConfig, Result, ScrubError, ValidationRules};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level pipeline configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Passed verbatim to the cleaner.
    pub cleaner_config: CleanerConfig,
    /// Passed verbatim to the validator.
    pub validator_rules: ValidationRules,
    /// Clean even when pre-validation fails.
    pub force_clean: bool,

    /// Top-level keys the pipeline does not understand.
    #[serde(flatten, skip_serializing)]
    pub unrecognized: BTreeMap<String, serde_json::Value>,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cleaner_config(mut self, config: CleanerConfig) -> Self {
        self.cleaner_config = config;
        self
    }

    pub fn with_validator_rules(mut self, rules: ValidationRules) -> Self {
        self.validator_rules = rules;
        self
    }

    pub fn with_force_clean(mut self, enable: bool) -> Self {
        self.force_clean = enable;
        self
    }

    /// Parse a YAML document. An empty or `null` document yields defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Self> = serde_yaml::from_str(content)?;
        Ok(config.unwrap_or_default())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration document, choosing the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScrubError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading pipeline configuration");
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }
}
