//! Configuration options for the cleaner.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How rows or cells holding the missing marker are handled.
///
/// Parsed from free text, so every string maps to a variant: names that are
/// not recognized land in [`MissingStrategy::Unrecognized`], which behaves
/// like an absent strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MissingStrategy {
    /// Remove every row containing a null in any column.
    Drop,
    /// Fill nulls in numeric columns with the column mean.
    Mean,
    /// Fill nulls in numeric columns with the column median.
    Median,
    /// Any other value. No-op.
    Unrecognized(String),
}

impl MissingStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            MissingStrategy::Drop => "drop",
            MissingStrategy::Mean => "mean",
            MissingStrategy::Median => "median",
            MissingStrategy::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for MissingStrategy {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "drop" => MissingStrategy::Drop,
            "mean" => MissingStrategy::Mean,
            "median" => MissingStrategy::Median,
            _ => MissingStrategy::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for MissingStrategy {
    fn from(value: String) -> Self {
        MissingStrategy::from(value.as_str())
    }
}

impl From<MissingStrategy> for String {
    fn from(value: MissingStrategy) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for MissingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for the cleaner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Missing-value handling. `None` leaves nulls in place.
    pub missing_strategy: Option<MissingStrategy>,

    /// Keys present in the document that the cleaner does not understand.
    #[serde(flatten, skip_serializing)]
    pub unrecognized: BTreeMap<String, serde_json::Value>,
}

impl CleanerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_strategy(mut self, strategy: impl Into<MissingStrategy>) -> Self {
        self.missing_strategy = Some(strategy.into());
        self
    }
}
