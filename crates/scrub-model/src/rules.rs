//! Declarative validation rules.
//!
//! Every rule is optional. An absent rule is skipped entirely rather than
//! checked and passed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inclusive numeric bounds for a column.
///
/// Written as a two-element sequence in configuration documents:
/// `value: [0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies outside `[min, max]`.
    pub fn excludes(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<ValueRange> for (f64, f64) {
    fn from(range: ValueRange) -> Self {
        (range.min, range.max)
    }
}

/// Rules checked by the validator, in this order: required columns,
/// value ranges, unique columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_ranges: Option<BTreeMap<String, ValueRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_columns: Option<Vec<String>>,

    /// Keys present in the document that the validator does not understand.
    #[serde(flatten, skip_serializing)]
    pub unrecognized: BTreeMap<String, serde_json::Value>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_required_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_value_range(mut self, column: impl Into<String>, min: f64, max: f64) -> Self {
        self.value_ranges
            .get_or_insert_with(BTreeMap::new)
            .insert(column.into(), ValueRange::new(min, max));
        self
    }

    pub fn with_unique_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}
