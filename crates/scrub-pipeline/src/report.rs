//! Pipeline result report.

use std::fmt;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use scrub_model::Result;
use serde::{Deserialize, Serialize};

/// Outcome of one pipeline run.
///
/// `validation_passed` and `validation_errors` describe the last validation
/// that ran: the pre-check when the run short-circuited, the post-check
/// otherwise. `rows_after` is 0 when cleaning never ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub validation_passed: bool,
    pub validation_errors: Vec<String>,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl PipelineReport {
    /// Report for a run that stopped after a failed pre-check.
    pub fn short_circuited(rows_before: usize, errors: Vec<String>) -> Self {
        Self {
            validation_passed: false,
            validation_errors: errors,
            rows_before,
            rows_after: 0,
        }
    }

    /// Pretty-printed JSON with exactly the four report keys.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![header_cell("Metric"), header_cell("Value")]);

        let status = if self.validation_passed {
            Cell::new("passed").fg(Color::Green)
        } else {
            Cell::new("failed").fg(Color::Red)
        };
        table.add_row(vec![Cell::new("validation"), status]);
        table.add_row(vec![Cell::new("rows_before"), Cell::new(self.rows_before)]);
        table.add_row(vec![Cell::new("rows_after"), Cell::new(self.rows_after)]);
        for error in &self.validation_errors {
            table.add_row(vec![Cell::new("error").fg(Color::Red), Cell::new(error)]);
        }
        if let Some(column) = table.column_mut(1) {
            column.set_cell_alignment(CellAlignment::Left);
        }
        table
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary_table())
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
