//! Table validation against declarative rules.
//!
//! See [`Validator`] for the check order and skip semantics.

mod checks;
pub mod issue;
pub mod validator;

pub use issue::Violation;
pub use validator::{ValidationResult, Validator};

use polars::prelude::DataFrame;
use scrub_model::ValidationRules;

/// Run every configured check and return the violations unrendered.
pub fn find_violations(rules: &ValidationRules, df: &DataFrame) -> Vec<Violation> {
    checks::run_all(rules, df)
}
