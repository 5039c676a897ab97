//! Numeric detection.

use scrub_common::{parse_f64, parse_i64};

/// Storage chosen for a column that parses as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// Every value parses as `i64`.
    Integer,
    /// Every value parses as `f64`, at least one is not an integer.
    Float,
}

/// Decide whether every present value parses as a number.
///
/// Returns `None` when any present value fails to parse, or when there is no
/// present value at all.
pub fn detect_numeric<S: AsRef<str>>(values: &[Option<S>]) -> Option<NumericKind> {
    let mut present = values.iter().flatten().map(AsRef::<str>::as_ref).peekable();
    present.peek()?;

    let mut kind = NumericKind::Integer;
    for value in present {
        if parse_i64(value).is_some() {
            continue;
        }
        parse_f64(value)?;
        kind = NumericKind::Float;
    }
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_detected() {
        let values = [Some("10"), None, Some(" 20 ")];
        assert_eq!(detect_numeric(&values), Some(NumericKind::Integer));
    }

    #[test]
    fn mixed_integers_and_floats_are_float() {
        let values = [Some("10"), Some("2.5")];
        assert_eq!(detect_numeric(&values), Some(NumericKind::Float));
    }

    #[test]
    fn any_text_value_rejects_column() {
        let values = [Some("10"), Some("invalid")];
        assert_eq!(detect_numeric(&values), None);
    }

    #[test]
    fn empty_string_is_not_a_number() {
        let values = [Some("10"), Some("")];
        assert_eq!(detect_numeric(&values), None);
    }

    #[test]
    fn all_missing_is_not_numeric() {
        let values: [Option<&str>; 2] = [None, None];
        assert_eq!(detect_numeric(&values), None);
    }
}
