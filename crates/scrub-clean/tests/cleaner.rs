//! Behaviour tests for the cleaner.

use polars::prelude::{AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use scrub_clean::Cleaner;
use scrub_model::{CleanerConfig, MissingStrategy};

fn sample_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id".into(), vec![Some(1i64), Some(2), Some(2), Some(3)]).into_column(),
        Series::new(
            "name".into(),
            vec![Some("Test "), Some("test"), Some("Sample"), None],
        )
        .into_column(),
        Series::new("value".into(), vec![Some(10i64), Some(20), Some(30), None]).into_column(),
    ])
    .unwrap()
}

fn raw_text_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id".into(), vec![1i64, 2, 2, 3]).into_column(),
        Series::new(
            "name".into(),
            vec![Some("Test "), Some("test"), Some("Sample"), None],
        )
        .into_column(),
        Series::new(
            "value".into(),
            vec![Some("10"), Some("20"), Some("30"), Some("invalid")],
        )
        .into_column(),
        Series::new(
            "date".into(),
            vec![Some("2024-01-01"), Some("2024-01-02"), Some("invalid"), None],
        )
        .into_column(),
    ])
    .unwrap()
}

fn strings(column: &Column) -> Vec<Option<String>> {
    (0..column.len())
        .map(|idx| match column.get(idx).unwrap() {
            AnyValue::Null => None,
            AnyValue::String(s) => Some(s.to_string()),
            AnyValue::StringOwned(s) => Some(s.to_string()),
            other => panic!("unexpected value {other:?}"),
        })
        .collect()
}

fn drop_cleaner() -> Cleaner {
    Cleaner::new(CleanerConfig::new().with_missing_strategy("drop"))
}

#[test]
fn drop_strategy_removes_incomplete_rows_and_normalizes_text() {
    let cleaned = drop_cleaner().clean(&sample_frame()).unwrap();

    assert_eq!(cleaned.height(), 3);
    assert_eq!(
        strings(cleaned.column("name").unwrap()),
        vec![
            Some("test".to_string()),
            Some("test".to_string()),
            Some("sample".to_string())
        ]
    );
    let value = cleaned.column("value").unwrap();
    assert_eq!(value.dtype(), &DataType::Int64);
    assert_eq!(value.null_count(), 0);
}

#[test]
fn text_columns_are_coerced_after_dropping() {
    let cleaned = drop_cleaner().clean(&raw_text_frame()).unwrap();

    assert!(cleaned.height() < 4);
    assert_eq!(cleaned.height(), 3);
    let names = strings(cleaned.column("name").unwrap());
    assert!(names.iter().flatten().all(|name| !name.contains(' ')));
    assert_eq!(cleaned.column("value").unwrap().dtype(), &DataType::Int64);
    // "invalid" survives the drop, so the column cannot be fully parsed.
    assert_eq!(cleaned.column("date").unwrap().dtype(), &DataType::String);
}

#[test]
fn date_columns_become_datetime_when_fully_parseable() {
    let df = DataFrame::new(vec![
        Series::new(
            "date".into(),
            vec![Some(" 2024-01-01 "), Some("2024-01-02T08:30:00"), None],
        )
        .into_column(),
    ])
    .unwrap();

    let cleaned = Cleaner::default().clean(&df).unwrap();

    let date = cleaned.column("date").unwrap();
    assert!(matches!(date.dtype(), DataType::Datetime(_, _)));
    assert_eq!(date.null_count(), 1);
}

#[test]
fn input_table_is_not_mutated() {
    let df = sample_frame();
    let snapshot = df.clone();

    let _ = drop_cleaner().clean(&df).unwrap();

    assert!(df.equals_missing(&snapshot));
}

#[test]
fn single_column_is_promoted_to_table() {
    let series = Series::new("city".into(), vec![Some(" Paris"), Some("paris "), None]);

    let cleaned = drop_cleaner().clean(&series).unwrap();

    assert_eq!(cleaned.width(), 1);
    assert_eq!(cleaned.get_column_names()[0].as_str(), "city");
    // Dedupe runs before standardization, so both spellings survive.
    assert_eq!(
        strings(cleaned.column("city").unwrap()),
        vec![Some("paris".to_string()), Some("paris".to_string())]
    );
}

#[test]
fn mean_strategy_imputes_numeric_columns_only() {
    let cleaner = Cleaner::new(CleanerConfig::new().with_missing_strategy(MissingStrategy::Mean));

    let cleaned = cleaner.clean(&sample_frame()).unwrap();

    assert_eq!(cleaned.height(), 4);
    let value = cleaned.column("value").unwrap();
    assert_eq!(value.null_count(), 0);
    assert_eq!(value.get(3).unwrap(), AnyValue::Float64(20.0));
    assert_eq!(cleaned.column("name").unwrap().null_count(), 1);
}

#[test]
fn median_strategy_uses_post_dedupe_values() {
    let df = DataFrame::new(vec![
        Series::new("v".into(), vec![Some(1.0f64), Some(1.0), Some(5.0), Some(9.0), None])
            .into_column(),
    ])
    .unwrap();
    let cleaner = Cleaner::new(CleanerConfig::new().with_missing_strategy("median"));

    let cleaned = cleaner.clean(&df).unwrap();

    // The duplicate 1.0 is removed first, leaving [1, 5, 9].
    assert_eq!(cleaned.height(), 4);
    assert_eq!(
        cleaned.column("v").unwrap().get(3).unwrap(),
        AnyValue::Float64(5.0)
    );
}

#[test]
fn unrecognized_strategy_keeps_missing_values() {
    let cleaner = Cleaner::new(CleanerConfig::new().with_missing_strategy("forward_fill"));

    let cleaned = cleaner.clean(&sample_frame()).unwrap();

    assert_eq!(cleaned.height(), 4);
    assert_eq!(cleaned.column("name").unwrap().null_count(), 1);
    assert_eq!(cleaned.column("value").unwrap().null_count(), 1);
}

#[test]
fn steps_run_in_fixed_order() {
    assert_eq!(
        Cleaner::default().step_names(),
        vec!["dedupe", "missing_values", "standardize_text", "coerce_types"]
    );
}

#[test]
fn cleaning_twice_matches_cleaning_once() {
    let cleaner = drop_cleaner();
    let once = cleaner.clean(&raw_text_frame()).unwrap();
    let twice = cleaner.clean(&once).unwrap();
    assert!(once.equals_missing(&twice));
}
