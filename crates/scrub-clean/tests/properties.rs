//! Property tests for cleaner invariants.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;
use scrub_clean::Cleaner;
use scrub_model::CleanerConfig;

type Row = (Option<i64>, Option<String>, Option<f64>);

fn build_frame(rows: &[Row]) -> DataFrame {
    let ids: Vec<Option<i64>> = rows.iter().map(|row| row.0).collect();
    let names: Vec<Option<String>> = rows.iter().map(|row| row.1.clone()).collect();
    let scores: Vec<Option<f64>> = rows.iter().map(|row| row.2).collect();
    DataFrame::new(vec![
        Series::new("id".into(), ids).into_column(),
        Series::new("name".into(), names).into_column(),
        Series::new("score".into(), scores).into_column(),
    ])
    .unwrap()
}

fn raw_row() -> impl Strategy<Value = Row> {
    (
        prop::option::of(0i64..4),
        prop::option::of("[ a-cA-C]{0,3}"),
        prop::option::of(prop_oneof![Just(0.5f64), Just(1.0), Just(2.5)]),
    )
}

/// Rows whose text is already trimmed and lower-case, so standardization
/// cannot create new duplicates.
fn normalized_row() -> impl Strategy<Value = Row> {
    (
        prop::option::of(0i64..4),
        prop::option::of("[a-c]{1,2}"),
        prop::option::of(prop_oneof![Just(0.5f64), Just(1.0), Just(2.5)]),
    )
}

fn cleaner(strategy: &str) -> Cleaner {
    Cleaner::new(CleanerConfig::new().with_missing_strategy(strategy))
}

proptest! {
    #[test]
    fn cleaning_never_adds_rows(
        rows in prop::collection::vec(raw_row(), 0..16),
        strategy in prop_oneof![Just("drop"), Just("mean"), Just("median"), Just("none")],
    ) {
        let df = build_frame(&rows);
        let cleaned = cleaner(strategy).clean(&df).unwrap();
        prop_assert!(cleaned.height() <= df.height());
    }

    #[test]
    fn drop_leaves_no_missing_values(rows in prop::collection::vec(raw_row(), 0..16)) {
        let cleaned = cleaner("drop").clean(&build_frame(&rows)).unwrap();
        for column in cleaned.get_columns() {
            prop_assert_eq!(column.null_count(), 0);
        }
    }

    #[test]
    fn drop_cleaning_is_idempotent(rows in prop::collection::vec(normalized_row(), 0..16)) {
        let cleaner = cleaner("drop");
        let once = cleaner.clean(&build_frame(&rows)).unwrap();
        let twice = cleaner.clean(&once).unwrap();
        prop_assert!(once.equals_missing(&twice));
    }

    #[test]
    fn cleaned_rows_are_unique(rows in prop::collection::vec(normalized_row(), 0..16)) {
        let cleaned = cleaner("none").clean(&build_frame(&rows)).unwrap();
        let again = scrub_clean::drop_duplicate_rows(&cleaned).unwrap();
        prop_assert_eq!(again.height(), cleaned.height());
    }
}
