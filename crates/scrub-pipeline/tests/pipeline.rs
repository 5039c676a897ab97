//! Integration tests for the pipeline.

use std::fs;

use polars::prelude::{DataFrame, DataType, IntoColumn, NamedFrom, Series};
use scrub_model::{CleanerConfig, ScrubError, ValidationRules};
use scrub_pipeline::{Pipeline, PipelineConfig, PipelineReport};
use tempfile::TempDir;

fn sample_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id".into(), vec![Some(1i64), Some(2), Some(2), Some(3)]).into_column(),
        Series::new(
            "name".into(),
            vec![Some("Test "), Some("test"), Some("Sample"), None],
        )
        .into_column(),
        Series::new("value".into(), vec![Some("10"), Some("20"), Some("30"), None]).into_column(),
    ])
    .unwrap()
}

/// Same shape, but the duplicate id comes from an exact duplicate row.
fn repeated_row_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id".into(), vec![1i64, 2, 2, 3]).into_column(),
        Series::new("name".into(), vec!["Ada", " Bob", " Bob", "Cy"]).into_column(),
    ])
    .unwrap()
}

fn failing_config(force_clean: bool) -> PipelineConfig {
    PipelineConfig::new()
        .with_cleaner_config(CleanerConfig::new().with_missing_strategy("drop"))
        .with_validator_rules(
            ValidationRules::new()
                .with_required_columns(["id", "name"])
                .with_unique_columns(["id"]),
        )
        .with_force_clean(force_clean)
}

#[test]
fn failed_pre_validation_short_circuits() {
    let df = sample_frame();
    let pipeline = Pipeline::new(failing_config(false));

    let (out, report) = pipeline.run(&df).unwrap();

    assert!(out.equals_missing(&df));
    assert_eq!(
        report,
        PipelineReport {
            validation_passed: false,
            validation_errors: vec!["Column id has 1 duplicate values".to_string()],
            rows_before: 4,
            rows_after: 0,
        }
    );
    // Cleaning never ran: text is untouched.
    assert_eq!(out.column("value").unwrap().dtype(), &DataType::String);
}

#[test]
fn force_clean_runs_cleaning_and_reports_post_validation() {
    let pipeline = Pipeline::new(failing_config(true));

    let (out, report) = pipeline.run(&sample_frame()).unwrap();

    assert_eq!(report.rows_before, 4);
    assert_eq!(report.rows_after, 3);
    assert!(report.rows_after <= report.rows_before);
    assert_eq!(out.height(), 3);
    assert_eq!(out.column("value").unwrap().dtype(), &DataType::Int64);
    // Ids 2 and 2 belong to different rows, so the violation remains.
    assert!(!report.validation_passed);
    assert_eq!(
        report.validation_errors,
        vec!["Column id has 1 duplicate values"]
    );
}

#[test]
fn force_clean_can_fix_the_violation() {
    let pipeline = Pipeline::new(failing_config(true));

    let (out, report) = pipeline.run(&repeated_row_frame()).unwrap();

    assert!(report.validation_passed);
    assert!(report.validation_errors.is_empty());
    assert_eq!(report.rows_before, 4);
    assert_eq!(report.rows_after, 3);
    assert_eq!(out.height(), 3);
}

#[test]
fn passing_table_is_cleaned() {
    let config = PipelineConfig::new()
        .with_cleaner_config(CleanerConfig::new().with_missing_strategy("drop"))
        .with_validator_rules(ValidationRules::new().with_required_columns(["id", "name"]));

    let (out, report) = Pipeline::new(config).run(&sample_frame()).unwrap();

    assert!(report.validation_passed);
    assert!(report.rows_before > report.rows_after);
    assert_eq!(out.height(), 3);
}

#[test]
fn empty_configuration_cleans_without_rules() {
    let (out, report) = Pipeline::default().run(&sample_frame()).unwrap();

    assert!(report.validation_passed);
    assert_eq!(report.rows_after, 4);
    assert_eq!(out.column("name").unwrap().null_count(), 1);
}

#[test]
fn pipeline_is_reusable_across_runs() {
    let pipeline = Pipeline::new(failing_config(true));

    let (_, first) = pipeline.run(&repeated_row_frame()).unwrap();
    let (_, second) = pipeline.run(&repeated_row_frame()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn report_serializes_with_plain_keys() {
    let (_, report) = Pipeline::new(failing_config(true))
        .run(&repeated_row_frame())
        .unwrap();

    insta::assert_json_snapshot!(report, @r#"
    {
      "validation_passed": true,
      "validation_errors": [],
      "rows_before": 4,
      "rows_after": 3
    }
    "#);
    let parsed: PipelineReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn report_renders_summary_table() {
    let (_, report) = Pipeline::new(failing_config(false))
        .run(&sample_frame())
        .unwrap();

    let rendered = report.to_string();

    assert!(rendered.contains("failed"));
    assert!(rendered.contains("rows_before"));
    assert!(rendered.contains("Column id has 1 duplicate values"));
}

#[test]
fn pipeline_loads_from_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline.yaml");
    fs::write(
        &path,
        "cleaner_config:\n  missing_strategy: drop\n\
         validator_rules:\n  required_columns: [id, name]\n  unique_columns: [id]\n\
         force_clean: true\n",
    )
    .unwrap();

    let pipeline = Pipeline::from_yaml(&path).unwrap();
    let (_, report) = pipeline.run(&repeated_row_frame()).unwrap();

    assert!(pipeline.force_clean());
    assert!(report.validation_passed);
    assert_eq!(report.rows_after, 3);
}

#[test]
fn pipeline_loads_from_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline.json");
    fs::write(
        &path,
        r#"{"validator_rules": {"value_ranges": {"value": [0, 25]}}, "force_clean": false}"#,
    )
    .unwrap();

    let pipeline = Pipeline::from_config_file(&path).unwrap();
    let (_, report) = pipeline.run(&sample_frame()).unwrap();

    assert_eq!(
        report.validation_errors,
        vec!["Column value has 1 values outside range [0, 25]"]
    );
    assert_eq!(report.rows_after, 0);
}

#[test]
fn unknown_options_do_not_break_the_pipeline() {
    let config = PipelineConfig::from_yaml_str(
        "cleaner_config:\n  missing_strategy: backfill\n  extra: 1\nretries: 3\n",
    )
    .unwrap();

    let (out, report) = Pipeline::new(config).run(&sample_frame()).unwrap();

    assert!(report.validation_passed);
    assert_eq!(out.height(), 4);
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Pipeline::from_config_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ScrubError::ConfigRead { .. }));
}
