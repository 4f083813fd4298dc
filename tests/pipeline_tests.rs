use laureate_chart::api::classify_all;
use laureate_chart::core::{CategoryGroup, RawRecord, SeriesPoint, ValidationPolicy};
use laureate_chart::{ChartError, run_pipeline};

fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new(1990, "Physics", "A"),
        RawRecord::new(1990, "Literature", "B"),
        RawRecord::new(1991, "Chemistry", "C"),
    ]
}

#[test]
fn two_year_scenario_produces_expected_series_and_domains() {
    let output = run_pipeline(&sample_records(), ValidationPolicy::Abort).expect("pipeline");

    assert_eq!(
        output.series[&CategoryGroup::Stem],
        vec![SeriesPoint::new(1990, 1), SeriesPoint::new(1991, 1)]
    );
    assert_eq!(
        output.series[&CategoryGroup::NonStem],
        vec![SeriesPoint::new(1990, 1)]
    );
    assert_eq!(output.domains.year_domain, (1990, 1991));
    assert_eq!(output.domains.count_domain, (0, 1));
    assert_eq!(output.record_count(), 3);
    assert!(output.skipped.is_empty());
}

#[test]
fn empty_input_is_an_empty_dataset_error() {
    let err = run_pipeline(&[], ValidationPolicy::Abort).expect_err("empty input");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn pipeline_is_idempotent_for_same_input() {
    let records = sample_records();
    let first = run_pipeline(&records, ValidationPolicy::Abort).expect("first run");
    let second = run_pipeline(&records, ValidationPolicy::Abort).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn abort_policy_fails_on_blank_category_with_row_number() {
    let mut records = sample_records();
    records.insert(1, RawRecord::new(1992, "", "Blank"));

    let err = run_pipeline(&records, ValidationPolicy::Abort).expect_err("blank category");
    match err {
        ChartError::Validation { row, field, .. } => {
            assert_eq!(row, 2);
            assert_eq!(field, "category");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn skip_policy_drops_and_reports_invalid_records() {
    let mut records = sample_records();
    records.push(RawRecord::new(1992, "  ", "Blank"));

    let output = run_pipeline(&records, ValidationPolicy::SkipAndReport).expect("pipeline");
    assert_eq!(output.record_count(), 3);
    assert_eq!(output.skipped.len(), 1);
    assert_eq!(output.skipped[0].row, 4);
    assert_eq!(output.skipped[0].field, "category");
    assert_eq!(output.domains.year_domain, (1990, 1991));
}

#[test]
fn skip_policy_with_only_invalid_records_is_empty_dataset() {
    let records = vec![RawRecord::new(1990, "", "x"), RawRecord::new(1991, " ", "y")];
    let err = run_pipeline(&records, ValidationPolicy::SkipAndReport).expect_err("nothing left");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn classify_all_collects_skips_in_input_order() {
    let records = vec![
        RawRecord::new(1990, "", "x"),
        RawRecord::new(1990, "Peace", "y"),
        RawRecord::new(1990, " ", "z"),
    ];
    let mut skipped = Vec::new();
    let classified =
        classify_all(&records, ValidationPolicy::SkipAndReport, &mut skipped).expect("classify");

    assert_eq!(classified.len(), 1);
    assert_eq!(classified[0].category_group, CategoryGroup::NonStem);
    let rows: Vec<usize> = skipped.iter().map(|skip| skip.row).collect();
    assert_eq!(rows, vec![1, 3]);
}

#[test]
fn single_year_dataset_still_resolves() {
    let records = vec![RawRecord::new(2000, "Physics", "a")];
    let output = run_pipeline(&records, ValidationPolicy::Abort).expect("pipeline");
    assert_eq!(output.domains.year_domain, (2000, 2000));
    assert_eq!(output.domains.count_domain, (0, 1));
    assert_eq!(output.series.len(), 1);
}
