use laureate_chart::ChartError;
use laureate_chart::api::{ChartConfig, StaticLabels};
use laureate_chart::core::{Margins, ValidationPolicy, Viewport};

#[test]
fn defaults_match_reference_layout() {
    let config = ChartConfig::default();
    assert_eq!(config.viewport, Viewport::new(800, 400));
    assert_eq!(config.margins, Margins::new(50, 30, 60, 70));
    assert_eq!(config.validation_policy, ValidationPolicy::Abort);
    assert_eq!(config.labels, StaticLabels::default());

    let plot = config.plot_area().expect("plot area");
    assert_eq!((plot.left, plot.top, plot.width, plot.height), (70.0, 50.0, 700.0, 290.0));
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ChartConfig::new(Viewport::new(1024, 512))
        .with_margins(Margins::new(40, 20, 40, 60))
        .with_validation_policy(ValidationPolicy::SkipAndReport);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"skip_and_report\""));
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = ChartConfig::from_json_str(
        r#"{ "viewport": { "width": 640, "height": 320 }, "labels": { "title": "Custom", "x_axis": "Year", "y_axis": "Count" } }"#,
    )
    .expect("parse");

    assert_eq!(parsed.viewport, Viewport::new(640, 320));
    assert_eq!(parsed.labels.title, "Custom");
    assert_eq!(parsed.margins, Margins::default());
    assert_eq!(parsed.x_tick_count, 10);
    assert!((parsed.line_stroke_width - 2.0).abs() <= 1e-12);
}

#[test]
fn partial_nested_objects_fall_back_to_defaults() {
    let parsed = ChartConfig::from_json_str(
        r#"{
            "labels": { "title": "Custom" },
            "legend": { "row_height_px": 25.0 },
            "margins": { "left": 90 },
            "fonts": { "title_px": 20.0 }
        }"#,
    )
    .expect("parse");

    let defaults = ChartConfig::default();
    assert_eq!(parsed.labels.title, "Custom");
    assert_eq!(parsed.labels.x_axis, defaults.labels.x_axis);
    assert_eq!(parsed.labels.y_axis, defaults.labels.y_axis);

    assert!((parsed.legend.row_height_px - 25.0).abs() <= 1e-12);
    assert!((parsed.legend.inset_from_right_px - 150.0).abs() <= 1e-12);
    assert!((parsed.legend.label_offset_y_px - 10.0).abs() <= 1e-12);

    assert_eq!(parsed.margins, Margins::new(50, 30, 60, 90));

    assert!((parsed.fonts.title_px - 20.0).abs() <= 1e-12);
    assert_eq!(parsed.fonts.legend_px, defaults.fonts.legend_px);
}

#[test]
fn empty_object_is_the_default_config() {
    let parsed = ChartConfig::from_json_str("{}").expect("parse");
    assert_eq!(parsed, ChartConfig::default());
}

#[test]
fn margins_wider_than_viewport_are_rejected() {
    let config = ChartConfig::new(Viewport::new(90, 400));
    let err = config.validate().expect_err("no room for plot");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn zero_tick_count_is_rejected() {
    let mut config = ChartConfig::default();
    config.y_tick_count = 0;
    assert!(config.validate().is_err());
}

#[test]
fn non_positive_stroke_width_is_rejected() {
    let err = ChartConfig::from_json_str(r#"{ "line_stroke_width": 0.0 }"#)
        .expect_err("zero stroke width");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = ChartConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
