use approx::assert_abs_diff_eq;
use laureate_chart::core::{
    CategoryGroup, LinearScale, Margins, PlotArea, RawRecord, SeriesPoint, Viewport, aggregate,
    build_series, classify, project_series_path,
};

fn series_for(rows: &[(i32, &str)]) -> laureate_chart::core::SeriesSet {
    let records: Vec<_> = rows
        .iter()
        .map(|(year, category)| classify(&RawRecord::new(*year, *category, "")).expect("classify"))
        .collect();
    build_series(&aggregate(&records))
}

#[test]
fn points_are_sorted_by_year_without_zero_fill() {
    let series = series_for(&[
        (2001, "Physics"),
        (1999, "Physics"),
        (2001, "Chemistry"),
        (1995, "Medicine"),
    ]);

    assert_eq!(
        series[&CategoryGroup::Stem],
        vec![
            SeriesPoint::new(1995, 1),
            SeriesPoint::new(1999, 1),
            SeriesPoint::new(2001, 2),
        ]
    );
    assert!(!series.contains_key(&CategoryGroup::NonStem));
}

#[test]
fn years_are_strictly_increasing_and_counts_positive() {
    let series = series_for(&[
        (1950, "Peace"),
        (1901, "Peace"),
        (1950, "Literature"),
        (1975, "Physics"),
        (1901, "Economics"),
    ]);

    for points in series.values() {
        assert!(points.windows(2).all(|pair| pair[0].year < pair[1].year));
        assert!(points.iter().all(|point| point.count > 0));
    }
}

#[test]
fn series_keep_first_seen_group_order() {
    let series = series_for(&[(1990, "Literature"), (1990, "Physics")]);
    let groups: Vec<CategoryGroup> = series.keys().copied().collect();
    assert_eq!(groups, vec![CategoryGroup::NonStem, CategoryGroup::Stem]);
}

#[test]
fn projection_maps_into_plot_area() {
    let plot = PlotArea::from_viewport(Viewport::new(800, 400), Margins::default())
        .expect("plot area");
    let year_scale = LinearScale::new(1990.0, 2000.0).expect("year scale");
    let count_scale = LinearScale::new(0.0, 4.0).expect("count scale");
    let points = [SeriesPoint::new(1990, 4), SeriesPoint::new(1995, 2), SeriesPoint::new(2000, 0)];

    let mapped = project_series_path(&points, year_scale, count_scale, plot).expect("project");
    assert_eq!(mapped.len(), 3);

    assert_abs_diff_eq!(mapped[0].0, 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapped[0].1, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapped[1].0, 420.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapped[1].1, 195.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapped[2].0, 770.0, epsilon = 1e-9);
    assert_abs_diff_eq!(mapped[2].1, 340.0, epsilon = 1e-9);
}
