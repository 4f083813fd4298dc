use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AggregateTable, CategoryGroup, LinearScale, PlotArea};
use crate::error::ChartResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub count: u32,
}

impl SeriesPoint {
    #[must_use]
    pub const fn new(year: i32, count: u32) -> Self {
        Self { year, count }
    }
}

/// Per-group point sequences, in first-seen group order.
pub type SeriesSet = IndexMap<CategoryGroup, Vec<SeriesPoint>>;

/// Flattens each group's year map into points sorted by ascending year.
#[must_use]
pub fn build_series(table: &AggregateTable) -> SeriesSet {
    table
        .iter()
        .map(|(group, years)| {
            let mut points: Vec<SeriesPoint> = years
                .iter()
                .map(|(year, count)| SeriesPoint::new(*year, *count))
                .collect();
            points.sort_by_key(|point| point.year);
            (group, points)
        })
        .collect()
}

/// Projects series points into absolute pixel coordinates inside `plot`.
///
/// `year_scale` spans the plot width left to right; `count_scale` spans the
/// plot height bottom to top.
pub fn project_series_path(
    points: &[SeriesPoint],
    year_scale: LinearScale,
    count_scale: LinearScale,
    plot: PlotArea,
) -> ChartResult<Vec<(f64, f64)>> {
    let mut mapped = Vec::with_capacity(points.len());
    for point in points {
        let x = year_scale.domain_to_range(f64::from(point.year), (0.0, plot.width))?;
        let y = count_scale.domain_to_range(f64::from(point.count), (plot.height, 0.0))?;
        mapped.push(plot.to_absolute(x, y));
    }
    Ok(mapped)
}
