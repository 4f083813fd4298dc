use crate::core::{AggregateTable, CategoryGroup, ColorMapping};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Domains needed to map aggregated counts to geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainSet {
    pub year_domain: (i32, i32),
    /// Always anchored at zero.
    pub count_domain: (u32, u32),
    pub color_mapping: ColorMapping,
}

impl DomainSet {
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        (self.year_domain.0..=self.year_domain.1).contains(&year)
    }

    #[must_use]
    pub fn contains_count(&self, count: u32) -> bool {
        (self.count_domain.0..=self.count_domain.1).contains(&count)
    }

    #[must_use]
    pub fn color_for(&self, group: CategoryGroup) -> Option<Color> {
        self.color_mapping.color_for(group)
    }
}

/// Resolves domains with the default categorical palette.
pub fn resolve_scales(table: &AggregateTable) -> ChartResult<DomainSet> {
    resolve_scales_with_palette(table, &[])
}

pub fn resolve_scales_with_palette(
    table: &AggregateTable,
    palette: &[Color],
) -> ChartResult<DomainSet> {
    let mut cells = table.cells();
    let Some((_, first_year, first_count)) = cells.next() else {
        return Err(ChartError::EmptyDataset);
    };

    let (mut min_year, mut max_year, mut max_count) = (first_year, first_year, first_count);
    for (_, year, count) in cells {
        min_year = min_year.min(year);
        max_year = max_year.max(year);
        max_count = max_count.max(count);
    }

    let mut color_mapping = ColorMapping::with_palette(palette);
    for group in table.groups() {
        color_mapping.assign(group);
    }

    Ok(DomainSet {
        year_domain: (min_year, max_year),
        count_domain: (0, max_count),
        color_mapping,
    })
}
