pub mod aggregate_table;
pub mod classifier;
pub mod palette;
pub mod record;
pub mod scale;
pub mod scale_resolver;
pub mod series_builder;
pub mod types;
pub mod validation;

pub use aggregate_table::{AggregateTable, aggregate};
pub use classifier::{STEM_CATEGORIES, category_group_of, classify, classify_at};
pub use palette::{CATEGORY10, ColorMapping};
pub use record::{CategoryGroup, ClassifiedRecord, RawRecord, SkippedRecord};
pub use scale::LinearScale;
pub use scale_resolver::{DomainSet, resolve_scales, resolve_scales_with_palette};
pub use series_builder::{SeriesPoint, SeriesSet, build_series, project_series_path};
pub use types::{Margins, PlotArea, Viewport};
pub use validation::ValidationPolicy;
