//! laureate-chart: STEM vs Non-STEM laureate counts per year as a line chart.
//!
//! Records flow one way through the pipeline: classification, aggregation
//! into a `(group, year) -> count` table, domain resolution and series
//! building. The resulting `DrawRequest` becomes a backend-agnostic
//! `RenderFrame` that any `Renderer` can draw.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, LaureateChart, PipelineOutput, run_pipeline};
pub use error::{ChartError, ChartResult};
