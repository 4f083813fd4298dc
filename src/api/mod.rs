mod axis_render_frame_builder;
pub mod axis_ticks;
mod chart;
mod chart_config;
mod json_contract;
mod legend_render_frame_builder;
mod line_series_render_frame_builder;
mod pipeline;
mod render_frame_builder;

pub use axis_ticks::{AxisTick, axis_ticks, linear_ticks, tick_step};
pub use chart::LaureateChart;
pub use chart_config::{ChartConfig, FontSizes, LegendLayout, StaticLabels};
pub use json_contract::{
    GroupSnapshot, PIPELINE_SNAPSHOT_JSON_SCHEMA_V1, PipelineSnapshot,
    PipelineSnapshotJsonContractV1,
};
pub use pipeline::{DrawRequest, PipelineOutput, classify_all, run_pipeline};
pub use render_frame_builder::build_render_frame;
