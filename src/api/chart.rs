use tracing::debug;

use crate::core::RawRecord;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartConfig, PipelineOutput, build_render_frame, run_pipeline};

/// Orchestration facade: runs the pipeline for a dataset and hands the
/// resulting frame to the renderer.
///
/// The chart keeps no data between calls; every `render_records` starts from
/// scratch.
pub struct LaureateChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
}

impl<R: Renderer> LaureateChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn build_render_frame(&self, output: &PipelineOutput) -> ChartResult<RenderFrame> {
        build_render_frame(output.draw_request(&self.config.labels), &self.config)
    }

    pub fn render(&mut self, output: &PipelineOutput) -> ChartResult<()> {
        let frame = self.build_render_frame(output)?;
        debug!(
            paths = frame.paths.len(),
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "rendering chart frame"
        );
        self.renderer.render(&frame)
    }

    /// Runs the pipeline with the configured validation policy, then renders.
    pub fn render_records(&mut self, records: &[RawRecord]) -> ChartResult<PipelineOutput> {
        let output = run_pipeline(records, self.config.validation_policy)?;
        self.render(&output)?;
        Ok(output)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
