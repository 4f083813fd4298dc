use crate::core::{LinearScale, PlotArea};
use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, TextHAlign, TextPrimitive};

use super::axis_render_frame_builder::append_axis_primitives;
use super::legend_render_frame_builder::append_legend_primitives;
use super::line_series_render_frame_builder::append_line_series_primitives;
use super::{ChartConfig, DrawRequest};

pub(super) const INK: Color = Color::rgb(0.0, 0.0, 0.0);

/// Geometry shared by every frame section.
#[derive(Debug, Clone, Copy)]
pub(super) struct FrameContext<'a> {
    pub plot: PlotArea,
    pub year_scale: LinearScale,
    pub count_scale: LinearScale,
    pub config: &'a ChartConfig,
}

impl FrameContext<'_> {
    pub(super) fn year_to_x(&self, year: f64) -> ChartResult<f64> {
        Ok(self.plot.left + self.year_scale.domain_to_range(year, (0.0, self.plot.width))?)
    }

    pub(super) fn count_to_y(&self, count: f64) -> ChartResult<f64> {
        Ok(self.plot.top + self.count_scale.domain_to_range(count, (self.plot.height, 0.0))?)
    }
}

/// Builds the complete draw request for one chart.
///
/// The result depends only on the request and `config`; building twice yields
/// equal frames.
pub fn build_render_frame(request: DrawRequest<'_>, config: &ChartConfig) -> ChartResult<RenderFrame> {
    config.validate()?;
    let plot = config.plot_area()?;
    let (year_min, year_max) = request.domains.year_domain;
    let (count_min, count_max) = request.domains.count_domain;
    let ctx = FrameContext {
        plot,
        year_scale: LinearScale::covering(f64::from(year_min), f64::from(year_max))?,
        count_scale: LinearScale::covering(f64::from(count_min), f64::from(count_max))?,
        config,
    };

    let mut frame = RenderFrame::new(config.viewport);
    append_line_series_primitives(&mut frame, &ctx, request)?;
    append_axis_primitives(&mut frame, &ctx)?;
    append_static_labels(&mut frame, &ctx, request);
    append_legend_primitives(&mut frame, &ctx, request);

    frame.validate()?;
    Ok(frame)
}

fn append_static_labels(frame: &mut RenderFrame, ctx: &FrameContext<'_>, request: DrawRequest<'_>) {
    let plot = ctx.plot;
    let margins = ctx.config.margins;
    let fonts = ctx.config.fonts;
    let labels = request.labels;

    if !labels.title.is_empty() {
        let (x, y) = plot.to_absolute(plot.width / 2.0, -f64::from(margins.top) / 2.0);
        frame.texts.push(TextPrimitive::new(
            labels.title.clone(),
            x,
            y,
            fonts.title_px,
            INK,
            TextHAlign::Center,
        ));
    }

    if !labels.x_axis.is_empty() {
        let (x, y) = plot.to_absolute(plot.width / 2.0, plot.height + f64::from(margins.bottom) / 1.5);
        frame.texts.push(TextPrimitive::new(
            labels.x_axis.clone(),
            x,
            y,
            fonts.axis_label_px,
            INK,
            TextHAlign::Center,
        ));
    }

    if !labels.y_axis.is_empty() {
        let (x, y) = plot.to_absolute(-f64::from(margins.left) / 1.5, plot.height / 2.0);
        frame.texts.push(
            TextPrimitive::new(
                labels.y_axis.clone(),
                x,
                y,
                fonts.axis_label_px,
                INK,
                TextHAlign::Center,
            )
            .rotated(-90.0),
        );
    }
}
