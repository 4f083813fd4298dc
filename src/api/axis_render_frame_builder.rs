use crate::error::ChartResult;
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

use super::axis_ticks::axis_ticks;
use super::render_frame_builder::{FrameContext, INK};

pub(super) const AXIS_STROKE_WIDTH: f64 = 1.0;
pub(super) const TICK_SIZE_PX: f64 = 6.0;
pub(super) const TICK_LABEL_GAP_PX: f64 = 3.0;

/// Bottom year axis and left count axis: domain line with outer ticks, inner
/// tick marks and tick labels.
pub(super) fn append_axis_primitives(frame: &mut RenderFrame, ctx: &FrameContext<'_>) -> ChartResult<()> {
    append_bottom_axis(frame, ctx)?;
    append_left_axis(frame, ctx)
}

fn append_bottom_axis(frame: &mut RenderFrame, ctx: &FrameContext<'_>) -> ChartResult<()> {
    let plot = ctx.plot;
    let (left, right, bottom) = (plot.left, plot.right(), plot.bottom());
    let line = |x1, y1, x2, y2| LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_WIDTH, INK);

    frame.lines.push(line(left, bottom, right, bottom));
    frame.lines.push(line(left, bottom, left, bottom + TICK_SIZE_PX));
    frame.lines.push(line(right, bottom, right, bottom + TICK_SIZE_PX));

    let (start, end) = ctx.year_scale.domain();
    for tick in axis_ticks(start, end, ctx.config.x_tick_count) {
        let x = ctx.year_to_x(tick.value)?;
        frame.lines.push(line(x, bottom, x, bottom + TICK_SIZE_PX));
        frame.texts.push(
            TextPrimitive::new(
                tick.label,
                x,
                bottom + TICK_SIZE_PX + TICK_LABEL_GAP_PX,
                ctx.config.fonts.tick_label_px,
                INK,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Top),
        );
    }
    Ok(())
}

fn append_left_axis(frame: &mut RenderFrame, ctx: &FrameContext<'_>) -> ChartResult<()> {
    let plot = ctx.plot;
    let (left, top, bottom) = (plot.left, plot.top, plot.bottom());
    let line = |x1, y1, x2, y2| LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_WIDTH, INK);

    frame.lines.push(line(left, top, left, bottom));
    frame.lines.push(line(left - TICK_SIZE_PX, top, left, top));
    frame.lines.push(line(left - TICK_SIZE_PX, bottom, left, bottom));

    let (start, end) = ctx.count_scale.domain();
    for tick in axis_ticks(start, end, ctx.config.y_tick_count) {
        let y = ctx.count_to_y(tick.value)?;
        frame.lines.push(line(left - TICK_SIZE_PX, y, left, y));
        frame.texts.push(
            TextPrimitive::new(
                tick.label,
                left - TICK_SIZE_PX - TICK_LABEL_GAP_PX,
                y,
                ctx.config.fonts.tick_label_px,
                INK,
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle),
        );
    }
    Ok(())
}
