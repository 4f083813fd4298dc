use crate::render::{RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

use super::DrawRequest;
use super::render_frame_builder::{FrameContext, INK};

/// One swatch + label row per series, in series order.
pub(super) fn append_legend_primitives(
    frame: &mut RenderFrame,
    ctx: &FrameContext<'_>,
    request: DrawRequest<'_>,
) {
    let layout = ctx.config.legend;
    let plot = ctx.plot;

    for (row, group) in request.series.keys().enumerate() {
        let color = request.domains.color_for(*group).unwrap_or(INK);
        let (origin_x, origin_y) = plot.to_absolute(
            plot.width - layout.inset_from_right_px,
            row as f64 * layout.row_height_px + layout.first_row_y_px,
        );

        frame.rects.push(RectPrimitive::new(
            origin_x + layout.swatch_offset_x_px,
            origin_y,
            layout.swatch_size_px,
            layout.swatch_size_px,
            color,
        ));
        frame.texts.push(
            TextPrimitive::new(
                group.label(),
                origin_x + layout.label_offset_x_px,
                origin_y + layout.label_offset_y_px,
                ctx.config.fonts.legend_px,
                INK,
                TextHAlign::Left,
            )
            .with_v_align(TextVAlign::Middle),
        );
    }
}
