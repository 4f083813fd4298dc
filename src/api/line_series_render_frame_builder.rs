use tracing::{trace, warn};

use crate::core::project_series_path;
use crate::error::ChartResult;
use crate::render::{PathPrimitive, RenderFrame};

use super::DrawRequest;
use super::render_frame_builder::{FrameContext, INK};

pub(super) fn append_line_series_primitives(
    frame: &mut RenderFrame,
    ctx: &FrameContext<'_>,
    request: DrawRequest<'_>,
) -> ChartResult<()> {
    for (group, points) in request.series {
        if points.is_empty() {
            continue;
        }
        let color = request.domains.color_for(*group).unwrap_or_else(|| {
            warn!(group = %group, "series has no assigned color");
            INK
        });
        let mapped = project_series_path(points, ctx.year_scale, ctx.count_scale, ctx.plot)?;
        trace!(group = %group, points = mapped.len(), "projected series path");
        frame
            .paths
            .push(PathPrimitive::new(mapped, ctx.config.line_stroke_width, color));
    }
    Ok(())
}
