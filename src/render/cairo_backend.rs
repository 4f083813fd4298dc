use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub paths_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo renderer backend drawing onto an offscreen
/// image surface that can be exported as PNG.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for path in &frame.paths {
            apply_color(context, path.color);
            context.set_line_width(path.stroke_width);
            context.set_line_join(cairo::LineJoin::Round);
            let mut points = path.points.iter();
            if let Some((x, y)) = points.next() {
                context.move_to(*x, *y);
            }
            for (x, y) in points {
                context.line_to(*x, *y);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke path", err))?;
            stats.paths_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for rect in &frame.rects {
            apply_color(context, rect.fill_color);
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let dx = match text.h_align {
                TextHAlign::Left => 0.0,
                TextHAlign::Center => -f64::from(text_width) / 2.0,
                TextHAlign::Right => -f64::from(text_width),
            };
            let dy = match text.v_align {
                TextVAlign::Top => 0.0,
                TextVAlign::Middle => -f64::from(text_height) / 2.0,
                TextVAlign::Baseline => -f64::from(layout.baseline()) / f64::from(pango::SCALE),
            };

            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            context.translate(text.x, text.y);
            if text.rotation_deg != 0.0 {
                context.rotate(text.rotation_deg.to_radians());
            }
            apply_color(context, text.color);
            context.move_to(dx, dy);
            pangocairo::functions::show_layout(context, &layout);
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
