use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub paths_drawn: usize,
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames into a standalone SVG document held in memory.
///
/// Each `render` call replaces the previous document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    document: String,
    clear_color: Color,
    font_family: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: String::new(),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            font_family: "sans-serif".to_owned(),
            last_stats: SvgRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// The last rendered document; empty before the first render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// A fully transparent clear color omits the background rect.
    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> ChartResult<()> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "font family must not be blank".to_owned(),
            ));
        }
        self.font_family = family;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    /// Writes the last rendered document, creating parent directories as needed.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        if self.document.is_empty() {
            return Err(ChartError::InvalidData(
                "nothing rendered yet; call `render` first".to_owned(),
            ));
        }
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.document.as_bytes())?;
        debug!(path = %path.display(), bytes = self.document.len(), "wrote svg document");
        Ok(())
    }

    fn write_document(&self, frame: &RenderFrame) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();
        let (width, height) = (frame.viewport.width, frame.viewport.height);

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        if self.clear_color.alpha > 0.0 {
            writeln!(
                out,
                r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"{}/>"#,
                self.clear_color.to_hex(),
                opacity_attr("fill-opacity", self.clear_color),
            )?;
        }

        out.push_str("<g class=\"series\">\n");
        for path in &frame.paths {
            let mut d = String::new();
            for (index, (x, y)) in path.points.iter().enumerate() {
                let command = if index == 0 { 'M' } else { 'L' };
                if index > 0 {
                    d.push(' ');
                }
                write!(d, "{command}{},{}", num(*x), num(*y))?;
            }
            writeln!(
                out,
                r#"<path d="{d}" fill="none" stroke="{}" stroke-width="{}"{}/>"#,
                path.color.to_hex(),
                num(path.stroke_width),
                opacity_attr("stroke-opacity", path.color),
            )?;
            stats.paths_drawn += 1;
        }
        out.push_str("</g>\n<g class=\"guides\">\n");

        for line in &frame.lines {
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{}/>"#,
                num(line.x1),
                num(line.y1),
                num(line.x2),
                num(line.y2),
                line.color.to_hex(),
                num(line.stroke_width),
                opacity_attr("stroke-opacity", line.color),
            )?;
            stats.lines_drawn += 1;
        }

        for rect in &frame.rects {
            writeln!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                rect.fill_color.to_hex(),
                opacity_attr("fill-opacity", rect.fill_color),
            )?;
            stats.rects_drawn += 1;
        }
        out.push_str("</g>\n<g class=\"labels\">\n");

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let baseline = match text.v_align {
                TextVAlign::Top => "hanging",
                TextVAlign::Middle => "middle",
                TextVAlign::Baseline => "alphabetic",
            };
            write!(
                out,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}" text-anchor="{anchor}" dominant-baseline="{baseline}""#,
                num(text.x),
                num(text.y),
                escape_xml(&self.font_family),
                num(text.font_size_px),
                text.color.to_hex(),
            )?;
            if text.rotation_deg != 0.0 {
                write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    num(text.rotation_deg),
                    num(text.x),
                    num(text.y)
                )?;
            }
            writeln!(out, ">{}</text>", escape_xml(&text.text))?;
            stats.texts_drawn += 1;
        }
        out.push_str("</g>\n</svg>\n");

        Ok((out, stats))
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = self
            .write_document(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to format svg: {err}")))?;
        debug!(
            paths = stats.paths_drawn,
            lines = stats.lines_drawn,
            rects = stats.rects_drawn,
            texts = stats.texts_drawn,
            "rendered svg frame"
        );
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

/// Two-decimal fixed point with trailing zeros removed.
fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha < 1.0 {
        format!(r#" {name}="{}""#, num(color.alpha))
    } else {
        String::new()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
