use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, ValidationPolicy, Viewport};
use crate::error::{ChartError, ChartResult};

/// Fixed chart texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl Default for StaticLabels {
    fn default() -> Self {
        Self {
            title: "Nobel Laureates Over Time: STEM vs Non-STEM".to_owned(),
            x_axis: "Year".to_owned(),
            y_axis: "Number of Laureates".to_owned(),
        }
    }
}

/// Legend placement relative to the plot area's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLayout {
    /// Distance of each entry's origin from the plot's right edge.
    pub inset_from_right_px: f64,
    pub first_row_y_px: f64,
    pub row_height_px: f64,
    pub swatch_offset_x_px: f64,
    pub swatch_size_px: f64,
    pub label_offset_x_px: f64,
    /// Label anchor below the entry origin, independent of the swatch size.
    pub label_offset_y_px: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            inset_from_right_px: 150.0,
            first_row_y_px: -30.0,
            row_height_px: 20.0,
            swatch_offset_x_px: 10.0,
            swatch_size_px: 10.0,
            label_offset_x_px: 30.0,
            label_offset_y_px: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title_px: f64,
    pub axis_label_px: f64,
    pub tick_label_px: f64,
    pub legend_px: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title_px: 16.0,
            axis_label_px: 12.0,
            tick_label_px: 10.0,
            legend_px: 12.0,
        }
    }
}

/// Chart setup loaded by the CLI or built in code.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub labels: StaticLabels,
    #[serde(default = "default_line_stroke_width")]
    pub line_stroke_width: f64,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
    #[serde(default)]
    pub legend: LegendLayout,
    #[serde(default)]
    pub fonts: FontSizes,
    #[serde(default)]
    pub validation_policy: ValidationPolicy,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: StaticLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_validation_policy(mut self, policy: ValidationPolicy) -> Self {
        self.validation_policy = policy;
        self
    }

    /// The plot rectangle left after margins.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        PlotArea::from_viewport(self.viewport, self.margins).ok_or_else(|| {
            ChartError::InvalidData("margins leave no room for the plot area".to_owned())
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot_area()?;
        if !self.line_stroke_width.is_finite() || self.line_stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if self.x_tick_count == 0 || self.y_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick counts must be > 0".to_owned(),
            ));
        }
        for (name, size) in [
            ("title", self.fonts.title_px),
            ("axis label", self.fonts.axis_label_px),
            ("tick label", self.fonts.tick_label_px),
            ("legend", self.fonts.legend_px),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} font size must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: Margins::default(),
            labels: StaticLabels::default(),
            line_stroke_width: default_line_stroke_width(),
            x_tick_count: default_tick_count(),
            y_tick_count: default_tick_count(),
            legend: LegendLayout::default(),
            fonts: FontSizes::default(),
            validation_policy: ValidationPolicy::default(),
        }
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(800, 400)
}

fn default_line_stroke_width() -> f64 {
    2.0
}

fn default_tick_count() -> usize {
    10
}
