use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn horizontal(self) -> u32 {
        self.left + self.right
    }

    #[must_use]
    pub const fn vertical(self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50, 30, 60, 70)
    }
}

/// Inner drawing rectangle of a chart, in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Returns `None` when the margins leave no room to draw.
    #[must_use]
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> Option<Self> {
        if !viewport.is_valid()
            || margins.horizontal() >= viewport.width
            || margins.vertical() >= viewport.height
        {
            return None;
        }

        Some(Self {
            left: f64::from(margins.left),
            top: f64::from(margins.top),
            width: f64::from(viewport.width - margins.horizontal()),
            height: f64::from(viewport.height - margins.vertical()),
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Converts plot-local coordinates to absolute frame coordinates.
    #[must_use]
    pub fn to_absolute(self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x, self.top + y)
    }
}
