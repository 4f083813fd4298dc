use indexmap::IndexMap;

use crate::core::CategoryGroup;
use crate::render::Color;

/// The ten-color categorical palette used for series strokes and legend swatches.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Ordinal group -> color assignment.
///
/// Colors are handed out in insertion order and cycle once the palette is
/// exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapping {
    palette: Vec<Color>,
    assigned: IndexMap<CategoryGroup, Color>,
}

impl ColorMapping {
    /// An empty palette falls back to `CATEGORY10`.
    #[must_use]
    pub fn with_palette(palette: &[Color]) -> Self {
        let palette = if palette.is_empty() {
            CATEGORY10.to_vec()
        } else {
            palette.to_vec()
        };
        Self {
            palette,
            assigned: IndexMap::new(),
        }
    }

    /// Assigns the next palette color to `group` unless it already has one.
    pub fn assign(&mut self, group: CategoryGroup) -> Color {
        let next = self.palette[self.assigned.len() % self.palette.len()];
        *self.assigned.entry(group).or_insert(next)
    }

    #[must_use]
    pub fn color_for(&self, group: CategoryGroup) -> Option<Color> {
        self.assigned.get(&group).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryGroup, Color)> + '_ {
        self.assigned.iter().map(|(group, color)| (*group, *color))
    }
}

impl Default for ColorMapping {
    fn default() -> Self {
        Self::with_palette(&CATEGORY10)
    }
}
