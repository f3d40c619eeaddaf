use egui::Color32;

use crate::error::{DoodleError, DoodleResult};

/// Background the canvas is filled with, and the color the eraser paints.
pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(0xF7, 0xF7, 0xF7);

/// The eight swatches offered by default, in display order.
pub const DEFAULT_COLORS: [Color32; 8] = [
    Color32::from_rgb(0x8B, 0x00, 0x00), // dark red
    Color32::from_rgb(0xFF, 0xB6, 0xC1), // light pink
    Color32::from_rgb(0x00, 0x00, 0x8B), // dark blue
    Color32::from_rgb(0x87, 0xCE, 0xFA), // light sky blue
    Color32::from_rgb(0x00, 0x64, 0x00), // dark green
    Color32::from_rgb(0xFF, 0xFF, 0x00), // yellow
    Color32::from_rgb(0x00, 0x00, 0x00), // black
    Color32::from_rgb(0xFF, 0xFF, 0xFF), // white
];

/// Parse `#RRGGBB` (the leading `#` is optional) into an opaque color.
pub fn parse_hex_color(text: &str) -> DoodleResult<Color32> {
    let invalid = || DoodleError::InvalidColor(text.to_owned());
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format an opaque color as `#RRGGBB`.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// A fixed set of swatches with exactly one of them selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color32>,
    selected: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
            selected: 0,
        }
    }
}

impl Palette {
    /// Build a palette; the first swatch starts out selected.
    pub fn new(colors: Vec<Color32>) -> DoodleResult<Self> {
        if colors.is_empty() {
            return Err(DoodleError::EmptyPalette);
        }
        Ok(Self { colors, selected: 0 })
    }

    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> DoodleResult<Self> {
        let colors = colors
            .iter()
            .map(|hex| parse_hex_color(hex.as_ref()))
            .collect::<DoodleResult<Vec<_>>>()?;
        Self::new(colors)
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: construction rejects empty palettes.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_color(&self) -> Color32 {
        self.colors[self.selected]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Move the selection to `index` and return its color.
    ///
    /// An out-of-range index leaves the current selection untouched.
    pub fn select(&mut self, index: usize) -> Option<Color32> {
        let color = *self.colors.get(index)?;
        self.selected = index;
        Some(color)
    }
}
