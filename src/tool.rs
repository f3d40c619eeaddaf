use egui::Color32;

use crate::stroke::StrokeStyle;

pub const MIN_BRUSH_WIDTH: u8 = 1;
pub const MAX_BRUSH_WIDTH: u8 = 50;
pub const DEFAULT_BRUSH_WIDTH: u8 = 3;

/// Brush width in canvas pixels, always within `MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrushWidth(u8);

impl BrushWidth {
    /// Clamps `width` into the allowed range.
    pub fn new(width: u32) -> Self {
        let clamped = width.clamp(MIN_BRUSH_WIDTH as u32, MAX_BRUSH_WIDTH as u32);
        Self(clamped as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for BrushWidth {
    fn default() -> Self {
        Self(DEFAULT_BRUSH_WIDTH)
    }
}

/// Settings the panel controls and the stroke renderer reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    color: Color32,
    width: BrushWidth,
    erasing: bool,
}

impl ToolState {
    pub fn new(color: Color32, width: BrushWidth) -> Self {
        Self {
            color,
            width,
            erasing: false,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_width(&self) -> BrushWidth {
        self.width
    }

    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// Picking a color always leaves eraser mode.
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
        self.erasing = false;
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.width = BrushWidth::new(width);
    }

    /// Flip eraser mode and return the new state. The active color is kept.
    pub fn toggle_eraser(&mut self) -> bool {
        self.erasing = !self.erasing;
        self.erasing
    }

    /// Style of the next segment on a canvas filled with `background`.
    pub fn stroke_style(&self, background: Color32) -> StrokeStyle {
        let color = if self.erasing { background } else { self.color };
        StrokeStyle::new(color, self.width.get() as f32)
    }
}
