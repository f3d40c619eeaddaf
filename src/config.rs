use std::path::PathBuf;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{DoodleError, DoodleResult};
use crate::export::EXPORT_FILENAME;
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::palette::{self, CANVAS_BACKGROUND, DEFAULT_COLORS, Palette};
use crate::tool::DEFAULT_BRUSH_WIDTH;

/// Settings an embedder can pass when creating a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults
pub struct DoodleConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Canvas background as `#RRGGBB`; also what the eraser paints
    pub background: String,
    /// Swatch colors as `#RRGGBB`, in display order
    pub palette: Vec<String>,
    /// Initial brush width, clamped to 1..=50
    pub brush_width: u32,
    /// Maximum entries per undo/redo stack, `None` for unbounded
    pub history_limit: Option<usize>,
    pub export_filename: String,
    /// Where native builds write the export
    pub export_dir: PathBuf,
}

impl Default for DoodleConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: palette::to_hex(CANVAS_BACKGROUND),
            palette: DEFAULT_COLORS.iter().copied().map(palette::to_hex).collect(),
            brush_width: DEFAULT_BRUSH_WIDTH as u32,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            export_filename: EXPORT_FILENAME.to_owned(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl DoodleConfig {
    pub fn from_json(json: &str) -> DoodleResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> DoodleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check everything a widget needs to start.
    pub fn validate(&self) -> DoodleResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DoodleError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        self.background_color()?;
        self.build_palette()?;
        Ok(())
    }

    pub fn background_color(&self) -> DoodleResult<Color32> {
        palette::parse_hex_color(&self.background)
    }

    pub fn build_palette(&self) -> DoodleResult<Palette> {
        Palette::from_hex(&self.palette)
    }
}
