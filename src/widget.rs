use egui::{Color32, Pos2};

use crate::config::DoodleConfig;
use crate::error::DoodleResult;
use crate::export::Export;
use crate::history::History;
use crate::input::{InputEvent, PointerAction, PointerTracker};
use crate::palette::Palette;
use crate::state::EditorState;
use crate::stroke;
use crate::surface::Surface;
use crate::tool::{BrushWidth, ToolState};

/// One drawing widget: surface, tools, palette and history in a single value.
///
/// Nothing is global, so several widgets can live side by side. All methods
/// run synchronously in the order events are delivered.
#[derive(Debug)]
pub struct DoodleWidget {
    surface: Surface,
    tools: ToolState,
    palette: Palette,
    history: History,
    state: EditorState,
    tracker: PointerTracker,
    settings_visible: bool,
    export_filename: String,
    /// Bumped whenever the bitmap changes
    revision: u64,
}

impl DoodleWidget {
    /// Create a widget with a background-filled surface and one seed snapshot.
    pub fn new(config: &DoodleConfig) -> DoodleResult<Self> {
        config.validate()?;
        let surface = Surface::new(config.width, config.height, config.background_color()?)?;
        let palette = config.build_palette()?;
        let tools = ToolState::new(
            palette.selected_color(),
            BrushWidth::new(config.brush_width),
        );

        let mut history = History::new(config.history_limit);
        history.snapshot(&surface)?;

        log::debug!(
            "Created {}x{} doodle widget with {} swatches",
            config.width,
            config.height,
            palette.len()
        );

        Ok(Self {
            surface,
            tools,
            palette,
            history,
            state: EditorState::Idle,
            tracker: PointerTracker::default(),
            settings_visible: false,
            export_filename: config.export_filename.clone(),
            revision: 0,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Tell the widget where its canvas sits in the viewport.
    pub fn set_canvas_origin(&mut self, origin: Pos2) {
        self.tracker.set_origin(origin);
    }

    /// Feed one input event through the Idle/Drawing state machine.
    pub fn handle_event(&mut self, event: &InputEvent) -> DoodleResult<()> {
        match self.tracker.track(event) {
            Some(PointerAction::Down(pos)) => self.begin_stroke(pos),
            Some(PointerAction::Move(pos)) => {
                self.continue_stroke(pos);
                Ok(())
            }
            Some(PointerAction::Up) => {
                self.end_stroke();
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Start a stroke at a canvas-local point.
    ///
    /// The stroke starts even if the undo snapshot cannot be taken; the error
    /// is still returned.
    pub fn begin_stroke(&mut self, pos: Pos2) -> DoodleResult<()> {
        if self.state.is_drawing() {
            log::debug!("Stroke restarted at {:?}", pos);
        } else {
            log::debug!("Stroke started at {:?}", pos);
        }
        self.state = EditorState::begin(pos);
        self.history.snapshot(&self.surface)
    }

    /// Draw a segment to `pos` if a stroke is in progress.
    pub fn continue_stroke(&mut self, pos: Pos2) {
        let EditorState::Drawing { last, segments } = &mut self.state else {
            return;
        };
        let style = self.tools.stroke_style(self.surface.background());
        stroke::draw_segment(&mut self.surface, *last, pos, style);
        *last = pos;
        *segments += 1;
        self.revision += 1;
    }

    pub fn end_stroke(&mut self) {
        if let EditorState::Drawing { segments, .. } = self.state {
            log::debug!("Stroke finished after {} segments", segments);
        }
        self.state = EditorState::Idle;
    }

    /// Select swatch `index`, which also leaves eraser mode.
    ///
    /// Returns false for an index outside the palette.
    pub fn select_color(&mut self, index: usize) -> bool {
        match self.palette.select(index) {
            Some(color) => {
                self.tools.set_color(color);
                true
            }
            None => {
                log::warn!("No swatch at index {}", index);
                false
            }
        }
    }

    pub fn active_color(&self) -> Color32 {
        self.tools.color()
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.tools.set_brush_width(width);
    }

    pub fn brush_width(&self) -> u8 {
        self.tools.brush_width().get()
    }

    pub fn toggle_eraser(&mut self) -> bool {
        self.tools.toggle_eraser()
    }

    pub fn is_erasing(&self) -> bool {
        self.tools.is_erasing()
    }

    pub fn toggle_settings(&mut self) -> bool {
        self.settings_visible = !self.settings_visible;
        self.settings_visible
    }

    pub fn settings_visible(&self) -> bool {
        self.settings_visible
    }

    /// Returns whether anything was undone.
    pub fn undo(&mut self) -> DoodleResult<bool> {
        let changed = self.history.undo(&mut self.surface)?;
        if changed {
            self.revision += 1;
        }
        Ok(changed)
    }

    /// Returns whether anything was redone.
    pub fn redo(&mut self) -> DoodleResult<bool> {
        let changed = self.history.redo(&mut self.surface)?;
        if changed {
            self.revision += 1;
        }
        Ok(changed)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Encode the current bitmap under the configured filename.
    pub fn export(&self) -> DoodleResult<Export> {
        Export::encode(&self.surface, self.export_filename.as_str())
    }
}
