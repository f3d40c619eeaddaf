use egui::{Context, PointerButton, Pos2, Rect};

/// Input the widget reacts to, in viewport coordinates.
///
/// Mouse and touch arrive as separate variants so the first-touch rule lives
/// in one place, [`PointerTracker::track`].
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary mouse button pressed
    PointerDown { position: Pos2 },
    /// Mouse moved, with or without a button held
    PointerMove { position: Pos2 },
    /// Primary mouse button released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
    /// Touch began; only the first touch point is used
    TouchStart { touches: Vec<Pos2> },
    TouchMove { touches: Vec<Pos2> },
    TouchEnd,
}

impl InputEvent {
    /// The viewport position this event carries, if any.
    pub fn viewport_position(&self) -> Option<Pos2> {
        match self {
            Self::PointerDown { position } | Self::PointerMove { position } => Some(*position),
            Self::TouchStart { touches } | Self::TouchMove { touches } => touches.first().copied(),
            Self::PointerUp | Self::PointerLeave | Self::TouchEnd => None,
        }
    }
}

/// A pointer gesture step in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Down(Pos2),
    Move(Pos2),
    Up,
}

/// Maps viewport events onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    /// Top-left corner of the canvas in viewport coordinates
    origin: Pos2,
}

impl PointerTracker {
    pub fn new(origin: Pos2) -> Self {
        Self { origin }
    }

    /// Update where the canvas sits, e.g. after a relayout or scroll.
    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    pub fn to_canvas(&self, viewport: Pos2) -> Pos2 {
        Pos2::ZERO + (viewport - self.origin)
    }

    /// Translate an event into a canvas-local action.
    ///
    /// Touch events without any touch point yield `None`.
    pub fn track(&self, event: &InputEvent) -> Option<PointerAction> {
        match event {
            InputEvent::PointerDown { .. } | InputEvent::TouchStart { .. } => event
                .viewport_position()
                .map(|pos| PointerAction::Down(self.to_canvas(pos))),
            InputEvent::PointerMove { .. } | InputEvent::TouchMove { .. } => event
                .viewport_position()
                .map(|pos| PointerAction::Move(self.to_canvas(pos))),
            InputEvent::PointerUp | InputEvent::PointerLeave | InputEvent::TouchEnd => {
                Some(PointerAction::Up)
            }
        }
    }
}

/// Converts raw egui input into [`InputEvent`]s for the canvas.
///
/// egui already folds touches into pointer events, so only those are read.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Whether the last known pointer position was over the canvas
    inside: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            inside: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.translate(&input.events))
    }

    /// Translate raw egui events, in order.
    pub fn translate(&mut self, events: &[egui::Event]) -> Vec<InputEvent> {
        let mut out = Vec::new();
        for event in events {
            match event {
                egui::Event::PointerMoved(position) => {
                    let inside = self.canvas_rect.contains(*position);
                    if inside {
                        out.push(InputEvent::PointerMove {
                            position: *position,
                        });
                    } else if self.inside {
                        out.push(InputEvent::PointerLeave);
                    }
                    self.inside = inside;
                }
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !*pressed {
                        out.push(InputEvent::PointerUp);
                    } else if self.canvas_rect.contains(*pos) {
                        self.inside = true;
                        out.push(InputEvent::PointerDown { position: *pos });
                    }
                }
                egui::Event::PointerGone => {
                    if self.inside {
                        out.push(InputEvent::PointerLeave);
                    }
                    self.inside = false;
                }
                _ => {}
            }
        }
        out
    }
}
