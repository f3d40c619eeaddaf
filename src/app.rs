use std::path::PathBuf;

use eframe::egui;

use crate::config::DoodleConfig;
use crate::error::{DoodleError, DoodleResult};
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::widget::DoodleWidget;

/// The eframe application hosting one doodle widget.
pub struct DoodleApp {
    widget: DoodleWidget,
    renderer: Renderer,
    input: InputHandler,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    export_dir: PathBuf,
    /// Last export or error message shown under the tools
    status: Option<String>,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DoodleConfig) -> DoodleResult<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::from_config(config)
    }

    /// Build the app state without a window; the texture is created on first render.
    pub fn from_config(config: DoodleConfig) -> DoodleResult<Self> {
        let widget = DoodleWidget::new(&config)?;
        Ok(Self {
            widget,
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            export_dir: config.export_dir,
            status: None,
        })
    }

    pub fn widget(&self) -> &DoodleWidget {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut DoodleWidget {
        &mut self.widget
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Route this frame's pointer input to the widget.
    ///
    /// `canvas_rect` is the full canvas and fixes the coordinate origin.
    /// `visible_rect` is the part of it on screen; only it is hit-tested.
    pub fn handle_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: egui::Rect,
        visible_rect: egui::Rect,
    ) {
        self.input.set_canvas_rect(visible_rect);
        self.widget.set_canvas_origin(canvas_rect.min);

        for event in self.input.process_input(ctx) {
            if let Err(err) = self.widget.handle_event(&event) {
                self.report(err);
            }
        }
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(ctx, painter, rect, &self.widget);
    }

    pub fn undo(&mut self) {
        if let Err(err) = self.widget.undo() {
            self.report(err);
        }
    }

    pub fn redo(&mut self) {
        if let Err(err) = self.widget.redo() {
            self.report(err);
        }
    }

    /// Encode the drawing and hand it to the platform.
    pub fn export(&mut self) {
        match self.deliver_export() {
            Ok(message) => self.status = Some(message),
            Err(err) => self.report(err),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn deliver_export(&self) -> DoodleResult<String> {
        let export = self.widget.export()?;
        let path = export.save(&self.export_dir)?;
        Ok(format!("Saved {}", path.display()))
    }

    #[cfg(target_arch = "wasm32")]
    fn deliver_export(&self) -> DoodleResult<String> {
        let export = self.widget.export()?;
        export.download()?;
        Ok(format!("Downloaded {}", export.filename()))
    }

    fn report(&mut self, err: DoodleError) {
        log::error!("{err}");
        self.status = Some(err.to_string());
    }
}

impl eframe::App for DoodleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
