use eframe::egui::{self, Color32, Rect, TextureHandle, TextureOptions};

use crate::widget::DoodleWidget;

/// Keeps a GPU texture in sync with the widget's surface and paints it.
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Widget revision the texture was last uploaded from
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the surface changed since the last upload.
    pub fn needs_upload(&self, widget: &DoodleWidget) -> bool {
        self.texture.is_none() || self.uploaded_revision != Some(widget.revision())
    }

    /// Upload the surface if it changed and return the texture.
    pub fn texture(&mut self, ctx: &egui::Context, widget: &DoodleWidget) -> &TextureHandle {
        let stale = self.needs_upload(widget);
        let image = || widget.surface().to_color_image();
        let texture = match self.texture.take() {
            Some(mut texture) => {
                if stale {
                    texture.set(image(), TextureOptions::NEAREST);
                }
                texture
            }
            None => ctx.load_texture("doodle_surface", image(), TextureOptions::NEAREST),
        };
        self.uploaded_revision = Some(widget.revision());
        self.texture.insert(texture)
    }

    /// Paint the surface into `rect`.
    pub fn render(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect, widget: &DoodleWidget) {
        let texture_id = self.texture(ctx, widget).id();
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture_id, rect, uv, Color32::WHITE);
    }
}
