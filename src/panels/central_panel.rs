use eframe::egui;

use crate::DoodleApp;

pub fn central_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let [width, height] = app.widget().surface().size();
                let size = egui::vec2(width as f32, height as f32);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
                let canvas_rect = response.rect;

                if response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
                }

                // Presses only count on the part of the canvas that is scrolled into view
                let visible_rect = canvas_rect.intersect(ui.clip_rect());
                app.handle_input(ctx, canvas_rect, visible_rect);

                app.render_canvas(ctx, &painter, canvas_rect);
            });
    });
}
