use eframe::egui;

use crate::DoodleApp;
use crate::components::SwatchButton;
use crate::tool::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};

const SWATCH_COLUMNS: usize = 4;

pub fn tools_panel(app: &mut DoodleApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(150.0)
        .show(ctx, |ui| {
            ui.heading("Colors");

            let mut clicked_swatch = None;
            egui::Grid::new("palette_grid")
                .num_columns(SWATCH_COLUMNS)
                .spacing([2.0, 2.0])
                .show(ui, |ui| {
                    let palette = app.widget().palette();
                    for (index, &color) in palette.colors().iter().enumerate() {
                        let swatch = SwatchButton::new(color, palette.is_selected(index));
                        if swatch.show(ui).clicked() {
                            clicked_swatch = Some(index);
                        }
                        if (index + 1) % SWATCH_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
            if let Some(index) = clicked_swatch {
                log::debug!("Swatch {} selected", index);
                app.widget_mut().select_color(index);
            }

            ui.separator();

            ui.horizontal(|ui| {
                let settings_open = app.widget().settings_visible();
                if ui
                    .selectable_label(settings_open, "⚙")
                    .on_hover_text("Settings")
                    .clicked()
                {
                    app.widget_mut().toggle_settings();
                }
                if ui.button("📥").on_hover_text("Export").clicked() {
                    app.export();
                }
            });

            if app.widget().settings_visible() {
                ui.separator();
                settings_section(app, ui);
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.small(status);
            }
        });
}

fn settings_section(app: &mut DoodleApp, ui: &mut egui::Ui) {
    let mut width = app.widget().brush_width();
    ui.horizontal(|ui| {
        ui.label("Size:");
        if ui
            .add(egui::Slider::new(&mut width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH))
            .changed()
        {
            app.widget_mut().set_brush_width(width as u32);
        }
    });

    ui.horizontal(|ui| {
        let erasing = app.widget().is_erasing();
        if ui
            .selectable_label(erasing, "🩹")
            .on_hover_text("Eraser")
            .clicked()
        {
            let erasing = app.widget_mut().toggle_eraser();
            log::debug!("Eraser {}", if erasing { "on" } else { "off" });
        }

        let can_undo = app.widget().can_undo();
        let can_redo = app.widget().can_redo();
        if ui
            .add_enabled(can_undo, egui::Button::new("↺"))
            .on_hover_text("Undo")
            .clicked()
        {
            app.undo();
        }
        if ui
            .add_enabled(can_redo, egui::Button::new("↻"))
            .on_hover_text("Redo")
            .clicked()
        {
            app.redo();
        }
    });

    let history = app.widget().history();
    ui.small(format!(
        "History: {} undo / {} redo ({} KiB)",
        history.undo_len(),
        history.redo_len(),
        history.encoded_bytes() / 1024
    ));
}
