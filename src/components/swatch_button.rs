use eframe::egui;

/// A square color swatch that shows whether it is the selected one.
pub struct SwatchButton {
    pub color: egui::Color32,
    pub selected: bool,
}

impl SwatchButton {
    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(28.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect.shrink(3.0), 4.0, self.color);

            // Thin outline so light swatches stay visible on light themes
            painter.rect_stroke(
                rect.shrink(3.0),
                4.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
            );

            if self.selected {
                painter.rect_stroke(
                    rect,
                    6.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            } else if response.hovered() {
                painter.rect_stroke(
                    rect,
                    6.0,
                    egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
                );
            }
        }

        response.on_hover_text(crate::palette::to_hex(self.color))
    }
}
