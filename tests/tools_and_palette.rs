use doodle_pad::palette::{CANVAS_BACKGROUND, DEFAULT_COLORS};
use doodle_pad::{DoodleConfig, DoodleWidget, InputEvent};
use egui::{Color32, pos2};

fn create_test_widget() -> DoodleWidget {
    let config = DoodleConfig {
        width: 40,
        height: 40,
        ..Default::default()
    };
    DoodleWidget::new(&config).unwrap()
}

fn horizontal_stroke(widget: &mut DoodleWidget, y: f32) {
    widget
        .handle_event(&InputEvent::PointerDown {
            position: pos2(2.0, y),
        })
        .unwrap();
    widget
        .handle_event(&InputEvent::PointerMove {
            position: pos2(38.0, y),
        })
        .unwrap();
    widget.handle_event(&InputEvent::PointerLeave).unwrap();
}

#[test]
fn test_initial_tool_state() {
    let widget = create_test_widget();
    assert_eq!(widget.palette().selected_index(), 0);
    assert_eq!(widget.active_color(), DEFAULT_COLORS[0]);
    assert_eq!(widget.brush_width(), 3);
    assert!(!widget.is_erasing());
    assert!(!widget.settings_visible());
    assert_eq!(widget.surface().pixel(20, 20), Some(CANVAS_BACKGROUND));
}

#[test]
fn test_exactly_one_swatch_selected() {
    let mut widget = create_test_widget();
    for index in [3, 7, 0, 0, 12, 5, 2] {
        widget.select_color(index);
        let palette = widget.palette();
        let selected = (0..palette.len())
            .filter(|&i| palette.is_selected(i))
            .count();
        assert_eq!(selected, 1);
    }
    // 12 was out of range and left the previous choice alone
    assert_eq!(widget.palette().selected_index(), 2);
}

#[test]
fn test_select_color_clears_eraser() {
    let mut widget = create_test_widget();
    assert!(widget.toggle_eraser());
    assert!(widget.select_color(4));
    assert!(!widget.is_erasing());
    assert_eq!(widget.active_color(), DEFAULT_COLORS[4]);
}

#[test]
fn test_eraser_toggle_preserves_color() {
    let mut widget = create_test_widget();
    widget.select_color(2);

    widget.toggle_eraser();
    widget.toggle_eraser();
    horizontal_stroke(&mut widget, 20.0);

    assert_eq!(widget.surface().pixel(20, 20), Some(DEFAULT_COLORS[2]));
}

#[test]
fn test_eraser_paints_background() {
    let mut widget = create_test_widget();
    widget.select_color(6);
    horizontal_stroke(&mut widget, 20.0);
    assert_eq!(widget.surface().pixel(20, 20), Some(Color32::BLACK));

    widget.toggle_eraser();
    widget.set_brush_width(10);
    horizontal_stroke(&mut widget, 20.0);
    assert_eq!(widget.surface().pixel(20, 20), Some(CANVAS_BACKGROUND));
}

#[test]
fn test_brush_width_applies_to_next_segment() {
    let mut widget = create_test_widget();
    widget.set_brush_width(1);
    horizontal_stroke(&mut widget, 10.0);
    assert_eq!(widget.surface().pixel(20, 13), Some(CANVAS_BACKGROUND));

    widget.set_brush_width(9);
    horizontal_stroke(&mut widget, 30.0);
    assert_eq!(widget.surface().pixel(20, 33), Some(DEFAULT_COLORS[0]));
}

#[test]
fn test_brush_width_is_clamped() {
    let mut widget = create_test_widget();
    widget.set_brush_width(0);
    assert_eq!(widget.brush_width(), 1);
    widget.set_brush_width(51);
    assert_eq!(widget.brush_width(), 50);
}

#[test]
fn test_settings_toggle_is_independent_of_drawing() {
    let mut widget = create_test_widget();
    widget
        .handle_event(&InputEvent::PointerDown {
            position: pos2(5.0, 5.0),
        })
        .unwrap();
    assert!(widget.toggle_settings());
    assert!(widget.is_drawing());
    assert!(!widget.toggle_settings());
    assert!(widget.is_drawing());
}

#[test]
fn test_custom_palette_from_config() {
    let config = DoodleConfig {
        width: 8,
        height: 8,
        palette: vec!["#102030".into(), "#405060".into()],
        brush_width: 7,
        ..Default::default()
    };
    let widget = DoodleWidget::new(&config).unwrap();
    assert_eq!(widget.palette().len(), 2);
    assert_eq!(widget.active_color(), Color32::from_rgb(0x10, 0x20, 0x30));
    assert_eq!(widget.brush_width(), 7);
}
