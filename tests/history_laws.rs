use doodle_pad::{DoodleConfig, DoodleWidget, InputEvent, Surface};
use egui::{Pos2, pos2};

// Helper to create a small widget so encoding stays cheap
fn create_test_widget() -> DoodleWidget {
    let config = DoodleConfig {
        width: 64,
        height: 48,
        ..Default::default()
    };
    DoodleWidget::new(&config).unwrap()
}

// Draw one stroke through the event interface
fn stroke(widget: &mut DoodleWidget, points: &[Pos2]) {
    let (first, rest) = points.split_first().unwrap();
    widget
        .handle_event(&InputEvent::PointerDown { position: *first })
        .unwrap();
    for point in rest {
        widget
            .handle_event(&InputEvent::PointerMove { position: *point })
            .unwrap();
    }
    widget.handle_event(&InputEvent::PointerUp).unwrap();
}

fn diagonal(offset: f32) -> [Pos2; 3] {
    [
        pos2(4.0 + offset, 4.0),
        pos2(20.0 + offset, 20.0),
        pos2(30.0 + offset, 40.0),
    ]
}

#[test]
fn test_n_strokes_then_n_undos_restores_start() {
    let mut widget = create_test_widget();
    let start: Surface = widget.surface().clone();

    for i in 0..5 {
        widget.select_color(i);
        stroke(&mut widget, &diagonal(i as f32 * 5.0));
    }
    assert_ne!(widget.surface(), &start);

    for _ in 0..5 {
        assert!(widget.undo().unwrap());
    }
    assert_eq!(widget.surface(), &start);
}

#[test]
fn test_undo_then_redo_round_trips() {
    let mut widget = create_test_widget();
    stroke(&mut widget, &diagonal(0.0));
    stroke(&mut widget, &diagonal(10.0));
    let before_undo = widget.surface().clone();

    assert!(widget.undo().unwrap());
    assert_ne!(widget.surface(), &before_undo);
    assert!(widget.redo().unwrap());
    assert_eq!(widget.surface(), &before_undo);
}

#[test]
fn test_new_stroke_discards_redo_chain() {
    let mut widget = create_test_widget();
    stroke(&mut widget, &diagonal(0.0));
    widget.undo().unwrap();
    assert!(widget.can_redo());

    stroke(&mut widget, &diagonal(12.0));
    assert!(!widget.can_redo());

    let after = widget.surface().clone();
    assert!(!widget.redo().unwrap());
    assert_eq!(widget.surface(), &after);
}

#[test]
fn test_undo_on_fresh_widget_keeps_bitmap() {
    let mut widget = create_test_widget();
    let start = widget.surface().clone();

    widget.undo().unwrap();
    assert_eq!(widget.surface(), &start);
    // The seed is spent; further undos are plain no-ops
    assert!(!widget.undo().unwrap());
    assert_eq!(widget.surface(), &start);
}

#[test]
fn test_swatch_stroke_undo_matches_pre_stroke_pixels() {
    let mut widget = create_test_widget();
    stroke(&mut widget, &diagonal(0.0));
    let pre_stroke = widget.surface().clone();

    assert!(widget.select_color(3));
    stroke(&mut widget, &[pos2(2.0, 30.0), pos2(60.0, 30.0)]);
    assert_eq!(widget.surface().pixel(30, 30), Some(widget.active_color()));

    widget.undo().unwrap();
    assert_eq!(widget.surface(), &pre_stroke);
}

#[test]
fn test_snapshot_taken_once_per_stroke() {
    let mut widget = create_test_widget();
    assert_eq!(widget.history().undo_len(), 1); // seed

    stroke(&mut widget, &[pos2(1.0, 1.0), pos2(5.0, 5.0), pos2(9.0, 1.0), pos2(13.0, 5.0)]);
    assert_eq!(widget.history().undo_len(), 2);
}

#[test]
fn test_history_limit_caps_undo_stack() {
    let config = DoodleConfig {
        width: 32,
        height: 32,
        history_limit: Some(3),
        ..Default::default()
    };
    let mut widget = DoodleWidget::new(&config).unwrap();

    for i in 0..10 {
        stroke(&mut widget, &[pos2(0.0, i as f32 * 3.0), pos2(31.0, i as f32 * 3.0)]);
        assert!(widget.history().undo_len() <= 3);
    }
    for _ in 0..3 {
        assert!(widget.undo().unwrap());
    }
    assert!(!widget.undo().unwrap());
    assert!(widget.history().redo_len() <= 3);
}

#[test]
fn test_unbounded_history_keeps_everything() {
    let config = DoodleConfig {
        width: 16,
        height: 16,
        history_limit: None,
        ..Default::default()
    };
    let mut widget = DoodleWidget::new(&config).unwrap();
    for i in 0..100 {
        let y = (i % 16) as f32;
        stroke(&mut widget, &[pos2(0.0, y), pos2(15.0, y)]);
    }
    assert_eq!(widget.history().undo_len(), 101);
}

#[test]
fn test_pointer_down_while_drawing_restarts_stroke() {
    let mut widget = create_test_widget();
    let background = widget.surface().background();
    let undo_len = widget.history().undo_len();

    widget
        .handle_event(&InputEvent::PointerDown {
            position: pos2(4.0, 4.0),
        })
        .unwrap();
    widget
        .handle_event(&InputEvent::PointerMove {
            position: pos2(30.0, 4.0),
        })
        .unwrap();
    let first_stroke = widget.surface().clone();

    // Second press without a release in between
    widget
        .handle_event(&InputEvent::PointerDown {
            position: pos2(4.0, 30.0),
        })
        .unwrap();
    assert!(widget.is_drawing());
    assert_eq!(widget.state().last_point(), Some(pos2(4.0, 30.0)));
    widget
        .handle_event(&InputEvent::PointerMove {
            position: pos2(30.0, 30.0),
        })
        .unwrap();
    widget.handle_event(&InputEvent::PointerUp).unwrap();

    assert_eq!(widget.history().undo_len(), undo_len + 2);
    assert_ne!(widget.surface().pixel(17, 4), Some(background));
    assert_ne!(widget.surface().pixel(17, 30), Some(background));
    // Nothing joins the end of the first stroke to the start of the second
    assert_eq!(widget.surface().pixel(17, 17), Some(background));
    assert_eq!(widget.surface().pixel(30, 17), Some(background));

    assert!(widget.undo().unwrap());
    assert_eq!(widget.surface(), &first_stroke);
}
