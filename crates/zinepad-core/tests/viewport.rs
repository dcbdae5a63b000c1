use kurbo::Point;
use zinepad_core::viewport::{MAX_SCALE, MIN_SCALE};
use zinepad_core::{Editor, PointerEvent, ToolKind, Viewport, WheelEvent};

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{a:?} != {b:?}"
    );
}

#[test]
fn test_screen_world_inverse() {
    let viewport = Viewport::new(-120.0, 45.0, 1.7);
    for p in [Point::ZERO, Point::new(13.5, -8.25), Point::new(800.0, 600.0)] {
        assert_close(viewport.world_to_screen(viewport.screen_to_world(p)), p);
        assert_close(viewport.screen_to_world(viewport.world_to_screen(p)), p);
    }
}

#[test]
fn test_zoom_is_clamped_both_ways() {
    let mut editor = Editor::new();
    let center = WheelEvent::new(Point::new(400.0, 300.0), -1.0);
    for _ in 0..500 {
        editor.wheel(&center);
    }
    assert!((editor.session().viewport().scale - MAX_SCALE).abs() < f64::EPSILON);

    let out = WheelEvent::new(Point::new(400.0, 300.0), 1.0);
    for _ in 0..500 {
        editor.wheel(&out);
    }
    assert!((editor.session().viewport().scale - MIN_SCALE).abs() < f64::EPSILON);
}

#[test]
fn test_zoom_keeps_point_under_cursor() {
    let mut editor = Editor::new();
    let cursor = Point::new(250.0, 120.0);
    let before = editor.session().screen_to_world(cursor);
    editor.wheel(&WheelEvent::new(cursor, -1.0));
    editor.wheel(&WheelEvent::new(cursor, -1.0));
    let after = editor.session().screen_to_world(cursor);
    assert_close(before, after);
}

#[test]
fn test_drawing_while_zoomed_uses_world_space() {
    let mut editor = Editor::new();
    editor.context_mut().session.set_zoom(2.0);
    editor.set_tool(ToolKind::Pan);
    editor.pointer_down(&PointerEvent::at(Point::ZERO));
    editor.pointer_move(&PointerEvent::at(Point::new(100.0, 0.0)));
    editor.pointer_up(&PointerEvent::at(Point::new(100.0, 0.0)));

    editor.set_tool(ToolKind::Rectangle);
    editor.pointer_down(&PointerEvent::at(Point::new(100.0, 0.0)));
    editor.pointer_up(&PointerEvent::at(Point::new(200.0, 100.0)));

    let shape = &editor.document().active_page().shapes[0];
    assert_close(shape.origin(), Point::ZERO);
    let bounds = shape.bounds();
    assert!((bounds.width() - 50.0).abs() < 1e-9);
    assert!((bounds.height() - 50.0).abs() < 1e-9);
}
