use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn rotation_default_is_zero() {
    let rotation = Rotation::default();
    assert_eq!(rotation.x, 0.0);
    assert_eq!(rotation.y, 0.0);
}

#[test]
fn drag_default_is_idle() {
    assert!(!DragState::default().is_dragging());
}

// =============================================================
// DragState
// =============================================================

#[test]
fn dragging_reports_active() {
    let drag = DragState::Dragging { last_screen: Point::new(10.0, 20.0) };
    assert!(drag.is_dragging());
}

#[test]
fn point_new_stores_coordinates() {
    let pt = Point::new(-3.5, 7.25);
    assert_eq!(pt.x, -3.5);
    assert_eq!(pt.y, 7.25);
}
