use clippath::{Button, Editor, InputState, Modifiers, Outcome, Preset, ScreenPoint, Vec2};

// Default viewport is 100x100 px at the origin, so screen == canvas here.
fn pt(x: f32, y: f32) -> ScreenPoint {
    ScreenPoint::new(x, y)
}

const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false, meta: false };
const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false, meta: false };
const CTRL: Modifiers = Modifiers { shift: false, ctrl: true, alt: false, meta: false };
const ALT: Modifiers = Modifiers { shift: false, ctrl: false, alt: true, meta: false };

fn close(a: Vec2, b: Vec2, eps: f32) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

#[test]
fn anchor_drag_is_offset_corrected_and_committed_on_release() {
    let mut ed = Editor::new();
    ed.on_pointer_down(pt(99.0, 50.0), Button::Primary, NONE);
    assert_eq!(ed.input_state().name(), "dragging_anchor");
    assert_eq!(ed.on_pointer_move(pt(89.0, 60.0), NONE), Outcome::Preview);
    // Grabbed 1 unit left of the anchor, so it keeps that offset
    assert_eq!(ed.contour().anchors()[1].position, Vec2::new(90.0, 60.0));
    assert!(!ed.can_undo(), "moves must not commit");
    assert_eq!(ed.on_pointer_up(NONE), Outcome::Committed);
    assert_eq!(ed.input_state(), &InputState::Idle);
    assert!(ed.can_undo());
    assert_eq!(ed.history().len(), 2);
}

#[test]
fn anchor_drag_is_clamped_to_the_box() {
    let mut ed = Editor::new();
    ed.on_pointer_down(pt(100.0, 50.0), Button::Primary, NONE);
    ed.on_pointer_move(pt(150.0, -20.0), NONE);
    assert_eq!(ed.contour().anchors()[1].position, Vec2::new(100.0, 0.0));
    ed.on_pointer_up(NONE);
}

#[test]
fn click_without_movement_leaves_history_alone() {
    let mut ed = Editor::new();
    assert_eq!(ed.on_pointer_down(pt(50.0, 0.0), Button::Primary, NONE), Outcome::SelectionChanged);
    assert_eq!(ed.on_pointer_up(NONE), Outcome::Unchanged);
    assert!(!ed.can_undo());
    assert!(ed.selection().contains(&0));
}

#[test]
fn pointer_up_without_gesture_is_harmless() {
    let mut ed = Editor::new();
    assert_eq!(ed.on_pointer_up(NONE), Outcome::Unchanged);
    assert_eq!(ed.input_state(), &InputState::Idle);
}

#[test]
fn dragging_a_curve_anchor_carries_its_handles() {
    let mut ed = Editor::new();
    assert_eq!(ed.on_pointer_down(pt(100.0, 50.0), Button::Primary, ALT), Outcome::Committed);
    // Toggling never starts a drag
    assert_eq!(ed.input_state(), &InputState::Idle);
    let a = ed.contour().anchors()[1];
    assert_eq!(a.control1(), Some(Vec2::new(80.0, 50.0)));
    assert_eq!(a.control2(), Some(Vec2::new(120.0, 50.0)));

    ed.on_pointer_down(pt(100.0, 50.0), Button::Primary, NONE);
    ed.on_pointer_move(pt(90.0, 60.0), NONE);
    ed.on_pointer_up(NONE);
    let a = ed.contour().anchors()[1];
    assert_eq!(a.position, Vec2::new(90.0, 60.0));
    assert_eq!(a.control1(), Some(Vec2::new(70.0, 60.0)));
    assert_eq!(a.control2(), Some(Vec2::new(110.0, 60.0)));
}

#[test]
fn handle_drag_moves_only_that_handle() {
    let mut ed = Editor::new();
    ed.toggle_curve(1);
    ed.on_pointer_down(pt(120.0, 50.0), Button::Primary, NONE);
    assert_eq!(ed.input_state().name(), "dragging_control_handle");
    ed.on_pointer_move(pt(110.0, 40.0), NONE);
    assert_eq!(ed.on_pointer_up(NONE), Outcome::Committed);
    let a = ed.contour().anchors()[1];
    assert_eq!(a.position, Vec2::new(100.0, 50.0));
    assert_eq!(a.control1(), Some(Vec2::new(80.0, 50.0)));
    assert_eq!(a.control2(), Some(Vec2::new(110.0, 40.0)));
}

#[test]
fn escape_restores_the_pre_drag_contour() {
    let mut ed = Editor::new();
    let before = ed.contour().clone();
    ed.on_pointer_down(pt(50.0, 100.0), Button::Primary, NONE);
    ed.on_pointer_move(pt(40.0, 80.0), NONE);
    assert_ne!(ed.contour(), &before);
    ed.on_key_down("Escape", NONE);
    assert_eq!(ed.contour(), &before);
    assert_eq!(ed.input_state(), &InputState::Idle);
    assert!(!ed.can_undo());
}

#[test]
fn blur_cancels_a_drag_and_clears_modifiers() {
    let mut ed = Editor::new();
    ed.on_key_down(" ", SHIFT);
    ed.on_pointer_down(pt(0.0, 50.0), Button::Middle, SHIFT);
    assert_eq!(ed.input_state().name(), "panning");
    ed.on_blur();
    assert_eq!(ed.input_state(), &InputState::Idle);
    assert_eq!(ed.modifiers(), Modifiers::default());
    // Space no longer held: a primary press on an anchor drags it
    ed.on_pointer_down(pt(0.0, 50.0), Button::Primary, NONE);
    assert_eq!(ed.input_state().name(), "dragging_anchor");
}

#[test]
fn ctrl_click_inserts_on_the_nearest_edge() {
    let mut ed = Editor::new();
    assert_eq!(ed.on_pointer_down(pt(80.0, 20.0), Button::Primary, CTRL), Outcome::Committed);
    let c = ed.contour();
    assert_eq!(c.len(), 5);
    assert_eq!(c.anchors()[0].position, Vec2::new(50.0, 0.0));
    assert_eq!(c.anchors()[1].position, Vec2::new(75.0, 25.0));
    assert!(!c.anchors()[1].is_curve());
    assert_eq!(c.anchors()[2].position, Vec2::new(100.0, 50.0));
}

#[test]
fn insert_near_the_closing_edge_appends() {
    let mut ed = Editor::new();
    ed.on_pointer_down(pt(20.0, 20.0), Button::Primary, CTRL);
    let c = ed.contour();
    assert_eq!(c.len(), 5);
    assert_eq!(c.anchors()[4].position, Vec2::new(25.0, 25.0));
    assert_eq!(c.anchors()[0].position, Vec2::new(50.0, 0.0));
}

#[test]
fn shift_click_builds_a_selection_for_delete() {
    let mut ed = Editor::new();
    ed.load_preset(Preset::Hexagon);
    ed.on_pointer_down(pt(25.0, 6.7), Button::Primary, NONE);
    ed.on_pointer_up(NONE);
    ed.on_pointer_down(pt(75.0, 93.3), Button::Primary, SHIFT);
    assert_eq!(ed.input_state(), &InputState::Idle);
    ed.on_pointer_down(pt(0.0, 50.0), Button::Primary, SHIFT);
    assert_eq!(ed.selection().iter().copied().collect::<Vec<_>>(), vec![0, 3, 5]);
    // Shift-click again removes from the set
    ed.on_pointer_down(pt(0.0, 50.0), Button::Primary, SHIFT);
    ed.on_pointer_down(pt(0.0, 50.0), Button::Primary, SHIFT);

    assert_eq!(ed.on_key_down("Delete", NONE), Outcome::Committed);
    let xs: Vec<Vec2> = ed.contour().anchors().iter().map(|a| a.position).collect();
    assert_eq!(xs, vec![Vec2::new(75.0, 6.7), Vec2::new(100.0, 50.0), Vec2::new(25.0, 93.3)]);
    assert!(ed.selection().is_empty());
}

#[test]
fn delete_that_would_leave_two_is_rejected() {
    let mut ed = Editor::new();
    ed.select(0, false);
    ed.select(2, true);
    let before = ed.contour().clone();
    assert_eq!(ed.on_key_down("Backspace", NONE), Outcome::Unchanged);
    assert_eq!(ed.contour(), &before);
    assert_eq!(ed.selection().len(), 2);
}

#[test]
fn wheel_zoom_is_anchored_at_the_cursor() {
    let mut ed = Editor::new();
    assert_eq!(ed.on_wheel(pt(25.0, 25.0), -100.0, NONE), Outcome::ViewChanged);
    assert!((ed.view().zoom - 1.1).abs() < 1e-6);
    let vb = ed.view_box();
    // Canvas point (25,25) sits at the same fraction of the view box
    assert!(((25.0 - vb.x) / vb.width - 0.25).abs() < 1e-4);
    assert!(((25.0 - vb.y) / vb.height - 0.25).abs() < 1e-4);
    assert!(!ed.can_undo(), "view changes stay out of history");
}

#[test]
fn wheel_zoom_respects_the_floor() {
    let mut ed = Editor::new();
    for _ in 0..200 {
        ed.on_wheel(pt(50.0, 50.0), 100.0, NONE);
    }
    assert!(ed.view().zoom > 0.0);
    assert!((ed.view().zoom - ed.config().zoom_min).abs() < 1e-6);
    assert_eq!(ed.on_wheel(pt(50.0, 50.0), 100.0, NONE), Outcome::Unchanged);
}

#[test]
fn shift_wheel_scales_within_bounds() {
    let mut ed = Editor::new();
    ed.on_wheel(pt(50.0, 50.0), 100.0, SHIFT);
    assert!((ed.view().scale_percent - 90.0).abs() < 1e-4);
    ed.on_wheel(pt(50.0, 50.0), -5000.0, SHIFT);
    assert_eq!(ed.view().scale_percent, 200.0);
    ed.on_wheel(pt(50.0, 50.0), 5000.0, SHIFT);
    assert_eq!(ed.view().scale_percent, 10.0);
}

#[test]
fn space_drag_pans_the_view_only() {
    let mut ed = Editor::new();
    ed.on_key_down(" ", NONE);
    ed.on_pointer_down(pt(50.0, 0.0), Button::Primary, NONE);
    assert_eq!(ed.input_state().name(), "panning");
    assert_eq!(ed.on_pointer_move(pt(60.0, 10.0), NONE), Outcome::ViewChanged);
    assert_eq!(ed.view().pan_offset, Vec2::new(-10.0, -10.0));
    ed.on_pointer_up(NONE);
    ed.on_key_up(" ", NONE);
    assert_eq!(ed.contour().anchors()[0].position, Vec2::new(50.0, 0.0));
    assert!(!ed.can_undo());
}

#[test]
fn keyboard_undo_and_redo() {
    let mut ed = Editor::new();
    ed.add_point();
    assert_eq!(ed.contour().len(), 5);
    assert_eq!(ed.on_key_down("z", CTRL), Outcome::Committed);
    assert_eq!(ed.contour().len(), 4);
    let redo = Modifiers { shift: true, ctrl: true, alt: false, meta: false };
    ed.on_key_down("Z", redo);
    assert_eq!(ed.contour().len(), 5);
    ed.on_key_down("z", CTRL);
    ed.on_key_down("y", CTRL);
    assert_eq!(ed.contour().len(), 5);
    // A bare "z" is just a key
    assert_eq!(ed.on_key_down("z", NONE), Outcome::Unchanged);
}

#[test]
fn drag_follows_the_pointer_under_rotation() {
    let mut ed = Editor::new();
    ed.set_rotation(90.0).unwrap();
    // Anchor 0 (50,0) renders at (100,50)
    ed.on_pointer_down(pt(100.0, 50.0), Button::Primary, NONE);
    assert_eq!(ed.input_state().name(), "dragging_anchor");
    ed.on_pointer_move(pt(90.0, 50.0), NONE);
    ed.on_pointer_up(NONE);
    let p = ed.contour().anchors()[0].position;
    assert!(close(p, Vec2::new(50.0, 10.0), 1e-3), "got {:?}", p);
}

#[test]
fn stale_drag_is_closed_by_the_next_press() {
    let mut ed = Editor::new();
    ed.on_pointer_down(pt(50.0, 0.0), Button::Primary, NONE);
    ed.on_pointer_move(pt(50.0, 10.0), NONE);
    // The pointer-up got lost; the next press settles the previous drag
    ed.on_pointer_down(pt(0.0, 50.0), Button::Primary, NONE);
    assert!(ed.can_undo());
    assert_eq!(ed.contour().anchors()[0].position, Vec2::new(50.0, 10.0));
}

#[test]
fn clicking_empty_canvas_clears_selection() {
    let mut ed = Editor::new();
    ed.select(1, false);
    assert_eq!(ed.on_pointer_down(pt(50.0, 50.0), Button::Primary, NONE), Outcome::SelectionChanged);
    assert!(ed.selection().is_empty());
    assert_eq!(ed.input_state(), &InputState::Idle);
}
