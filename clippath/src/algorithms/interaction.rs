//! Pointer and keyboard state machine.
//!
//! Drags snapshot the contour on pointer-down and compare against it on
//! pointer-up: only a changed contour reaches history. Pointer-up always
//! returns to `Idle`, whatever state it finds, so hosts must deliver it from a
//! document-level listener rather than from the dragged element.

use crate::algorithms::picking::{pick_impl, Pick};
use crate::geometry::limits::{clamp_to_box, in_coord_bounds};
use crate::geometry::tolerance::clamp;
use crate::geometry::transform::{
    invert_model_transform, screen_delta_to_model, screen_to_model, zoom_at,
};
use crate::model::{Contour, HandleEnd, ScreenPoint, Vec2};
use crate::{Button, Editor, Modifiers, Outcome};

#[derive(Clone, Debug, PartialEq)]
pub enum InputState {
    Idle,
    DraggingAnchor {
        index: usize,
        // grabbed element minus pointer, in model space
        grab_offset: Vec2,
        before: Contour,
    },
    DraggingControlHandle {
        index: usize,
        end: HandleEnd,
        grab_offset: Vec2,
        before: Contour,
    },
    Panning {
        last_screen: ScreenPoint,
    },
}

impl InputState {
    pub fn name(&self) -> &'static str {
        match self {
            InputState::Idle => "idle",
            InputState::DraggingAnchor { .. } => "dragging_anchor",
            InputState::DraggingControlHandle { .. } => "dragging_control_handle",
            InputState::Panning { .. } => "panning",
        }
    }
    pub fn is_dragging(&self) -> bool {
        matches!(self, InputState::DraggingAnchor { .. } | InputState::DraggingControlHandle { .. })
    }
}

fn finite_pt(p: ScreenPoint) -> bool {
    in_coord_bounds(p.x) && in_coord_bounds(p.y)
}

// Pointer position in unrotated, unscaled model space
fn pointer_model(ed: &Editor, screen: ScreenPoint) -> Vec2 {
    let canvas = screen_to_model(screen, &ed.viewport, &ed.view);
    invert_model_transform(canvas, &ed.view)
}

pub fn pointer_down_impl(ed: &mut Editor, screen: ScreenPoint, button: Button, mods: Modifiers) -> Outcome {
    ed.modifiers = mods;
    if !finite_pt(screen) {
        return Outcome::Unchanged;
    }
    // A pointer-up we never saw: close the stale gesture first
    if ed.input != InputState::Idle {
        pointer_up_impl(ed, mods);
    }
    if button == Button::Middle || (button == Button::Primary && ed.pan_key_held) {
        ed.input = InputState::Panning { last_screen: screen };
        return Outcome::Unchanged;
    }
    if button != Button::Primary {
        return Outcome::Unchanged;
    }

    let canvas = screen_to_model(screen, &ed.viewport, &ed.view);
    if mods.command() {
        return ed.insert_point_at_canvas(canvas);
    }
    match pick_impl(&ed.contour, &ed.view, canvas, ed.config.hit_radius) {
        Some(Pick::Anchor { index, .. }) => {
            if mods.alt {
                return ed.toggle_curve(index);
            }
            if mods.shift {
                return ed.select(index, true);
            }
            let sel = ed.select(index, false);
            let pos = ed.contour.anchors()[index].position;
            ed.input = InputState::DraggingAnchor {
                index,
                grab_offset: pos.sub(pointer_model(ed, screen)),
                before: ed.contour.clone(),
            };
            sel
        }
        Some(Pick::Handle { index, end, .. }) => {
            let Some(pos) = ed.contour.anchors()[index].handle(end) else {
                return Outcome::Unchanged;
            };
            ed.input = InputState::DraggingControlHandle {
                index,
                end,
                grab_offset: pos.sub(pointer_model(ed, screen)),
                before: ed.contour.clone(),
            };
            Outcome::Unchanged
        }
        None => {
            if mods.shift {
                Outcome::Unchanged
            } else {
                ed.clear_selection()
            }
        }
    }
}

pub fn pointer_move_impl(ed: &mut Editor, screen: ScreenPoint, mods: Modifiers) -> Outcome {
    ed.modifiers = mods;
    if !finite_pt(screen) {
        return Outcome::Unchanged;
    }
    match ed.input {
        InputState::Idle => Outcome::Unchanged,
        InputState::Panning { last_screen } => {
            let d = screen_delta_to_model(screen.x - last_screen.x, screen.y - last_screen.y, &ed.viewport, &ed.view);
            ed.view.pan_offset = ed.view.pan_offset.sub(d);
            ed.input = InputState::Panning { last_screen: screen };
            Outcome::ViewChanged
        }
        InputState::DraggingAnchor { index, grab_offset, .. } => {
            let target = pointer_model(ed, screen).add(grab_offset);
            let target = Vec2::new(clamp_to_box(target.x), clamp_to_box(target.y));
            let Some(anchor) = ed.contour.get_mut(index) else {
                return Outcome::Unchanged;
            };
            let delta = target.sub(anchor.position);
            if delta == Vec2::default() {
                return Outcome::Unchanged;
            }
            anchor.translate(delta);
            ed.edit_ver = ed.edit_ver.wrapping_add(1);
            Outcome::Preview
        }
        InputState::DraggingControlHandle { index, end, grab_offset, .. } => {
            let target = pointer_model(ed, screen).add(grab_offset);
            let Some(handles) = ed.contour.get_mut(index).and_then(|a| a.handles.as_mut()) else {
                return Outcome::Unchanged;
            };
            if handles.get(end) == target {
                return Outcome::Unchanged;
            }
            handles.set(end, target);
            ed.edit_ver = ed.edit_ver.wrapping_add(1);
            Outcome::Preview
        }
    }
}

pub fn pointer_up_impl(ed: &mut Editor, mods: Modifiers) -> Outcome {
    ed.modifiers = mods;
    match std::mem::replace(&mut ed.input, InputState::Idle) {
        InputState::Idle | InputState::Panning { .. } => Outcome::Unchanged,
        InputState::DraggingAnchor { before, .. } | InputState::DraggingControlHandle { before, .. } => {
            if ed.contour == before {
                Outcome::Unchanged
            } else {
                ed.commit()
            }
        }
    }
}

/// Abandons the active gesture; a drag's contour reverts to its pre-drag state.
pub fn cancel_gesture_impl(ed: &mut Editor) -> Outcome {
    match std::mem::replace(&mut ed.input, InputState::Idle) {
        InputState::Idle | InputState::Panning { .. } => Outcome::Unchanged,
        InputState::DraggingAnchor { before, .. } | InputState::DraggingControlHandle { before, .. } => {
            if ed.contour == before {
                return Outcome::Unchanged;
            }
            ed.contour = before;
            ed.edit_ver = ed.edit_ver.wrapping_add(1);
            Outcome::Preview
        }
    }
}

// Shift + wheel drives the scale percent; a plain wheel zooms about the cursor
pub fn wheel_impl(ed: &mut Editor, screen: ScreenPoint, delta_y: f32, mods: Modifiers) -> Outcome {
    ed.modifiers = mods;
    if !finite_pt(screen) || !delta_y.is_finite() || delta_y == 0.0 {
        return Outcome::Unchanged;
    }
    let cfg = &ed.config;
    if mods.shift {
        let s = clamp(ed.view.scale_percent - delta_y * cfg.wheel_scale_factor, cfg.scale_min, cfg.scale_max);
        if s == ed.view.scale_percent {
            return Outcome::Unchanged;
        }
        ed.view.scale_percent = s;
        return Outcome::ViewChanged;
    }
    let factor = if delta_y < 0.0 { cfg.zoom_step } else { 1.0 / cfg.zoom_step };
    let zoom = clamp(ed.view.zoom * factor, cfg.zoom_min, cfg.zoom_max);
    if zoom == ed.view.zoom {
        return Outcome::Unchanged;
    }
    let focus = screen_to_model(screen, &ed.viewport, &ed.view);
    ed.view = zoom_at(&ed.view, focus, zoom);
    Outcome::ViewChanged
}

fn is_pan_key(key: &str) -> bool {
    matches!(key, " " | "Space" | "Spacebar")
}

pub fn key_down_impl(ed: &mut Editor, key: &str, mods: Modifiers) -> Outcome {
    ed.modifiers = mods;
    if is_pan_key(key) {
        ed.pan_key_held = true;
        return Outcome::Unchanged;
    }
    match key {
        "Delete" | "Backspace" => ed.delete_selected(),
        "Escape" => {
            let cancelled = cancel_gesture_impl(ed);
            let cleared = ed.clear_selection();
            if cancelled.changed() { cancelled } else { cleared }
        }
        "z" | "Z" if mods.command() => {
            if mods.shift { ed.redo() } else { ed.undo() }
        }
        "y" | "Y" if mods.command() => ed.redo(),
        _ => Outcome::Unchanged,
    }
}

pub fn key_up_impl(ed: &mut Editor, key: &str, mods: Modifiers) -> Outcome {
    ed.modifiers = mods;
    if is_pan_key(key) {
        ed.pan_key_held = false;
    }
    Outcome::Unchanged
}

/// Focus left the page: key-up events may never arrive.
pub fn blur_impl(ed: &mut Editor) -> Outcome {
    ed.modifiers = Modifiers::default();
    ed.pan_key_held = false;
    cancel_gesture_impl(ed)
}
