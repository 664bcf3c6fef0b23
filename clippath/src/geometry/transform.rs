//! Coordinate pipeline.
//!
//! Model space is the `[0,100]²` box the contour is authored in. Rotation and
//! scale about the pivot `(50,50)` are applied on top of it for rendering and
//! export (the "canvas" position). Zoom and pan only select which part of the
//! canvas the SVG `viewBox` shows, and the viewport rectangle maps the view
//! box onto client pixels.

use super::limits::{BOX_MAX, PIVOT};
use super::math::rotate;
use super::tolerance::{safe_div, EPS_DENOM};
use crate::model::{ScreenPoint, Vec2, ViewBox, ViewTransform, ViewportRect};

const PIVOT_PT: Vec2 = Vec2::new(PIVOT, PIVOT);

#[inline]
fn is_identity(view: &ViewTransform) -> bool {
    view.rotation_degrees == 0.0 && view.scale_percent == 100.0
}

/// Scale about the pivot by `scale_percent / 100`, then rotate by
/// `rotation_degrees`. Identity transforms return `p` bit-for-bit.
pub fn apply_model_transform(p: Vec2, view: &ViewTransform) -> Vec2 {
    if is_identity(view) {
        return p;
    }
    let s = view.scale_percent / 100.0;
    let d = p.sub(PIVOT_PT);
    let scaled = Vec2::new(d.x * s, d.y * s);
    PIVOT_PT.add(rotate(scaled, view.rotation_degrees.to_radians()))
}

/// Absent control points stay absent.
pub fn apply_model_transform_opt(p: Option<Vec2>, view: &ViewTransform) -> Option<Vec2> {
    p.map(|p| apply_model_transform(p, view))
}

/// Inverse of [`apply_model_transform`]. A zero scale has no inverse; the
/// pivot-relative offset is then left unscaled.
pub fn invert_model_transform(p: Vec2, view: &ViewTransform) -> Vec2 {
    if is_identity(view) {
        return p;
    }
    let s = view.scale_percent / 100.0;
    let d = rotate(p.sub(PIVOT_PT), -view.rotation_degrees.to_radians());
    PIVOT_PT.add(Vec2::new(safe_div(d.x, s, d.x), safe_div(d.y, s, d.y)))
}

impl ViewTransform {
    /// Zoom shrinks the visible square; pan is its top-left corner.
    pub fn view_box(&self) -> ViewBox {
        let side = safe_div(BOX_MAX, self.zoom, BOX_MAX);
        ViewBox { x: self.pan_offset.x, y: self.pan_offset.y, width: side, height: side }
    }
}

/// Client pixels to canvas coordinates through the current view box.
pub fn screen_to_model(screen: ScreenPoint, rect: &ViewportRect, view: &ViewTransform) -> Vec2 {
    let vb = view.view_box();
    let x = safe_div((screen.x - rect.left) * vb.width, rect.width, 0.0);
    let y = safe_div((screen.y - rect.top) * vb.height, rect.height, 0.0);
    Vec2::new(vb.x + x, vb.y + y)
}

/// Canvas coordinates to client pixels; exact inverse of [`screen_to_model`].
pub fn model_to_screen(p: Vec2, rect: &ViewportRect, view: &ViewTransform) -> ScreenPoint {
    let vb = view.view_box();
    let x = safe_div((p.x - vb.x) * rect.width, vb.width, 0.0);
    let y = safe_div((p.y - vb.y) * rect.height, vb.height, 0.0);
    ScreenPoint::new(rect.left + x, rect.top + y)
}

/// A pixel displacement expressed in canvas units.
pub fn screen_delta_to_model(dx: f32, dy: f32, rect: &ViewportRect, view: &ViewTransform) -> Vec2 {
    let vb = view.view_box();
    Vec2::new(safe_div(dx * vb.width, rect.width, 0.0), safe_div(dy * vb.height, rect.height, 0.0))
}

/// Re-zooms so that the canvas point `focus` keeps its on-screen position.
pub fn zoom_at(view: &ViewTransform, focus: Vec2, new_zoom: f32) -> ViewTransform {
    if !(new_zoom > EPS_DENOM) || !new_zoom.is_finite() {
        return *view;
    }
    let vb = view.view_box();
    let fx = safe_div(focus.x - vb.x, vb.width, 0.0);
    let fy = safe_div(focus.y - vb.y, vb.height, 0.0);
    let side = BOX_MAX / new_zoom;
    ViewTransform {
        zoom: new_zoom,
        pan_offset: Vec2::new(focus.x - fx * side, focus.y - fy * side),
        ..*view
    }
}
