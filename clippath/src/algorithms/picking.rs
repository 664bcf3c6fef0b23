use crate::geometry::transform::apply_model_transform;
use crate::model::{Contour, HandleEnd, ViewTransform, Vec2};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Pick {
    #[serde(rename = "anchor")]
    Anchor { index: usize, dist: f32 },
    #[serde(rename = "handle")]
    Handle { index: usize, end: HandleEnd, dist: f32 },
}

// `canvas` is a pointer position already mapped through the view box; the
// contour is compared at its rendered (rotated, scaled) positions.
pub fn pick_impl(contour: &Contour, view: &ViewTransform, canvas: Vec2, tol: f32) -> Option<Pick> {
    let tol2 = tol*tol;
    // Anchors first
    let mut best_anchor: Option<(usize,f32)> = None;
    for (i, a) in contour.anchors().iter().enumerate() {
        let d2 = apply_model_transform(a.position, view).dist_sq(canvas);
        if d2 <= tol2 && best_anchor.map_or(true, |(_,bd)| d2 < bd) { best_anchor = Some((i, d2)); }
    }
    if let Some((index,d2)) = best_anchor { return Some(Pick::Anchor{ index, dist: d2.sqrt() }); }
    // Handles of curved anchors
    let mut best_handle: Option<(usize,HandleEnd,f32)> = None;
    for (i, a) in contour.anchors().iter().enumerate() {
        if let Some(h) = a.handles {
            for (end, p) in [(HandleEnd::Control1, h.control1), (HandleEnd::Control2, h.control2)] {
                let d2 = apply_model_transform(p, view).dist_sq(canvas);
                if d2 <= tol2 && best_handle.map_or(true, |(_,_,bd)| d2 < bd) { best_handle = Some((i, end, d2)); }
            }
        }
    }
    if let Some((index,end,d2)) = best_handle { return Some(Pick::Handle{ index, end, dist: d2.sqrt() }); }
    None
}
