// Structural bounds of an editable contour and of model-space input

// Anchor count caps; operations that would leave these bounds are no-ops
pub const MIN_ANCHORS: usize = 3;
pub const MAX_ANCHORS: usize = 50;

// Model box, in percent of the bounding box
pub const BOX_MIN: f32 = 0.0;
pub const BOX_MAX: f32 = 100.0;
pub const PIVOT: f32 = 50.0;

// Numeric bounds for host-supplied coordinates
pub const COORD_MIN: f32 = -10_000_000.0;
pub const COORD_MAX: f32 =  10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f32) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn anchor_count_ok(n: usize) -> bool { (MIN_ANCHORS..=MAX_ANCHORS).contains(&n) }

#[inline]
pub fn clamp_to_box(v: f32) -> f32 { v.max(BOX_MIN).min(BOX_MAX) }
