use crate::error::EditorError;
use crate::geometry::limits::{self, MAX_ANCHORS, MIN_ANCHORS};
use serde::{Deserialize, Serialize};

/// A point in model space: percent of the bounding box, nominally `[0,100]²`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
    pub fn add(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x + o.x, y: self.y + o.y }
    }
    pub fn sub(self, o: Vec2) -> Vec2 {
        Vec2 { x: self.x - o.x, y: self.y - o.y }
    }
    pub fn dist_sq(self, o: Vec2) -> f32 {
        let dx = self.x - o.x;
        let dy = self.y - o.y;
        dx * dx + dy * dy
    }
    pub fn lerp(self, o: Vec2, t: f32) -> Vec2 {
        Vec2 { x: self.x + (o.x - self.x) * t, y: self.y + (o.y - self.y) * t }
    }
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A pointer position in client pixels. Never mixed with `Vec2` without
/// going through `geometry::transform`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        ScreenPoint { x, y }
    }
}

/// The on-screen rectangle of the editing canvas, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportRect {
    fn default() -> Self {
        ViewportRect { left: 0.0, top: 0.0, width: 100.0, height: 100.0 }
    }
}

/// Which control handle of an anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleEnd {
    /// Incoming handle, shapes the edge arriving at the anchor.
    Control1 = 1,
    /// Outgoing handle, shapes the edge leaving toward the next anchor.
    Control2 = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Handles {
    pub control1: Vec2,
    pub control2: Vec2,
}

impl Handles {
    pub fn get(&self, end: HandleEnd) -> Vec2 {
        match end {
            HandleEnd::Control1 => self.control1,
            HandleEnd::Control2 => self.control2,
        }
    }
    pub fn set(&mut self, end: HandleEnd, p: Vec2) {
        match end {
            HandleEnd::Control1 => self.control1 = p,
            HandleEnd::Control2 => self.control2 = p,
        }
    }
}

/// A contour vertex. Handles exist exactly when the anchor is a curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Vec2,
    pub handles: Option<Handles>,
}

impl Anchor {
    pub const fn corner(x: f32, y: f32) -> Self {
        Anchor { position: Vec2::new(x, y), handles: None }
    }
    pub const fn curve(x: f32, y: f32, control1: Vec2, control2: Vec2) -> Self {
        Anchor { position: Vec2::new(x, y), handles: Some(Handles { control1, control2 }) }
    }
    pub fn is_curve(&self) -> bool {
        self.handles.is_some()
    }
    pub fn control1(&self) -> Option<Vec2> {
        self.handles.map(|h| h.control1)
    }
    pub fn control2(&self) -> Option<Vec2> {
        self.handles.map(|h| h.control2)
    }
    pub fn handle(&self, end: HandleEnd) -> Option<Vec2> {
        self.handles.map(|h| h.get(end))
    }
    // Moves the anchor and its handles together so curvature is preserved
    pub(crate) fn translate(&mut self, d: Vec2) {
        self.position = self.position.add(d);
        if let Some(h) = self.handles.as_mut() {
            h.control1 = h.control1.add(d);
            h.control2 = h.control2.add(d);
        }
    }
}

/// Closed, ordered anchor sequence. Length always stays within `[3, 50]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contour {
    anchors: Vec<Anchor>,
}

impl Contour {
    pub fn new(anchors: Vec<Anchor>) -> Result<Contour, EditorError> {
        if !limits::anchor_count_ok(anchors.len()) {
            return Err(EditorError::ContourSize { len: anchors.len() });
        }
        Ok(Contour { anchors })
    }

    /// The rhombus every editor starts from.
    pub fn rhombus() -> Contour {
        Contour {
            anchors: vec![
                Anchor::corner(50.0, 0.0),
                Anchor::corner(100.0, 50.0),
                Anchor::corner(50.0, 100.0),
                Anchor::corner(0.0, 50.0),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }
    // A contour is never empty; kept for clippy's len_without_is_empty
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }
    pub fn get(&self, index: usize) -> Option<&Anchor> {
        self.anchors.get(index)
    }
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Anchor> {
        self.anchors.get_mut(index)
    }
    pub fn last(&self) -> &Anchor {
        &self.anchors[self.anchors.len() - 1]
    }
    /// Index of the anchor after `index`, wrapping to the first.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.anchors.len()
    }
    /// Edge `i` runs from anchor `i` to anchor `i + 1` (cyclically).
    pub fn edge(&self, i: usize) -> (Vec2, Vec2) {
        let a = self.anchors[i].position;
        let b = self.anchors[self.next_index(i)].position;
        (a, b)
    }

    pub(crate) fn insert(&mut self, index: usize, anchor: Anchor) -> bool {
        if self.anchors.len() >= MAX_ANCHORS || index > self.anchors.len() {
            return false;
        }
        self.anchors.insert(index, anchor);
        true
    }
    pub(crate) fn push(&mut self, anchor: Anchor) -> bool {
        let n = self.anchors.len();
        self.insert(n, anchor)
    }
    pub(crate) fn pop(&mut self) -> bool {
        if self.anchors.len() <= MIN_ANCHORS {
            return false;
        }
        self.anchors.pop().is_some()
    }
    /// Removes every listed index, or nothing if fewer than three would remain.
    pub(crate) fn remove_many(&mut self, indices: &std::collections::BTreeSet<usize>) -> bool {
        let doomed = indices.iter().filter(|&&i| i < self.anchors.len()).count();
        if doomed == 0 || self.anchors.len() - doomed < MIN_ANCHORS {
            return false;
        }
        let mut i = 0usize;
        self.anchors.retain(|_| {
            let keep = !indices.contains(&i);
            i += 1;
            keep
        });
        true
    }
}

/// Rotation and scale bake into the exported path; zoom and pan only move
/// the editing viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub rotation_degrees: f32,
    pub scale_percent: f32,
    pub zoom: f32,
    pub pan_offset: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        ViewTransform { rotation_degrees: 0.0, scale_percent: 100.0, zoom: 1.0, pan_offset: Vec2::new(0.0, 0.0) }
    }
}

/// The SVG `viewBox` of the editing canvas, in model units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl std::fmt::Display for ViewBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Custom,
    Square,
    Triangle,
    Hexagon,
    Circle,
}
