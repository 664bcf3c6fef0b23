use crate::geometry::math::{midpoint, sampled_closest};
use crate::model::{Contour, Vec2};

pub const DEFAULT_SAMPLES: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub point: Vec2,
    /// Edge the sample came from (anchor `edge` to anchor `edge + 1`).
    pub edge: usize,
    pub dist: f32,
}

// Edges are treated as straight chords; handles are ignored. The result is a
// sample, not the analytic foot of the perpendicular.
pub fn project_onto_contour(contour: &Contour, p: Vec2, samples: usize) -> Projection {
    let mut best = Projection { point: contour.anchors()[0].position, edge: 0, dist: f32::INFINITY };
    for i in 0..contour.len() {
        let (a, b) = contour.edge(i);
        let (q, d2) = sampled_closest(p, a, b, samples);
        if d2 < best.dist {
            best = Projection { point: q, edge: i, dist: d2 };
        }
    }
    best.dist = best.dist.sqrt();
    best
}

/// Edge whose chord midpoint lies closest to `p`; ties go to the lower index.
pub fn nearest_edge_by_midpoint(contour: &Contour, p: Vec2) -> usize {
    let mut best = (0usize, f32::INFINITY);
    for i in 0..contour.len() {
        let (a, b) = contour.edge(i);
        let d2 = midpoint(a, b).dist_sq(p);
        if d2 < best.1 {
            best = (i, d2);
        }
    }
    best.0
}
