use crate::model::Vec2;

pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    Vec2 { x: 0.5 * (a.x + b.x), y: 0.5 * (a.y + b.y) }
}

/// Nearest of `samples + 1` evenly spaced points on segment `a..b`.
pub fn sampled_closest(p: Vec2, a: Vec2, b: Vec2, samples: usize) -> (Vec2, f32) {
    let n = samples.max(1);
    let mut best = a;
    let mut best_d2 = f32::INFINITY;
    for i in 0..=n {
        let t = i as f32 / n as f32;
        let q = a.lerp(b, t);
        let d2 = q.dist_sq(p);
        if d2 < best_d2 { best_d2 = d2; best = q; }
    }
    (best, best_d2)
}

// Standard rotation matrix; positive angles turn clockwise in a y-down frame
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    let (s, c) = radians.sin_cos();
    Vec2 { x: v.x * c - v.y * s, y: v.x * s + v.y * c }
}
