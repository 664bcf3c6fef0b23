use clippath::algorithms::picking::pick_impl;
use clippath::algorithms::projection::{nearest_edge_by_midpoint, project_onto_contour};
use clippath::{Anchor, Contour, EditorConfig, Vec2, ViewTransform};
use std::time::Instant;

fn build_polygon(anchors_target: usize) -> Contour {
    // Regular polygon inscribed in the model box
    let n = anchors_target.clamp(3, 50);
    let anchors = (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            Anchor::corner(50.0 + 45.0 * a.cos(), 50.0 + 45.0 * a.sin())
        })
        .collect();
    match Contour::new(anchors) {
        Ok(c) => c,
        Err(e) => { eprintln!("FAIL: {}", e); std::process::exit(1); }
    }
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut anchors = 50usize;
    let mut queries = 10000usize;
    let mut samples = 100usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--anchors=") { if let Ok(v)=val.parse() { anchors=v; } }
        else if let Some(val)=a.strip_prefix("--queries=") { if let Ok(v)=val.parse() { queries=v; } }
        else if let Some(val)=a.strip_prefix("--samples=") { if let Ok(v)=val.parse() { samples=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let contour = build_polygon(anchors);
    let view = ViewTransform::default();
    let hit_radius = EditorConfig::default().hit_radius;

    // Query points sweep a 100x100 grid over the box
    let mut times_ms: Vec<f64> = Vec::with_capacity(queries);
    let start_all = Instant::now();
    let mut hits = 0usize;
    for k in 0..queries {
        let p = Vec2::new((k % 100) as f32 + 0.5, ((k/100) % 100) as f32 + 0.5);
        let t0 = Instant::now();
        let proj = project_onto_contour(&contour, p, samples);
        let _ = nearest_edge_by_midpoint(&contour, proj.point);
        if pick_impl(&contour, &view, p, hit_radius).is_some() { hits += 1; }
        let dt = t0.elapsed().as_secs_f64() * 1000.0;
        times_ms.push(dt);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("anchors={} queries={} samples={} hits={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", contour.len(), queries, samples, hits, dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
