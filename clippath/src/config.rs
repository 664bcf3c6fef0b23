use crate::algorithms::projection::DEFAULT_SAMPLES;
use crate::error::EditorError;
use serde::{Deserialize, Serialize};

/// Tunables of one editor instance. Hosts may pass a partial object; missing
/// fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Horizontal distance of synthesized control handles from their anchor.
    pub handle_offset: f32,
    /// Offset (dx = dy) of an appended anchor from the last one.
    pub append_offset: f32,
    pub projection_samples: usize,
    /// Hit-test radius in canvas units.
    pub hit_radius: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Multiplicative zoom change per wheel notch.
    pub zoom_step: f32,
    pub wheel_scale_factor: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    /// Scale restored when a preset is loaded.
    pub default_scale: f32,
    pub history_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            handle_offset: 20.0,
            append_offset: 10.0,
            projection_samples: DEFAULT_SAMPLES,
            hit_radius: 3.0,
            zoom_min: 0.1,
            zoom_max: 20.0,
            zoom_step: 1.1,
            wheel_scale_factor: 0.1,
            scale_min: 10.0,
            scale_max: 200.0,
            default_scale: 100.0,
            history_limit: 100,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> EditorError {
    EditorError::InvalidConfig { field, reason: reason.into() }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), EditorError> {
        let finite = [
            ("handle_offset", self.handle_offset),
            ("append_offset", self.append_offset),
            ("hit_radius", self.hit_radius),
            ("zoom_min", self.zoom_min),
            ("zoom_max", self.zoom_max),
            ("zoom_step", self.zoom_step),
            ("wheel_scale_factor", self.wheel_scale_factor),
            ("scale_min", self.scale_min),
            ("scale_max", self.scale_max),
            ("default_scale", self.default_scale),
        ];
        for (field, v) in finite {
            if !v.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }
        if self.zoom_min <= 0.0 {
            return Err(invalid("zoom_min", format!("must be > 0, got {}", self.zoom_min)));
        }
        if self.zoom_min > self.zoom_max {
            return Err(invalid("zoom_max", format!("must be >= zoom_min ({})", self.zoom_min)));
        }
        if self.zoom_step <= 1.0 {
            return Err(invalid("zoom_step", format!("must be > 1, got {}", self.zoom_step)));
        }
        if self.scale_min > self.scale_max {
            return Err(invalid("scale_max", format!("must be >= scale_min ({})", self.scale_min)));
        }
        if self.hit_radius <= 0.0 {
            return Err(invalid("hit_radius", format!("must be > 0, got {}", self.hit_radius)));
        }
        if self.projection_samples == 0 {
            return Err(invalid("projection_samples", "must be at least 1"));
        }
        if self.history_limit == 0 {
            return Err(invalid("history_limit", "must be at least 1"));
        }
        Ok(())
    }
}
