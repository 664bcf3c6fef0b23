use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("unknown preset shape '{0}' (expected square, triangle, hexagon or circle)")]
    UnknownPreset(String),
    #[error("parameter '{param}' must be finite")]
    NonFinite { param: &'static str },
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("a contour needs between 3 and 50 anchors, got {len}")]
    ContourSize { len: usize },
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl EditorError {
    /// Stable machine-readable code, shared with the JS result objects.
    pub fn code(&self) -> &'static str {
        match self {
            EditorError::UnknownPreset(_) => "unknown_preset",
            EditorError::NonFinite { .. } => "non_finite",
            EditorError::InvalidConfig { .. } => "invalid_config",
            EditorError::ContourSize { .. } => "out_of_range",
            EditorError::Clipboard(_) => "clipboard",
        }
    }
}

pub(crate) fn finite(param: &'static str, v: f32) -> Result<f32, EditorError> {
    if v.is_finite() { Ok(v) } else { Err(EditorError::NonFinite { param }) }
}
