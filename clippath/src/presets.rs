use crate::error::EditorError;
use crate::model::{Anchor, Contour, ShapeKind, Vec2};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Square,
    Triangle,
    Hexagon,
    Circle,
}

// Cubic circle approximation: handle length = 4/3 * tan(pi/8) * r, r = 50
const K: f32 = 27.614_237;

const SQUARE: [Anchor; 4] = [
    Anchor::corner(0.0, 0.0),
    Anchor::corner(100.0, 0.0),
    Anchor::corner(100.0, 100.0),
    Anchor::corner(0.0, 100.0),
];

const TRIANGLE: [Anchor; 3] = [
    Anchor::corner(50.0, 0.0),
    Anchor::corner(100.0, 100.0),
    Anchor::corner(0.0, 100.0),
];

const HEXAGON: [Anchor; 6] = [
    Anchor::corner(25.0, 6.7),
    Anchor::corner(75.0, 6.7),
    Anchor::corner(100.0, 50.0),
    Anchor::corner(75.0, 93.3),
    Anchor::corner(25.0, 93.3),
    Anchor::corner(0.0, 50.0),
];

const CIRCLE: [Anchor; 4] = [
    Anchor::curve(50.0, 0.0, Vec2::new(50.0 - K, 0.0), Vec2::new(50.0 + K, 0.0)),
    Anchor::curve(100.0, 50.0, Vec2::new(100.0, 50.0 - K), Vec2::new(100.0, 50.0 + K)),
    Anchor::curve(50.0, 100.0, Vec2::new(50.0 + K, 100.0), Vec2::new(50.0 - K, 100.0)),
    Anchor::curve(0.0, 50.0, Vec2::new(0.0, 50.0 + K), Vec2::new(0.0, 50.0 - K)),
];

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Square, Preset::Triangle, Preset::Hexagon, Preset::Circle];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Square => "square",
            Preset::Triangle => "triangle",
            Preset::Hexagon => "hexagon",
            Preset::Circle => "circle",
        }
    }

    pub fn shape_kind(self) -> ShapeKind {
        match self {
            Preset::Square => ShapeKind::Square,
            Preset::Triangle => ShapeKind::Triangle,
            Preset::Hexagon => ShapeKind::Hexagon,
            Preset::Circle => ShapeKind::Circle,
        }
    }

    pub fn anchors(self) -> &'static [Anchor] {
        match self {
            Preset::Square => &SQUARE,
            Preset::Triangle => &TRIANGLE,
            Preset::Hexagon => &HEXAGON,
            Preset::Circle => &CIRCLE,
        }
    }

    pub fn contour(self) -> Contour {
        // Every table above holds between 3 and 6 anchors
        match Contour::new(self.anchors().to_vec()) {
            Ok(c) => c,
            Err(_) => Contour::rhombus(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Preset::Square),
            "triangle" => Ok(Preset::Triangle),
            "hexagon" => Ok(Preset::Hexagon),
            "circle" => Ok(Preset::Circle),
            _ => Err(EditorError::UnknownPreset(s.to_string())),
        }
    }
}
