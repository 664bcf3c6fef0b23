use crate::geometry::transform::apply_model_transform;
use crate::model::{Contour, ViewTransform, Vec2};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathUnits {
    /// Bare model units, for the SVG canvas and the exported declaration.
    Absolute,
    /// Every coordinate suffixed with `%`, for the CSS preview box.
    Percent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    CurveTo { c1: Vec2, c2: Vec2, to: Vec2 },
    Close,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathExpression {
    pub commands: Vec<PathCommand>,
    pub units: PathUnits,
}

struct Coord(Vec2, PathUnits);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            PathUnits::Absolute => write!(f, "{} {}", self.0.x, self.0.y),
            PathUnits::Percent => write!(f, "{}% {}%", self.0.x, self.0.y),
        }
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.units;
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M {}", Coord(p, u))?,
                PathCommand::LineTo(p) => write!(f, "L {}", Coord(p, u))?,
                PathCommand::CurveTo { c1, c2, to } => {
                    write!(f, "C {}, {}, {}", Coord(c1, u), Coord(c2, u), Coord(to, u))?
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

impl PathExpression {
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_) | PathCommand::CurveTo { .. }))
            .count()
    }
}

// One command per edge. An edge is cubic when its *destination* anchor is a
// curve; it then uses the source's outgoing and the destination's incoming
// handle, each falling back to its own anchor when absent.
pub fn serialize_path(contour: &Contour, view: &ViewTransform, units: PathUnits) -> PathExpression {
    let t = |p: Vec2| apply_model_transform(p, view);
    let anchors = contour.anchors();
    let mut commands = Vec::with_capacity(anchors.len() + 2);
    for (i, cur) in anchors.iter().enumerate() {
        let next = &anchors[contour.next_index(i)];
        if i == 0 {
            commands.push(PathCommand::MoveTo(t(cur.position)));
        }
        if next.is_curve() {
            let c1 = cur.control2().unwrap_or(cur.position);
            let c2 = next.control1().unwrap_or(next.position);
            commands.push(PathCommand::CurveTo { c1: t(c1), c2: t(c2), to: t(next.position) });
        } else {
            commands.push(PathCommand::LineTo(t(next.position)));
        }
    }
    commands.push(PathCommand::Close);
    PathExpression { commands, units }
}

pub fn to_clip_path_declaration(path: &PathExpression) -> String {
    format!("clip-path: path('{}');", path)
}
