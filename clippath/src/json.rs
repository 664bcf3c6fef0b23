use crate::geometry::transform::{apply_model_transform, apply_model_transform_opt};
use crate::model::{ShapeKind, Vec2, ViewBox, ViewTransform};
use crate::path::PathUnits;
use crate::Editor;
use serde::Serialize;
use serde_json::Value;

pub fn to_json_impl(ed: &Editor) -> Value {
    #[derive(Serialize)]
    struct AnchorSer {
        index: usize,
        label: usize,
        x: f32,
        y: f32,
        curve: bool,
        control1: Option<Vec2>,
        control2: Option<Vec2>,
        // rendered (rotated, scaled) positions for the overlay
        rx: f32,
        ry: f32,
        rcontrol1: Option<Vec2>,
        rcontrol2: Option<Vec2>,
        selected: bool,
    }
    #[derive(Serialize)]
    struct Doc {
        version: u64,
        anchors: Vec<AnchorSer>,
        view: ViewTransform,
        view_box: ViewBox,
        view_box_attr: String,
        state: &'static str,
        shape: ShapeKind,
        can_undo: bool,
        can_redo: bool,
        path: String,
        clip_path: String,
        preview_clip_path: String,
    }
    let view = &ed.view;
    let anchors = ed
        .contour
        .anchors()
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let r = apply_model_transform(a.position, view);
            AnchorSer {
                index: i,
                label: i + 1,
                x: a.position.x,
                y: a.position.y,
                curve: a.is_curve(),
                control1: a.control1(),
                control2: a.control2(),
                rx: r.x,
                ry: r.y,
                rcontrol1: apply_model_transform_opt(a.control1(), view),
                rcontrol2: apply_model_transform_opt(a.control2(), view),
                selected: ed.selection.contains(&i),
            }
        })
        .collect();
    let view_box = view.view_box();
    let doc = Doc {
        version: ed.edit_ver,
        anchors,
        view: *view,
        view_box,
        view_box_attr: view_box.to_string(),
        state: ed.input.name(),
        shape: ed.shape,
        can_undo: ed.history.can_undo(),
        can_redo: ed.history.can_redo(),
        path: ed.path_expression(PathUnits::Absolute).to_string(),
        clip_path: ed.clip_path(),
        preview_clip_path: ed.preview_clip_path(),
    };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}
