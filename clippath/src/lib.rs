pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod path;
pub mod presets;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
    pub mod transform;
}
pub mod algorithms {
    pub mod interaction;
    pub mod picking;
    pub mod projection;
}
mod json;

pub use algorithms::interaction::InputState;
pub use algorithms::picking::Pick;
pub use config::EditorConfig;
pub use error::EditorError;
pub use history::HistoryLog;
pub use model::{
    Anchor, Contour, HandleEnd, Handles, ScreenPoint, ShapeKind, Vec2, ViewBox, ViewTransform,
    ViewportRect,
};
pub use path::{PathCommand, PathExpression, PathUnits};
pub use presets::Preset;

use algorithms::projection::{nearest_edge_by_midpoint, project_onto_contour};
use error::finite;
use geometry::limits::MAX_ANCHORS;
use geometry::transform::invert_model_transform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Modifier keys as reported with the latest input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const SHIFT: u8 = 1;
    pub const CTRL: u8 = 2;
    pub const ALT: u8 = 4;
    pub const META: u8 = 8;

    pub fn from_bits(bits: u8) -> Self {
        Modifiers {
            shift: bits & Self::SHIFT != 0,
            ctrl: bits & Self::CTRL != 0,
            alt: bits & Self::ALT != 0,
            meta: bits & Self::META != 0,
        }
    }
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// DOM `MouseEvent.button` numbering.
    pub fn from_dom(b: u8) -> Button {
        match b {
            0 => Button::Primary,
            1 => Button::Middle,
            _ => Button::Secondary,
        }
    }
}

/// What an input event or edit did, so hosts know what to redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Unchanged,
    /// Live drag update; not in history yet.
    Preview,
    Committed,
    SelectionChanged,
    ViewChanged,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Unchanged => "unchanged",
            Outcome::Preview => "preview",
            Outcome::Committed => "committed",
            Outcome::SelectionChanged => "selection_changed",
            Outcome::ViewChanged => "view_changed",
        }
    }
    pub fn changed(self) -> bool {
        self != Outcome::Unchanged
    }
}

/// Clipboard collaborator for the export action.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

pub struct Editor {
    pub(crate) contour: Contour,
    pub(crate) view: ViewTransform,
    pub(crate) viewport: ViewportRect,
    pub(crate) history: HistoryLog,
    pub(crate) selection: BTreeSet<usize>,
    pub(crate) input: InputState,
    pub(crate) modifiers: Modifiers,
    pub(crate) pan_key_held: bool,
    pub(crate) shape: ShapeKind,
    pub(crate) config: EditorConfig,
    pub(crate) edit_ver: u64, // increments on every contour change, previews included
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        let config = EditorConfig::default();
        let contour = Contour::rhombus();
        Editor {
            history: HistoryLog::new(contour.clone(), config.history_limit),
            contour,
            view: ViewTransform::default(),
            viewport: ViewportRect::default(),
            selection: BTreeSet::new(),
            input: InputState::Idle,
            modifiers: Modifiers::default(),
            pan_key_held: false,
            shape: ShapeKind::Custom,
            config,
            edit_ver: 1,
        }
    }

    pub fn with_config(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        let mut ed = Editor::new();
        ed.history = HistoryLog::new(ed.contour.clone(), config.history_limit);
        ed.view.scale_percent = config.default_scale;
        ed.config = config;
        Ok(ed)
    }

    // Read access
    pub fn contour(&self) -> &Contour {
        &self.contour
    }
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }
    pub fn viewport(&self) -> &ViewportRect {
        &self.viewport
    }
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
    pub fn selection(&self) -> &BTreeSet<usize> {
        &self.selection
    }
    pub fn input_state(&self) -> &InputState {
        &self.input
    }
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }
    pub fn edit_version(&self) -> u64 {
        self.edit_ver
    }
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn bump(&mut self) {
        self.edit_ver = self.edit_ver.wrapping_add(1);
    }

    pub(crate) fn commit(&mut self) -> Outcome {
        self.history.commit(self.contour.clone());
        self.shape = ShapeKind::Custom;
        self.bump();
        log::debug!(
            "commit: {} anchors, history {}/{}",
            self.contour.len(),
            self.history.current_index() + 1,
            self.history.len()
        );
        Outcome::Committed
    }

    // A drag still in flight when a whole-contour edit arrives is abandoned
    fn settle_gesture(&mut self) {
        if self.input.is_dragging() {
            algorithms::interaction::cancel_gesture_impl(self);
        }
    }

    // View
    pub fn set_viewport(&mut self, rect: ViewportRect) -> Result<Outcome, EditorError> {
        finite("left", rect.left)?;
        finite("top", rect.top)?;
        finite("width", rect.width)?;
        finite("height", rect.height)?;
        self.viewport = rect;
        Ok(Outcome::ViewChanged)
    }
    pub fn set_rotation(&mut self, degrees: f32) -> Result<Outcome, EditorError> {
        self.view.rotation_degrees = finite("rotation", degrees)?;
        Ok(Outcome::ViewChanged)
    }
    pub fn set_scale(&mut self, percent: f32) -> Result<Outcome, EditorError> {
        self.view.scale_percent = finite("scale", percent)?;
        Ok(Outcome::ViewChanged)
    }
    pub fn reset_view(&mut self) -> Outcome {
        self.view.zoom = 1.0;
        self.view.pan_offset = Vec2::new(0.0, 0.0);
        Outcome::ViewChanged
    }

    // Contour edits; each commits on success
    pub fn load_preset(&mut self, preset: Preset) -> Outcome {
        self.settle_gesture();
        self.contour = preset.contour();
        self.selection.clear();
        self.view.rotation_degrees = 0.0;
        self.view.scale_percent = self.config.default_scale;
        self.commit();
        self.shape = preset.shape_kind();
        log::debug!("loaded preset {}", preset);
        Outcome::Committed
    }

    pub fn load_preset_named(&mut self, name: &str) -> Result<Outcome, EditorError> {
        let preset: Preset = name.parse()?;
        Ok(self.load_preset(preset))
    }

    pub fn add_point(&mut self) -> Outcome {
        self.settle_gesture();
        let last = self.contour.last().position;
        let off = self.config.append_offset;
        if !self.contour.push(Anchor::corner(last.x + off, last.y + off)) {
            log::trace!("add_point rejected at {} anchors", self.contour.len());
            return Outcome::Unchanged;
        }
        self.commit()
    }

    pub fn remove_point(&mut self) -> Outcome {
        self.settle_gesture();
        if !self.contour.pop() {
            log::trace!("remove_point rejected at {} anchors", self.contour.len());
            return Outcome::Unchanged;
        }
        let n = self.contour.len();
        self.selection.retain(|&i| i < n);
        self.commit()
    }

    /// Flips the curve flag of one anchor. Enabling synthesizes both handles
    /// `handle_offset` units to either side horizontally: incoming to the left
    /// for the first three anchors, to the right for the rest.
    ///
    /// Neighbouring anchors are left as they are. A corner neighbour has no
    /// handles, and the path writer substitutes its position for the missing
    /// one, so the edges on both sides of the toggled anchor stay continuous.
    pub fn toggle_curve(&mut self, index: usize) -> Outcome {
        self.settle_gesture();
        let offset = self.config.handle_offset;
        let Some(anchor) = self.contour.get_mut(index) else {
            return Outcome::Unchanged;
        };
        if anchor.is_curve() {
            anchor.handles = None;
        } else {
            // TODO: settle on one handle direction once nothing depends on the split at index 3
            let sign = if index < 3 { 1.0 } else { -1.0 };
            let p = anchor.position;
            anchor.handles = Some(Handles {
                control1: Vec2::new(p.x - sign * offset, p.y),
                control2: Vec2::new(p.x + sign * offset, p.y),
            });
        }
        self.commit()
    }

    /// Inserts a corner anchor at the projection of `model_pt` onto the
    /// contour, between the ends of the edge whose midpoint is nearest.
    pub fn insert_point(&mut self, model_pt: Vec2) -> Outcome {
        self.settle_gesture();
        if self.contour.len() >= MAX_ANCHORS || !model_pt.is_finite() {
            return Outcome::Unchanged;
        }
        let proj = project_onto_contour(&self.contour, model_pt, self.config.projection_samples);
        let edge = nearest_edge_by_midpoint(&self.contour, proj.point);
        if !self.contour.insert(edge + 1, Anchor::corner(proj.point.x, proj.point.y)) {
            return Outcome::Unchanged;
        }
        // Indices past the splice shift by one
        self.selection = self.selection.iter().map(|&i| if i > edge { i + 1 } else { i }).collect();
        self.commit()
    }

    /// Same as [`Editor::insert_point`] for a point on the rendered canvas.
    pub fn insert_point_at_canvas(&mut self, canvas: Vec2) -> Outcome {
        let model_pt = invert_model_transform(canvas, &self.view);
        self.insert_point(model_pt)
    }

    /// `additive` toggles membership; otherwise the selection becomes `{index}`.
    pub fn select(&mut self, index: usize, additive: bool) -> Outcome {
        if index >= self.contour.len() {
            return Outcome::Unchanged;
        }
        if additive {
            if !self.selection.remove(&index) {
                self.selection.insert(index);
            }
        } else {
            if self.selection.len() == 1 && self.selection.contains(&index) {
                return Outcome::Unchanged;
            }
            self.selection.clear();
            self.selection.insert(index);
        }
        Outcome::SelectionChanged
    }

    pub fn clear_selection(&mut self) -> Outcome {
        if self.selection.is_empty() {
            return Outcome::Unchanged;
        }
        self.selection.clear();
        Outcome::SelectionChanged
    }

    pub fn delete_selected(&mut self) -> Outcome {
        self.settle_gesture();
        if !self.contour.remove_many(&self.selection) {
            log::trace!(
                "delete of {} anchors rejected at {} anchors",
                self.selection.len(),
                self.contour.len()
            );
            return Outcome::Unchanged;
        }
        self.selection.clear();
        self.commit()
    }

    pub fn undo(&mut self) -> Outcome {
        self.settle_gesture();
        let Some(snapshot) = self.history.undo() else {
            return Outcome::Unchanged;
        };
        self.contour = snapshot.clone();
        self.after_history_move();
        log::debug!("undo -> snapshot {}", self.history.current_index());
        Outcome::Committed
    }

    pub fn redo(&mut self) -> Outcome {
        self.settle_gesture();
        let Some(snapshot) = self.history.redo() else {
            return Outcome::Unchanged;
        };
        self.contour = snapshot.clone();
        self.after_history_move();
        log::debug!("redo -> snapshot {}", self.history.current_index());
        Outcome::Committed
    }

    fn after_history_move(&mut self) {
        let n = self.contour.len();
        self.selection.retain(|&i| i < n);
        self.shape = ShapeKind::Custom;
        self.bump();
    }

    pub fn pick(&self, canvas: Vec2) -> Option<Pick> {
        algorithms::picking::pick_impl(&self.contour, &self.view, canvas, self.config.hit_radius)
    }

    // Serialization
    pub fn path_expression(&self, units: PathUnits) -> PathExpression {
        path::serialize_path(&self.contour, &self.view, units)
    }
    /// Path data for the editing canvas, rotation and scale baked in.
    pub fn display_path(&self) -> String {
        self.path_expression(PathUnits::Absolute).to_string()
    }
    pub fn clip_path(&self) -> String {
        path::to_clip_path_declaration(&self.path_expression(PathUnits::Absolute))
    }
    pub fn preview_clip_path(&self) -> String {
        path::to_clip_path_declaration(&self.path_expression(PathUnits::Percent))
    }
    pub fn view_box(&self) -> ViewBox {
        self.view.view_box()
    }

    /// Writes the clip-path declaration to `sink`. Never touches editor state.
    pub fn copy_clip_path<S: ClipboardSink + ?Sized>(&self, sink: &mut S) -> Result<String, EditorError> {
        let text = self.clip_path();
        match sink.write_text(&text) {
            Ok(()) => Ok(text),
            Err(e) => {
                log::warn!("clipboard write failed: {}", e);
                Err(EditorError::Clipboard(e))
            }
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    // Input events
    pub fn on_pointer_down(&mut self, screen: ScreenPoint, button: Button, modifiers: Modifiers) -> Outcome {
        algorithms::interaction::pointer_down_impl(self, screen, button, modifiers)
    }
    pub fn on_pointer_move(&mut self, screen: ScreenPoint, modifiers: Modifiers) -> Outcome {
        algorithms::interaction::pointer_move_impl(self, screen, modifiers)
    }
    /// Ends whatever gesture is active; safe to call when none is.
    pub fn on_pointer_up(&mut self, modifiers: Modifiers) -> Outcome {
        algorithms::interaction::pointer_up_impl(self, modifiers)
    }
    pub fn on_wheel(&mut self, screen: ScreenPoint, delta_y: f32, modifiers: Modifiers) -> Outcome {
        algorithms::interaction::wheel_impl(self, screen, delta_y, modifiers)
    }
    pub fn on_key_down(&mut self, key: &str, modifiers: Modifiers) -> Outcome {
        algorithms::interaction::key_down_impl(self, key, modifiers)
    }
    pub fn on_key_up(&mut self, key: &str, modifiers: Modifiers) -> Outcome {
        algorithms::interaction::key_up_impl(self, key, modifiers)
    }
    pub fn on_blur(&mut self) -> Outcome {
        algorithms::interaction::blur_impl(self)
    }
    pub fn cancel_gesture(&mut self) -> Outcome {
        algorithms::interaction::cancel_gesture_impl(self)
    }
}
