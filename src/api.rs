use crate::interop::{mods, new_obj, outcome, point, set_kv, to_js};
use crate::{error, ClipPathEditor};
use clippath::geometry::limits::{MAX_ANCHORS, MIN_ANCHORS};
use clippath::{Button, ClipboardSink, EditorConfig, EditorError, Pick, Vec2, ViewportRect};
use js_sys::{Promise, Reflect};
use std::sync::Once;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

static LOGGER: Once = Once::new();

/// Routes `log` records to the browser console. `level` is one of
/// trace/debug/info/warn/error; anything else falls back to info.
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::new(level)));
    log::set_max_level(level.to_level_filter());
}

// Starts the async clipboard write and keeps the promise for the caller to await
struct NavigatorClipboard {
    pending: Option<Promise>,
}

// `navigator.clipboard` is missing on insecure origins and older browsers;
// calling through it unchecked would throw across the wasm boundary
fn navigator_clipboard() -> Result<web_sys::Clipboard, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| "clipboard unavailable".to_string())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("clipboard unavailable".into());
    }
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText")).unwrap_or(JsValue::UNDEFINED);
    if !write.is_function() {
        return Err("clipboard.writeText unavailable".into());
    }
    Ok(clipboard.unchecked_into())
}

impl ClipboardSink for NavigatorClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        let clipboard = navigator_clipboard()?;
        self.pending = Some(clipboard.write_text(text));
        Ok(())
    }
}

#[wasm_bindgen]
impl ClipPathEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ClipPathEditor {
        crate::ClipPathEditor::rs_new()
    }
    /// Builds an editor from a (possibly partial) config object. Throws a
    /// `{ok:false,error}` object on invalid config.
    pub fn with_config(config: JsValue) -> Result<ClipPathEditor, JsValue> {
        let cfg: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| error::err("invalid_config", format!("{}", e), None))?
        };
        clippath::Editor::with_config(cfg)
            .map(|inner| ClipPathEditor { inner })
            .map_err(|e| error::from_editor_error(&e))
    }
    pub fn edit_version(&self) -> u64 {
        self.rs_edit_version()
    }
    pub fn config(&self) -> JsValue {
        to_js(self.inner.config())
    }

    // Pointer and keyboard; `mods` bits are 1 shift, 2 ctrl, 4 alt, 8 meta
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8, modifiers: u8) -> JsValue {
        outcome(self.inner.on_pointer_down(point(x, y), Button::from_dom(button), mods(modifiers)))
    }
    pub fn pointer_move(&mut self, x: f32, y: f32, modifiers: u8) -> JsValue {
        outcome(self.inner.on_pointer_move(point(x, y), mods(modifiers)))
    }
    pub fn pointer_up(&mut self, modifiers: u8) -> JsValue {
        outcome(self.inner.on_pointer_up(mods(modifiers)))
    }
    pub fn wheel(&mut self, x: f32, y: f32, delta_y: f32, modifiers: u8) -> JsValue {
        outcome(self.inner.on_wheel(point(x, y), delta_y, mods(modifiers)))
    }
    pub fn key_down(&mut self, key: &str, modifiers: u8) -> JsValue {
        outcome(self.inner.on_key_down(key, mods(modifiers)))
    }
    pub fn key_up(&mut self, key: &str, modifiers: u8) -> JsValue {
        outcome(self.inner.on_key_up(key, mods(modifiers)))
    }
    pub fn blur(&mut self) -> JsValue {
        outcome(self.inner.on_blur())
    }
    pub fn cancel_gesture(&mut self) -> JsValue {
        outcome(self.inner.cancel_gesture())
    }
    pub fn input_state(&self) -> String {
        self.inner.input_state().name().to_string()
    }

    // View
    pub fn set_viewport(&mut self, left: f32, top: f32, width: f32, height: f32) -> bool {
        self.inner.set_viewport(ViewportRect { left, top, width, height }).is_ok()
    }
    pub fn set_viewport_res(&mut self, left: f32, top: f32, width: f32, height: f32) -> JsValue {
        match self.inner.set_viewport(ViewportRect { left, top, width, height }) {
            Ok(o) => error::ok(outcome(o)),
            Err(e) => error::from_editor_error(&e),
        }
    }
    pub fn set_rotation(&mut self, degrees: f32) -> bool {
        self.inner.set_rotation(degrees).is_ok()
    }
    pub fn set_rotation_res(&mut self, degrees: f32) -> JsValue {
        match self.inner.set_rotation(degrees) {
            Ok(o) => error::ok(outcome(o)),
            Err(e) => error::from_editor_error(&e),
        }
    }
    pub fn set_scale(&mut self, percent: f32) -> bool {
        self.inner.set_scale(percent).is_ok()
    }
    /// Any finite percent is accepted; only the wheel clamps the scale.
    pub fn set_scale_res(&mut self, percent: f32) -> JsValue {
        match self.inner.set_scale(percent) {
            Ok(o) => error::ok(outcome(o)),
            Err(e) => error::from_editor_error(&e),
        }
    }
    pub fn reset_view(&mut self) -> JsValue {
        outcome(self.inner.reset_view())
    }
    pub fn view(&self) -> JsValue {
        to_js(self.inner.view())
    }
    pub fn view_box(&self) -> String {
        self.inner.view_box().to_string()
    }

    // Contour edits
    pub fn load_preset(&mut self, name: &str) -> bool {
        self.inner.load_preset_named(name).is_ok()
    }
    pub fn load_preset_res(&mut self, name: &str) -> JsValue {
        match self.inner.load_preset_named(name) {
            Ok(o) => error::ok(outcome(o)),
            Err(e) => error::from_editor_error(&e),
        }
    }
    pub fn add_point(&mut self) -> JsValue {
        outcome(self.inner.add_point())
    }
    pub fn add_point_res(&mut self) -> JsValue {
        let len = self.inner.contour().len();
        if len >= MAX_ANCHORS {
            return error::from_editor_error(&EditorError::ContourSize { len: len + 1 });
        }
        error::ok(outcome(self.inner.add_point()))
    }
    pub fn remove_point(&mut self) -> JsValue {
        outcome(self.inner.remove_point())
    }
    pub fn remove_point_res(&mut self) -> JsValue {
        let len = self.inner.contour().len();
        if len <= MIN_ANCHORS {
            return error::from_editor_error(&EditorError::ContourSize { len: len - 1 });
        }
        error::ok(outcome(self.inner.remove_point()))
    }
    pub fn toggle_curve(&mut self, index: u32) -> JsValue {
        outcome(self.inner.toggle_curve(index as usize))
    }
    pub fn toggle_curve_res(&mut self, index: u32) -> JsValue {
        let len = self.inner.contour().len();
        if index as usize >= len {
            return error::out_of_range("index", 0.0, (len - 1) as f32, index as f32);
        }
        error::ok(outcome(self.inner.toggle_curve(index as usize)))
    }
    /// Inserts at a canvas point (already mapped through the view box).
    pub fn insert_point_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        error::ok(outcome(self.inner.insert_point_at_canvas(Vec2::new(x, y))))
    }
    pub fn select(&mut self, index: u32, additive: bool) -> JsValue {
        outcome(self.inner.select(index as usize, additive))
    }
    pub fn clear_selection(&mut self) -> JsValue {
        outcome(self.inner.clear_selection())
    }
    pub fn selection(&self) -> Vec<u32> {
        self.inner.selection().iter().map(|&i| i as u32).collect()
    }
    pub fn delete_selected(&mut self) -> JsValue {
        outcome(self.inner.delete_selected())
    }
    pub fn undo(&mut self) -> JsValue {
        outcome(self.inner.undo())
    }
    pub fn redo(&mut self) -> JsValue {
        outcome(self.inner.redo())
    }
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }
    pub fn anchor_count(&self) -> u32 {
        self.inner.contour().len() as u32
    }

    pub fn pick(&self, x: f32, y: f32) -> JsValue {
        let Some(p) = self.inner.pick(Vec2::new(x, y)) else {
            return JsValue::NULL;
        };
        // Flatten to { kind: 'anchor'|'handle', index, end?, dist }
        let obj = new_obj();
        match p {
            Pick::Anchor { index, dist } => {
                set_kv(&obj, "kind", &JsValue::from_str("anchor"));
                set_kv(&obj, "index", &JsValue::from_f64(index as f64));
                set_kv(&obj, "dist", &JsValue::from_f64(dist as f64));
            }
            Pick::Handle { index, end, dist } => {
                set_kv(&obj, "kind", &JsValue::from_str("handle"));
                set_kv(&obj, "index", &JsValue::from_f64(index as f64));
                set_kv(&obj, "end", &JsValue::from_f64(end as u8 as f64));
                set_kv(&obj, "dist", &JsValue::from_f64(dist as f64));
            }
        }
        obj.into()
    }

    // Output
    pub fn path_d(&self) -> String {
        self.inner.display_path()
    }
    pub fn clip_path(&self) -> String {
        self.inner.clip_path()
    }
    pub fn preview_clip_path(&self) -> String {
        self.inner.preview_clip_path()
    }
    pub fn to_json(&self) -> JsValue {
        to_js(&self.inner.to_json_value())
    }

    /// Copies the clip-path declaration. The promise always resolves, to
    /// `{ok:true,value:text}` or `{ok:false,error}`; editor state is untouched
    /// either way.
    pub fn copy_clip_path(&self) -> Promise {
        let mut sink = NavigatorClipboard { pending: None };
        let started = self.inner.copy_clip_path(&mut sink);
        future_to_promise(async move {
            let text = match started {
                Ok(text) => text,
                Err(e) => return Ok(error::from_editor_error(&e)),
            };
            let Some(pending) = sink.pending else {
                return Ok(error::ok(JsValue::from_str(&text)));
            };
            match JsFuture::from(pending).await {
                Ok(_) => Ok(error::ok(JsValue::from_str(&text))),
                Err(e) => {
                    web_sys::console::warn_1(&e);
                    let msg = e.as_string().unwrap_or_else(|| format!("{:?}", e));
                    log::warn!("clipboard write rejected: {}", msg);
                    Ok(error::from_editor_error(&EditorError::Clipboard(msg)))
                }
            }
        })
    }
}

impl Default for ClipPathEditor {
    fn default() -> Self {
        Self::new()
    }
}
