use crate::interop::{new_obj, set_kv};
use clippath::geometry::limits::{MAX_ANCHORS, MIN_ANCHORS};
use clippath::EditorError;
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f32, max: f32, got: f32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min as f64));
    set_kv(&d, "max", &JsValue::from_f64(max as f64));
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

pub fn from_editor_error(e: &EditorError) -> JsValue {
    match e {
        EditorError::NonFinite { param } => non_finite(param),
        EditorError::UnknownPreset(name) => {
            let d = new_obj(); set_kv(&d, "name", &JsValue::from_str(name));
            err(e.code(), e.to_string(), Some(d.into()))
        }
        EditorError::InvalidConfig { field, .. } => {
            let d = new_obj(); set_kv(&d, "field", &JsValue::from_str(field));
            err(e.code(), e.to_string(), Some(d.into()))
        }
        EditorError::ContourSize { len } => {
            out_of_range("anchors", MIN_ANCHORS as f32, MAX_ANCHORS as f32, *len as f32)
        },
        EditorError::Clipboard(_) => err(e.code(), e.to_string(), None),
    }
}
