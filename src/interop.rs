use clippath::{Modifiers, Outcome, ScreenPoint};
use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

// Plain objects rather than Maps, so hosts can JSON.stringify the result
pub fn to_js<T: Serialize + ?Sized>(v: &T) -> JsValue {
    let ser = serde_wasm_bindgen::Serializer::json_compatible();
    v.serialize(&ser).unwrap_or(JsValue::NULL)
}

pub fn outcome(o: Outcome) -> JsValue { JsValue::from_str(o.as_str()) }

pub fn point(x: f32, y: f32) -> ScreenPoint { ScreenPoint::new(x, y) }

pub fn mods(bits: u8) -> Modifiers { Modifiers::from_bits(bits) }
