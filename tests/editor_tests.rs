#![cfg(target_arch = "wasm32")]

use clippath_wasm::ClipPathEditor;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SHIFT: u8 = 1;
const CTRL: u8 = 2;
const ALT: u8 = 4;

fn get(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap_or(JsValue::UNDEFINED)
}
fn is_ok(v: &JsValue) -> bool { get(v, "ok").as_bool().unwrap_or(false) }
fn is_err_code(v: &JsValue, code: &str) -> bool {
    if is_ok(v) { return false; }
    get(&get(v, "error"), "code").as_string().map_or(false, |s| s == code)
}
fn outcome(v: &JsValue) -> String { v.as_string().unwrap_or_default() }

#[wasm_bindgen_test]
fn default_editor_exports_the_rhombus() {
    let ed = ClipPathEditor::new();
    assert_eq!(ed.path_d(), "M 50 0 L 100 50 L 50 100 L 0 50 L 50 0 Z");
    assert_eq!(ed.clip_path(), "clip-path: path('M 50 0 L 100 50 L 50 100 L 0 50 L 50 0 Z');");
    assert_eq!(ed.view_box(), "0 0 100 100");
    assert_eq!(ed.anchor_count(), 4);
    assert!(!ed.can_undo());
}

#[wasm_bindgen_test]
fn res_methods_return_typed_errors_without_mutating() {
    let mut ed = ClipPathEditor::new();
    let ver = ed.edit_version();
    assert!(is_err_code(&ed.set_rotation_res(f32::NAN), "non_finite"));
    assert!(is_err_code(&ed.set_scale_res(f32::INFINITY), "non_finite"));
    assert!(is_err_code(&ed.load_preset_res("star"), "unknown_preset"));
    assert!(is_err_code(&ed.toggle_curve_res(9), "out_of_range"));
    assert!(is_err_code(&ed.insert_point_res(f32::INFINITY, 0.0), "non_finite"));
    ed.remove_point();
    assert!(is_err_code(&ed.remove_point_res(), "out_of_range"));
    assert_eq!(ed.anchor_count(), 3);
    assert!(ed.edit_version() > ver);

    let r = ed.load_preset_res("hexagon");
    assert!(is_ok(&r));
    assert_eq!(get(&r, "value").as_string().as_deref(), Some("committed"));
    assert!(is_ok(&ed.set_scale_res(50.0)));
}

#[wasm_bindgen_test]
fn config_errors_are_thrown_as_result_objects() {
    let cfg = js_sys::Object::new();
    Reflect::set(&cfg, &JsValue::from_str("zoom_step"), &JsValue::from_f64(0.5)).unwrap();
    match ClipPathEditor::with_config(cfg.into()) {
        Err(e) => assert!(is_err_code(&e, "invalid_config")),
        Ok(_) => panic!("zoom_step below 1 accepted"),
    }
    assert!(ClipPathEditor::with_config(JsValue::UNDEFINED).is_ok());
}

#[wasm_bindgen_test]
fn pointer_gestures_drive_the_editor() {
    let mut ed = ClipPathEditor::new();
    assert!(ed.set_viewport(0.0, 0.0, 200.0, 200.0));
    // Anchor 1 (100,50) sits at screen (200,100)
    assert_eq!(outcome(&ed.pointer_down(200.0, 100.0, 0, 0)), "selection_changed");
    assert_eq!(ed.input_state(), "dragging_anchor");
    assert_eq!(outcome(&ed.pointer_move(180.0, 120.0, 0)), "preview");
    assert_eq!(outcome(&ed.pointer_up(0)), "committed");
    let json = ed.to_json();
    let a1 = Reflect::get_u32(&get(&json, "anchors"), 1).unwrap();
    assert!((get(&a1, "x").as_f64().unwrap() - 90.0).abs() < 1e-3);
    assert!((get(&a1, "y").as_f64().unwrap() - 60.0).abs() < 1e-3);

    assert_eq!(outcome(&ed.pointer_down(180.0, 120.0, 0, ALT)), "committed");
    assert_eq!(ed.input_state(), "idle");
    let pick = ed.pick(70.0, 60.0);
    assert_eq!(get(&pick, "kind").as_string().as_deref(), Some("handle"));
    assert_eq!(get(&pick, "end").as_f64(), Some(1.0));

    assert_eq!(outcome(&ed.key_down("z", CTRL)), "committed");
    assert_eq!(outcome(&ed.key_down("Z", CTRL | SHIFT)), "committed");
    assert_eq!(outcome(&ed.wheel(100.0, 100.0, -120.0, 0)), "view_changed");
    assert_ne!(ed.view_box(), "0 0 100 100");
    assert!(ed.pick(0.0, 0.0).is_null());
}

#[wasm_bindgen_test]
fn selection_round_trips_through_js() {
    let mut ed = ClipPathEditor::new();
    ed.load_preset("hexagon");
    ed.select(0, false);
    ed.select(2, true);
    assert_eq!(ed.selection(), vec![0, 2]);
    assert_eq!(outcome(&ed.delete_selected()), "committed");
    assert_eq!(ed.anchor_count(), 4);
    assert!(ed.selection().is_empty());
}

#[wasm_bindgen_test]
fn scale_setter_accepts_values_beyond_the_wheel_range() {
    let mut ed = ClipPathEditor::new();
    let r = ed.set_scale_res(500.0);
    assert!(is_ok(&r));
    assert_eq!(get(&ed.view(), "scale_percent").as_f64(), Some(500.0));
    assert!(is_ok(&ed.set_scale_res(-20.0)));
    assert!(ed.set_scale(5.0));
}

#[wasm_bindgen_test]
async fn copy_without_clipboard_api_resolves_to_an_error() {
    let navigator = web_sys::window().unwrap().navigator();
    let key = JsValue::from_str("clipboard");
    let descriptor = js_sys::Object::new();
    Reflect::set(&descriptor, &JsValue::from_str("value"), &JsValue::UNDEFINED).unwrap();
    Reflect::set(&descriptor, &JsValue::from_str("configurable"), &JsValue::TRUE).unwrap();
    js_sys::Object::define_property(&navigator, &key, &descriptor);

    let mut ed = ClipPathEditor::new();
    let result = JsFuture::from(ed.copy_clip_path()).await;
    Reflect::delete_property(&navigator, &key).unwrap();

    let result = result.expect("copy promise must resolve");
    assert!(is_err_code(&result, "clipboard"));
    // The editor is still usable afterwards
    assert_eq!(outcome(&ed.pointer_down(50.0, 0.0, 0, 0)), "selection_changed");
    assert_eq!(outcome(&ed.pointer_up(0)), "unchanged");
    assert_eq!(ed.anchor_count(), 4);
}
