use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use taskview_wasm::{bind_keys, CanvasSurface, TaskViewer};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn payload() -> String {
    let task = |name: &str| {
        serde_json::json!({
            "name": name,
            "task": {
                "outer": [[0, 0], [10, 0], [10, 10], [0, 10]],
                "holes": [[[4, 4], [4, 6], [6, 6]]],
                "skeleton": [[[0, 0], [10, 10]]]
            }
        })
    };
    serde_json::json!([task("A"), task("B"), task("C")]).to_string()
}

#[wasm_bindgen_test]
fn arrows_walk_and_clamp() {
    let mut v = TaskViewer::from_json(&payload(), JsValue::UNDEFINED).unwrap();
    assert_eq!(v.caption(), "A (1/3)");
    // no canvas in the page, so stepping reports a dom error after moving
    assert!(v.step_right().is_err());
    assert_eq!(v.current_index(), 1);
    assert_eq!(v.caption(), "B (2/3)");
    let _ = v.step_right();
    let _ = v.step_right();
    assert_eq!(v.current_name(), "C");
    let _ = v.step_left();
    let _ = v.step_left();
    let _ = v.step_left();
    assert_eq!(v.current_index(), 0);
}

#[wasm_bindgen_test]
fn unbound_keys_are_ignored() {
    let mut v = TaskViewer::from_json(&payload(), JsValue::UNDEFINED).unwrap();
    assert_eq!(v.handle_key("KeyQ").unwrap(), false);
    assert_eq!(v.current_index(), 0);
}

#[wasm_bindgen_test]
fn svg_export_and_capabilities() {
    let cfg = serde_wasm_bindgen::to_value(&serde_json::json!({ "show_size": true })).unwrap();
    let v = TaskViewer::from_json(&payload(), cfg).unwrap();
    let svg = v.to_svg().unwrap();
    assert!(svg.contains("<title>A (1/3), size=10</title>"));
    let caps = v.capabilities();
    let mesh = Reflect::get(&caps, &JsValue::from_str("mesh")).unwrap();
    assert_eq!(mesh.as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn draws_on_a_detached_canvas() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(300);
    canvas.set_height(200);
    let caption = doc.create_element("div").unwrap();
    let mut surface = CanvasSurface::new(canvas.clone(), Some(caption.clone())).unwrap();

    let v = TaskViewer::from_json(&payload(), JsValue::UNDEFINED).unwrap();
    v.rs_viewer().render(&mut surface, &mut || 0.5).unwrap();
    assert_eq!(caption.text_content().as_deref(), Some("A (1/3)"));
    v.render_to(canvas).unwrap();
}

fn keydown(code: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_code(code);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

#[wasm_bindgen_test]
fn keydown_prevents_default_only_for_arrows() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let target = doc.create_element("div").unwrap();
    let v = Rc::new(RefCell::new(TaskViewer::from_json(&payload(), JsValue::UNDEFINED).unwrap()));
    bind_keys(v.clone(), &target).unwrap();

    let right = keydown("ArrowRight");
    assert!(!target.dispatch_event(&right).unwrap());
    assert!(right.default_prevented());
    assert_eq!(v.borrow().current_index(), 1);

    let left = keydown("ArrowLeft");
    target.dispatch_event(&left).unwrap();
    assert!(left.default_prevented());
    assert_eq!(v.borrow().current_index(), 0);

    let other = keydown("KeyA");
    assert!(target.dispatch_event(&other).unwrap());
    assert!(!other.default_prevented());
    assert_eq!(v.borrow().current_index(), 0);
}
