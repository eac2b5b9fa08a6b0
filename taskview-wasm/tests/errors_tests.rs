use js_sys::Reflect;
use taskview_wasm::{start, TaskViewer};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

const MALFORMED: &str = r#"[{
    "name": "lasso",
    "task": { "outer": [[0,0],[1,0],[0,1]], "holes": [], "skeleton": [[[0,0],[1,1]]] },
    "mesh": {
        "pts": [[0,0],[1,0],[0,1]],
        "half_edges": [[0,1],[1,2],[2,1]],
        "next": [1,2,1],
        "he_poly": [0,0,0],
        "poly_he": [0],
        "poly_real": [true]
    }
}]"#;

#[wasm_bindgen_test]
fn load_errors_carry_codes() {
    let r = TaskViewer::from_json("[]", JsValue::UNDEFINED).err().unwrap();
    assert!(is_err(&r, "empty_task_list"));
    let r = TaskViewer::from_json("{", JsValue::UNDEFINED).err().unwrap();
    assert!(is_err(&r, "payload"));
    let r = TaskViewer::from_json(
        r#"[{"name":"x","task":{"outer":[[0,0],[1,0],[0,1]],"skeleton":[]},
             "mesh":{"pts":[],"half_edges":[[0,1]],"next":[0],"he_poly":[0],"poly_he":[0],"poly_real":[true]}}]"#,
        JsValue::UNDEFINED,
    )
    .err()
    .unwrap();
    assert!(is_err(&r, "invalid_mesh"));
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    let cfg = serde_wasm_bindgen::to_value(&serde_json::json!({ "jitter": "lots" })).unwrap();
    let r = TaskViewer::from_json(MALFORMED, cfg).err().unwrap();
    assert!(is_err(&r, "config"));
}

#[wasm_bindgen_test]
fn malformed_mesh_fails_render_not_load() {
    let v = TaskViewer::from_json(MALFORMED, JsValue::UNDEFINED).unwrap();
    assert_eq!(v.len(), 1);
    assert!(is_err(&v.to_svg_res(), "malformed_mesh"));
}

#[wasm_bindgen_test]
async fn missing_payload_stops_startup() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let caption = doc.create_element("div").unwrap();
    caption.set_id("startup-caption");
    doc.document_element().unwrap().append_child(&caption).unwrap();

    let cfg = serde_wasm_bindgen::to_value(&serde_json::json!({
        "data_url": "/no-such-dir/all_tasks.json",
        "canvas_id": "startup-canvas",
        "caption_id": "startup-caption"
    }))
    .unwrap();
    let r = start(cfg).await.err().unwrap();
    assert!(is_err(&r, "http_status"));
    let status = Reflect::get(&Reflect::get(&r, &JsValue::from_str("error")).unwrap(), &JsValue::from_str("data"))
        .and_then(|d| Reflect::get(&d, &JsValue::from_str("status")))
        .unwrap();
    assert_eq!(status.as_f64(), Some(404.0));
    assert_eq!(caption.text_content().unwrap_or_default(), "");
}
