use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Response, Window};

use crate::error;

pub fn new_obj() -> Object { Object::new() }
pub fn set_kv(obj: &Object, k: &str, v: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(k), v);
}

// Style setters go through Reflect so they work across web-sys versions.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, css: &str) {
    let _ = Reflect::set(ctx.as_ref(), &JsValue::from_str("fillStyle"), &JsValue::from_str(css));
}
pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, css: &str) {
    let _ = Reflect::set(ctx.as_ref(), &JsValue::from_str("strokeStyle"), &JsValue::from_str(css));
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| error::dom("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| error::dom("no document"))
}

pub fn element(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| error::dom(format!("element #{} not found", id)))
}

pub fn canvas(doc: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    element(doc, id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| error::dom(format!("element #{} is not a canvas", id)))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| error::dom("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| error::dom("2d context has unexpected type"))
}

/// GETs `url` and returns the body. Anything but status 200 is an error.
pub async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let resp = JsFuture::from(window()?.fetch_with_str(url))
        .await
        .map_err(|e| error::fetch_failed(url, e))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| error::fetch_failed(url, JsValue::from_str("not a Response")))?;
    if resp.status() != 200 {
        return Err(error::http_status(url, resp.status()));
    }
    let body = JsFuture::from(resp.text()?)
        .await
        .map_err(|e| error::fetch_failed(url, e))?;
    body.as_string()
        .ok_or_else(|| error::fetch_failed(url, JsValue::from_str("body is not text")))
}
