use wasm_bindgen::prelude::*;

use crate::interop::{new_obj, set_kv};

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let message = message.into();
    log::error!("{}: {}", code, message);
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

pub fn from_core(e: &taskview::Error) -> JsValue {
    let data = match e {
        taskview::Error::LimitExceeded { what, max, got } => {
            let d = new_obj();
            set_kv(&d, "what", &JsValue::from_str(what));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            set_kv(&d, "got", &JsValue::from_f64(*got as f64));
            Some(d.into())
        }
        taskview::Error::Mesh { task, .. } => {
            let d = new_obj();
            set_kv(&d, "task", &JsValue::from_str(task));
            Some(d.into())
        }
        _ => None,
    };
    err(e.code(), e.to_string(), data)
}

#[inline]
pub fn dom(message: impl Into<String>) -> JsValue {
    err("dom", message, None)
}

#[inline]
pub fn config(message: impl Into<String>) -> JsValue {
    err("config", message, None)
}

pub fn fetch_failed(url: &str, cause: JsValue) -> JsValue {
    let d = new_obj();
    set_kv(&d, "url", &JsValue::from_str(url));
    set_kv(&d, "cause", &cause);
    err("fetch_failed", format!("request for '{}' failed", url), Some(d.into()))
}

pub fn http_status(url: &str, status: u16) -> JsValue {
    let d = new_obj();
    set_kv(&d, "url", &JsValue::from_str(url));
    set_kv(&d, "status", &JsValue::from_f64(status as f64));
    err("http_status", format!("'{}' answered HTTP {}, expected 200", url, status), Some(d.into()))
}
