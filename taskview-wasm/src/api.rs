use std::cell::RefCell;
use std::rc::Rc;

use taskview::Command;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlCanvasElement, KeyboardEvent};

use crate::canvas::CanvasSurface;
use crate::config::WebConfig;
use crate::keys::key_command;
use crate::{error, interop, TaskViewer};

fn random() -> f64 {
    js_sys::Math::random()
}

#[wasm_bindgen]
pub fn init_runtime() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // a second call finds the logger already installed
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn parse_config(config: JsValue) -> Result<WebConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(WebConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| error::config(e.to_string()))
}

/// Fetches the task list, draws the first task and binds the arrow keys.
/// Rejects without drawing anything if the payload cannot be loaded.
#[wasm_bindgen]
pub async fn start(config: JsValue) -> Result<(), JsValue> {
    init_runtime();
    let web = parse_config(config)?;
    log::info!("loading tasks from {}", web.data_url);
    let text = interop::fetch_text(&web.data_url).await?;
    let viewer = TaskViewer::rs_new(&text, web).map_err(|e| error::from_core(&e))?;
    viewer.render()?;
    let doc = interop::document()?;
    bind_keys(Rc::new(RefCell::new(viewer)), &doc)
}

/// Listens for arrow keys on `target`, steps `viewer` and redraws.
/// Only navigation keys have their default action prevented.
pub fn bind_keys(viewer: Rc<RefCell<TaskViewer>>, target: &EventTarget) -> Result<(), JsValue> {
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        let Some(cmd) = key_command(&e.code()) else { return };
        e.prevent_default();
        // errors are already logged by the error constructors
        let _ = viewer.borrow_mut().apply(cmd);
    });
    target.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    // the listener lives as long as the page
    on_key.forget();
    Ok(())
}

impl TaskViewer {
    fn apply(&mut self, cmd: Command) -> Result<u32, JsValue> {
        self.inner.handle(cmd);
        self.render()?;
        Ok(self.inner.current_index() as u32)
    }
}

#[wasm_bindgen]
impl TaskViewer {
    /// Builds a viewer from a JSON task list without touching the network.
    pub fn from_json(json: &str, config: JsValue) -> Result<TaskViewer, JsValue> {
        let web = parse_config(config)?;
        TaskViewer::rs_new(json, web).map_err(|e| error::from_core(&e))
    }

    pub fn len(&self) -> u32 {
        self.inner.len() as u32
    }
    pub fn current_index(&self) -> u32 {
        self.inner.current_index() as u32
    }
    pub fn current_name(&self) -> String {
        self.inner.current().name.clone()
    }

    pub fn caption(&self) -> String {
        self.inner.caption()
    }

    pub fn capabilities(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.current().capabilities()).unwrap_or(JsValue::NULL)
    }

    // Navigation; each returns the new index after redrawing.
    pub fn step_left(&mut self) -> Result<u32, JsValue> {
        self.apply(Command::StepLeft)
    }
    pub fn step_right(&mut self) -> Result<u32, JsValue> {
        self.apply(Command::StepRight)
    }
    /// Returns whether `code` is a navigation key; the caller should then prevent its default.
    pub fn handle_key(&mut self, code: &str) -> Result<bool, JsValue> {
        match key_command(code) {
            Some(cmd) => self.apply(cmd).map(|_| true),
            None => Ok(false),
        }
    }

    /// Redraws the current task on the configured canvas and caption.
    pub fn render(&self) -> Result<(), JsValue> {
        let mut surface = CanvasSurface::from_ids(&self.web.canvas_id, &self.web.caption_id)?;
        self.inner.render(&mut surface, &mut random).map_err(|e| error::from_core(&e))
    }

    pub fn render_to(&self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let mut surface = CanvasSurface::new(canvas, None)?;
        self.inner.render(&mut surface, &mut random).map_err(|e| error::from_core(&e))
    }

    pub fn to_svg(&self) -> Result<String, JsValue> {
        self.inner.to_svg(&mut random).map_err(|e| error::from_core(&e))
    }

    /// `to_svg` wrapped in an `{ ok, value | error }` object.
    pub fn to_svg_res(&self) -> JsValue {
        match self.to_svg() {
            Ok(svg) => error::ok(JsValue::from_str(&svg)),
            Err(e) => e,
        }
    }
}
