use wasm_bindgen::prelude::*;
mod api;
mod canvas;
mod config;
mod error;
mod interop;
mod keys;

pub use api::{bind_keys, start};
pub use canvas::CanvasSurface;
pub use config::WebConfig;
pub use keys::key_command;

#[wasm_bindgen]
pub struct TaskViewer {
    pub(crate) inner: taskview::Viewer,
    pub(crate) web: WebConfig,
}

impl TaskViewer {
    pub fn rs_new(json: &str, web: WebConfig) -> Result<TaskViewer, taskview::Error> {
        let inner = taskview::Viewer::from_json_str(json, web.view.clone())?;
        Ok(TaskViewer { inner, web })
    }
    pub fn rs_viewer(&self) -> &taskview::Viewer { &self.inner }
}
