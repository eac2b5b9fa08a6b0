use serde::{Deserialize, Serialize};
use taskview::ViewerConfig;

/// Page wiring plus display options, as passed to `start`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub data_url: String,
    pub canvas_id: String,
    pub caption_id: String,
    #[serde(flatten)]
    pub view: ViewerConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            data_url: "/cache/all_tasks.json".to_string(),
            canvas_id: "canvas".to_string(),
            caption_id: "caption".to_string(),
            view: ViewerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_view_options() {
        let cfg: WebConfig =
            serde_json::from_str(r#"{"data_url": "/t.json", "show_size": true, "jitter": 7}"#).unwrap();
        assert_eq!(cfg.data_url, "/t.json");
        assert_eq!(cfg.canvas_id, "canvas");
        assert!(cfg.view.show_size);
        assert_eq!(cfg.view.jitter, 7.0);
        assert!(cfg.view.viewport.flip_y);
    }
}
