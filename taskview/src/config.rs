use serde::{Deserialize, Serialize};

use crate::algorithms::viewport::ViewportConfig;

/// Display options for a [`crate::Viewer`]. Every field has a default, so a
/// partial JSON object (or `{}`) is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub viewport: ViewportConfig,
    /// Draw `subdivided_task` / `subdivided_skeleton` instead of the raw task when present.
    pub prefer_subdivided: bool,
    pub show_adjacency: bool,
    /// Append `size=` (larger bbox extent) to the caption.
    pub show_size: bool,
    /// Amplitude in pixels of the random offset applied to adjacency stubs; 0 disables it.
    pub jitter: f64,
    pub svg_width: f64,
    pub svg_height: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            viewport: ViewportConfig::default(),
            prefer_subdivided: true,
            show_adjacency: true,
            show_size: false,
            jitter: 0.0,
            svg_width: 800.0,
            svg_height: 800.0,
        }
    }
}
