//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::grid::GridConfig;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Game window width (pixels)
    #[serde(default = "defaults::window_width")]
    pub window_width: u32,

    /// Game window height (pixels)
    #[serde(default = "defaults::window_height")]
    pub window_height: u32,

    /// Viewport width (tiles)
    #[serde(default = "defaults::viewport_cols")]
    pub viewport_cols: u32,

    /// Viewport height (tiles)
    #[serde(default = "defaults::viewport_rows")]
    pub viewport_rows: u32,

    /// Letterbox padding (pixels). Derived from the window size when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            window_width: 720,
            window_height: 480,
            viewport_cols: 15,
            viewport_rows: 11,
            padding: None,
        }
    }
}

impl GridSection {
    /// Convert to GridConfig
    pub fn to_grid_config(&self) -> GridConfig {
        GridConfig {
            window_width: self.window_width,
            window_height: self.window_height,
            viewport_cols: self.viewport_cols,
            viewport_rows: self.viewport_rows,
            padding: self.padding,
        }
    }
}
