//! Configuration types for the tile grid.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GridCoord, TileBox};

/// Geometry of the camera window and its tile partition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Game window width in pixels
    pub window_width: u32,

    /// Game window height in pixels
    pub window_height: u32,

    /// Viewport width in tiles
    pub viewport_cols: u32,

    /// Viewport height in tiles
    pub viewport_rows: u32,

    /// Letterbox padding added above and below the frame to make it square.
    /// If None, derived from the window size.
    pub padding: Option<f32>,
}

impl Default for GridConfig {
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

impl GridConfig {
    /// Tile edge length in pixels (48 for a 720 px wide, 15 tile window)
    pub fn tile_size(&self) -> f32 {
        (self.window_width / self.viewport_cols.max(1)) as f32
    }

    /// Vertical padding added when the frame is letterboxed to a square
    pub fn square_padding(&self) -> f32 {
        if self.window_height < self.window_width {
            ((self.window_width - self.window_height) / 2) as f32
        } else {
            0.0
        }
    }

    /// Effective padding (explicit override or derived)
    pub fn effective_padding(&self) -> f32 {
        self.padding.unwrap_or_else(|| self.square_padding())
    }

    /// Viewport width in tiles as a signed span
    #[inline]
    pub fn cols(&self) -> i32 {
        self.viewport_cols as i32
    }

    /// Viewport height in tiles as a signed span
    #[inline]
    pub fn rows(&self) -> i32 {
        self.viewport_rows as i32
    }

    /// Agent tile relative to the viewport's top-left tile (7, 5 by default)
    #[inline]
    pub fn agent_tile(&self) -> GridCoord {
        GridCoord::new(self.cols() / 2, self.rows() / 2)
    }

    /// Tile the agent faces when trying to move in `direction`,
    /// relative to the viewport's top-left tile
    #[inline]
    pub fn facing_tile(&self, direction: Direction) -> GridCoord {
        self.agent_tile() + direction.step()
    }

    /// The whole viewport in local tile coordinates
    #[inline]
    pub fn viewport_box(&self) -> TileBox {
        TileBox::new(0, 0, self.cols() - 1, self.rows() - 1)
    }
}
