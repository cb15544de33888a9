//! # DrishtiMap
//!
//! Incremental 2D tile-grid mapping from camera-frame object detections and
//! movement outcomes. A simplified SLAM front end for tile-based worlds.
//!
//! ## Overview
//!
//! Each frame, DrishtiMap receives the action attempted by the agent, the
//! detector's boxes for the visible viewport and a small game-state sensor
//! reading. It keeps a growable world grid whose cells carry a palette tag:
//!
//! - **Empty** - Never observed
//! - **Frontier** - Observed inside a past viewport but not occupied by anything
//! - **Wall** - Inferred from a blocked movement
//! - **Npc / Exit / buildings** - Rendered from tracked detections
//! - **Agent** - The agent's own tile
//!
//! ## Features
//!
//! - **Growable grid**: The world grows one row/column at a time as the viewport
//!   crosses its edges, and every stored index follows the growth
//! - **Object tracking**: Detections are merged with previously seen objects
//!   by corner containment, keeping the larger box
//! - **Wall inference**: A blocked move toward a known frontier tile records a wall
//! - **Battle handling**: Steps interrupted by a battle are reported apart from
//!   regular steps
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_map::{Action, GridConfig, LiveMap, SensorSnapshot};
//!
//! let mut map = LiveMap::new(GridConfig::default());
//!
//! let sensor = SensorSnapshot::from_raw(&[3, 7, 0, 0, 0, 0])?;
//! let (snapshot, status) = map.draw_map(Some(Action::Left), &detections, sensor);
//!
//! println!("{}\n{}", status, snapshot.to_ascii());
//! ```
//!
//! ## Coordinate System
//!
//! Screen convention on integer tiles:
//! - X: Column, growing to the right
//! - Y: Row, growing downward
//! - Grid index (0, 0) is the top-left tile of the current grid; it moves
//!   when the grid grows up or left

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid storage and per-frame grid passes
pub mod grid;

// Pixel to tile projection
pub mod projection;

// Object association and rendering
pub mod tracking;

// Exploration planner seam
pub mod planner;

// Per-frame controller
pub mod mapper;

// Unified configuration
pub mod config;

// Frame script replay
pub mod io;

// Re-export commonly used types
pub use self::core::{
    Action, Cell, CellColor, Detection, Direction, GridCoord, ObjectLabel, PixelBox,
    SensorSnapshot, SnapshotError, TileBox,
};

pub use grid::{CellCounts, GridConfig, GridStorage, GrowthEvent};

pub use config::{ConfigLoadError, DrishtiConfig};

pub use projection::{DetectionFilter, TileProjector};

pub use tracking::{ObjectTracker, WorldObject};

pub use planner::{ExplorationPlanner, FrontierBook, IdlePlanner};

pub use mapper::{LiveMap, MapSnapshot, MapStatus};

/// Map coverage statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapCoverageStats {
    /// Grid width in tiles
    pub width: usize,
    /// Grid height in tiles
    pub height: usize,
    /// Cells by palette tag
    pub counts: CellCounts,
    /// Tracked objects, walls included
    pub objects: usize,
    /// Visited cells over all cells
    pub visited_fraction: f32,
}
