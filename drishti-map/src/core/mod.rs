//! Core types for the DrishtiMap library.
//!
//! All tile coordinates use screen convention:
//! - **X**: column index, growing to the right
//! - **Y**: row index, growing downward (row 0 is the top edge)
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer tile indices
//! - [`TileBox`]: Inclusive rectangle of tiles
//! - [`PixelBox`]: Detector box in pixel space
//!
//! ### Grid Cells
//! - [`CellColor`]: Palette tag (Empty, Npc, Wall, landmarks, Agent, Frontier)
//! - [`Cell`]: Palette tag plus the monotone `visited` flag
//!
//! ### Inputs
//! - [`Action`] / [`Direction`]: What the input component attempted
//! - [`SensorSnapshot`]: Position and battle/blocked flags
//! - [`Detection`] / [`ObjectLabel`]: Detector output for a frame

mod actions;
mod cell;
mod point;
mod sensors;

pub use actions::{Action, Direction};
pub use cell::{Cell, CellColor};
pub use point::{GridCoord, PixelBox, TileBox};
pub use sensors::{Detection, ObjectLabel, RAW_SNAPSHOT_LEN, SensorSnapshot, SnapshotError};
