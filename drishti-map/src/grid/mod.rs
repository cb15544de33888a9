//! Tile grid implementation.
//!
//! This module provides the growable grid and the per-frame passes that
//! write into it:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Frame inputs                       │
//! │   Action + SensorSnapshot        │     Detections        │
//! └─────────┬────────────────────────┴───────────┬───────────┘
//!           │                                    │
//!           ▼                                    ▼
//! ┌─────────────────┐                  ┌─────────────────┐
//! │ collision_update│                  │    tracking     │
//! │ (blocked move)  │                  │ (object render) │
//! └────────┬────────┘                  └────────┬────────┘
//!          │                                    │
//!          └──────────────┬─────────────────────┘
//!                         ▼
//!             ┌───────────────────────┐
//!             │     GridStorage       │◄── frontier_update
//!             │ (arena + offsets)     │
//!             └───────────────────────┘
//! ```
//!
//! - [`GridStorage`]: Growable storage with the world-frame bookkeeping
//! - [`GridConfig`]: Window size, viewport tiles and padding
//! - [`frontier_update`]: Visited/frontier marking around the viewport
//! - [`collision_update`]: Wall inference from blocked movement

pub mod collision_update;
mod config;
pub mod frontier_update;
mod storage;

pub use config::GridConfig;
pub use storage::{CellCounts, CellMut, GridStorage, GrowthEvent};
