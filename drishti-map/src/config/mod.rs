//! Configuration loading for DrishtiMap.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_map::config::DrishtiConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = DrishtiConfig::load_default()?;
//!
//! // Convert to runtime configs
//! let grid_config = config.to_grid_config();
//! let filter = config.to_detection_filter();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Window size, viewport tiles, letterbox padding |
//! | [`DetectionSection`] | Score threshold and NPC suppression |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   window_width: 720
//!   window_height: 480
//!   viewport_cols: 15
//!   viewport_rows: 11
//!   # padding: 120.0     # derived from the window size when absent
//!
//! detection:
//!   min_score: 0.5
//!   suppress_npc: false
//! ```

mod defaults;
mod detection;
mod drishti;
mod error;
mod grid;

pub use drishti::DrishtiConfig;
pub use error::ConfigLoadError;

pub use detection::DetectionSection;
pub use grid::GridSection;
