//! Recorded input replay.
//!
//! - **Frame scripts**: YAML recordings of actions, sensor tuples and
//!   detector output that can be replayed through a [`LiveMap`](crate::LiveMap)
//!
//! ```rust,ignore
//! use drishti_map::io::FrameScript;
//! use drishti_map::{GridConfig, LiveMap};
//! use std::path::Path;
//!
//! let script = FrameScript::load(Path::new("scripts/demo.yaml"))?;
//! let mut map = LiveMap::new(GridConfig::default());
//! let statuses = script.replay(&mut map)?;
//! ```

pub mod script;

pub use script::{FrameRecord, FrameScript, RawDetection, ScriptError};
