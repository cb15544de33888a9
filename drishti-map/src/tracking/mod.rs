//! Persistent object tracking.
//!
//! - [`WorldObject`]: Labelled tile box in grid indices
//! - [`ObjectTracker`]: Corner-containment association and rendering
//! - [`corners_overlap`]: The association predicate

mod object;
mod tracker;

pub use object::WorldObject;
pub use tracker::{IngestReport, ObjectTracker, corners_overlap};
