//! Detection configuration section.

use serde::{Deserialize, Serialize};

use crate::projection::DetectionFilter;

use super::defaults;

/// Detection pre-filter section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionSection {
    /// Minimum detector score
    #[serde(default = "defaults::min_score")]
    pub min_score: f32,

    /// Drop all NPC detections
    #[serde(default)]
    pub suppress_npc: bool,
}

impl DetectionSection {
    /// Convert to DetectionFilter
    pub fn to_detection_filter(&self) -> DetectionFilter {
        DetectionFilter {
            min_score: self.min_score,
            suppress_npc: self.suppress_npc,
        }
    }
}
