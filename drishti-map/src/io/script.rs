//! Frame script YAML parsing and replay.
//!
//! A frame script records what the mapper saw, frame by frame:
//! - Action attempted since the previous frame
//! - Raw sensor tuple
//! - Raw detector output (class id, pixel box, score)
//!
//! Replaying a script through a [`LiveMap`] reproduces the map and the
//! per-frame statuses without a running game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Action, Detection, ObjectLabel, PixelBox, SensorSnapshot, SnapshotError};
use crate::mapper::{LiveMap, MapStatus};
use crate::planner::ExplorationPlanner;

/// A recorded frame sequence loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameScript {
    /// Human-readable script name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Sensor tuple read before the first frame
    #[serde(default)]
    pub initial_sensor: Option<Vec<u32>>,

    /// Recorded frames in order
    pub frames: Vec<FrameRecord>,
}

/// One recorded frame
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Action attempted since the previous frame (absent = no key)
    #[serde(default)]
    pub action: Option<Action>,

    /// Raw sensor tuple
    pub sensor: Vec<u32>,

    /// Detector output, highest score first
    #[serde(default)]
    pub detections: Vec<RawDetection>,
}

/// Detector output as recorded
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawDetection {
    /// Detector class id
    pub class_id: u8,

    /// Pixel box `[x1, y1, x2, y2]`
    #[serde(rename = "box")]
    pub pixel_box: [f32; 4],

    /// Detector confidence
    #[serde(default = "default_score")]
    pub score: f32,
}

fn default_score() -> f32 {
    1.0
}

/// Error type for frame script loading and replay
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    /// I/O error reading file
    #[error("I/O error: {0}")]
    Io(String),
    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Malformed sensor tuple
    #[error("frame {frame}: {source}")]
    Sensor {
        /// Frame index (0 for the initial sensor)
        frame: usize,
        /// Underlying error
        #[source]
        source: SnapshotError,
    },
}

impl RawDetection {
    /// Convert to a detection. Unknown class ids yield `None`.
    pub fn to_detection(&self) -> Option<Detection> {
        let label = ObjectLabel::from_class_id(self.class_id)?;
        Some(Detection::new(label, PixelBox::from(self.pixel_box), self.score))
    }
}

impl FrameRecord {
    /// Parse the raw sensor tuple.
    pub fn snapshot(&self) -> Result<SensorSnapshot, SnapshotError> {
        SensorSnapshot::from_raw(&self.sensor)
    }

    /// Detections with known class ids.
    pub fn detections(&self) -> Vec<Detection> {
        self.detections
            .iter()
            .filter_map(|raw| {
                let detection = raw.to_detection();
                if detection.is_none() {
                    log::warn!("Skipping detection with unknown class id {}", raw.class_id);
                }
                detection
            })
            .collect()
    }
}

impl FrameScript {
    /// Load script from YAML file
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScriptError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ScriptError> {
        serde_yaml::from_str(yaml).map_err(|e| ScriptError::Parse(e.to_string()))
    }

    /// Parsed initial sensor reading, if recorded
    pub fn initial_snapshot(&self) -> Result<Option<SensorSnapshot>, ScriptError> {
        self.initial_sensor
            .as_deref()
            .map(SensorSnapshot::from_raw)
            .transpose()
            .map_err(|source| ScriptError::Sensor { frame: 0, source })
    }

    /// Feed every frame through `map`, returning the status of each.
    ///
    /// Stops at the first frame with a malformed sensor tuple; frames before
    /// it have already been applied.
    pub fn replay<P: ExplorationPlanner>(
        &self,
        map: &mut LiveMap<P>,
    ) -> Result<Vec<MapStatus>, ScriptError> {
        let mut statuses = Vec::with_capacity(self.frames.len());

        for (index, frame) in self.frames.iter().enumerate() {
            let sensor = frame
                .snapshot()
                .map_err(|source| ScriptError::Sensor { frame: index, source })?;
            let detections = frame.detections();

            let (_, status) = map.draw_map(frame.action, &detections, sensor);
            log::debug!("Frame {}: {:?} -> {}", index, frame.action, status);
            statuses.push(status);
        }

        Ok(statuses)
    }
}
