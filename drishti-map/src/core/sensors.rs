//! Inputs from the external sensor and detector components.
//!
//! - [`SensorSnapshot`]: one reading of the game-state (RAM) sensor
//! - [`Detection`]: one detector box for the current frame
//! - [`ObjectLabel`]: detector class, plus the wall class created by collisions

use serde::{Deserialize, Serialize};

use super::cell::CellColor;
use super::point::PixelBox;

/// Number of values in a raw sensor tuple.
pub const RAW_SNAPSHOT_LEN: usize = 6;

/// Errors parsing a raw sensor tuple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// Tuple has the wrong number of values
    #[error("sensor tuple has {actual} values, expected {expected}")]
    WrongLength {
        /// Expected value count
        expected: usize,
        /// Received value count
        actual: usize,
    },
}

/// One reading of the positional/state sensor.
///
/// Compared frame-to-frame to tell a completed movement from a freeze
/// caused by a starting battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Raw X position reading
    pub pos_x: u32,
    /// Raw Y position reading
    pub pos_y: u32,
    /// Battle kind (0 = none, 1 or 2 = battle active/starting)
    pub battle_kind: u8,
    /// Wild encounter flag
    pub wild_battle: bool,
    /// The last movement attempt was blocked
    pub movement_blocked: bool,
}

impl SensorSnapshot {
    /// Parse the fixed-order tuple
    /// `[pos_x, pos_y, <unused>, battle_kind, wild_battle_flag, movement_blocked_flag]`.
    ///
    /// Only the length is checked; flag values other than 0 are read as set.
    pub fn from_raw(values: &[u32]) -> Result<Self, SnapshotError> {
        if values.len() != RAW_SNAPSHOT_LEN {
            return Err(SnapshotError::WrongLength {
                expected: RAW_SNAPSHOT_LEN,
                actual: values.len(),
            });
        }
        Ok(Self {
            pos_x: values[0],
            pos_y: values[1],
            battle_kind: values[3] as u8,
            wild_battle: values[4] != 0,
            movement_blocked: values[5] != 0,
        })
    }

    /// Is a wild or trainer battle active or starting?
    #[inline]
    pub fn battle_pending(&self) -> bool {
        self.wild_battle || self.battle_kind == 1 || self.battle_kind == 2
    }

    /// Did the raw position change since `previous`?
    #[inline]
    pub fn moved_since(&self, previous: &SensorSnapshot) -> bool {
        self.pos_x != previous.pos_x || self.pos_y != previous.pos_y
    }
}

/// Object class reported by the detector (plus walls inferred from collisions)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectLabel {
    /// Pokécenter building
    Pokecenter,
    /// Mart building
    Mart,
    /// Non-player character
    Npc,
    /// House building
    House,
    /// Gym building
    Gym,
    /// Exit / door
    Exit,
    /// Wall inferred from a blocked movement (never produced by the detector)
    Wall,
}

impl ObjectLabel {
    /// Map a detector class id. Unknown ids yield `None`.
    pub fn from_class_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(ObjectLabel::Pokecenter),
            1 => Some(ObjectLabel::Mart),
            2 => Some(ObjectLabel::Npc),
            3 => Some(ObjectLabel::House),
            4 => Some(ObjectLabel::Gym),
            5 => Some(ObjectLabel::Exit),
            6 => Some(ObjectLabel::Wall),
            _ => None,
        }
    }

    /// Palette tag rendered for this label
    pub fn color(self) -> CellColor {
        match self {
            ObjectLabel::Pokecenter => CellColor::Pokecenter,
            ObjectLabel::Mart => CellColor::Mart,
            ObjectLabel::Npc => CellColor::Npc,
            ObjectLabel::House => CellColor::House,
            ObjectLabel::Gym => CellColor::Gym,
            ObjectLabel::Exit => CellColor::Exit,
            ObjectLabel::Wall => CellColor::Wall,
        }
    }

    /// Classes that may be the agent's own sprite misclassified
    #[inline]
    pub fn is_npc_like(self) -> bool {
        matches!(self, ObjectLabel::Npc)
    }
}

/// One detector output for the current frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detected class
    pub label: ObjectLabel,
    /// Box in pixel space of the padded frame
    pub pixel_box: PixelBox,
    /// Detector confidence
    pub score: f32,
}

impl Detection {
    /// Create a detection
    pub fn new(label: ObjectLabel, pixel_box: PixelBox, score: f32) -> Self {
        Self {
            label,
            pixel_box,
            score,
        }
    }
}
