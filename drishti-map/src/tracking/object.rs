//! Tracked world objects.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, ObjectLabel, TileBox};

/// A labelled box in grid indices.
///
/// The label is fixed once the object is first seen; later observations can
/// only replace the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldObject {
    /// Object class
    pub label: ObjectLabel,
    /// Inclusive tile box in grid indices
    pub bounding_box: TileBox,
}

impl WorldObject {
    /// Create a new object
    pub fn new(label: ObjectLabel, bounding_box: TileBox) -> Self {
        Self {
            label,
            bounding_box,
        }
    }

    /// Single-tile wall object
    pub fn wall(coord: GridCoord) -> Self {
        Self::new(ObjectLabel::Wall, TileBox::single(coord))
    }

    /// Tiles this object paints when rendered.
    ///
    /// - NPC: the bottom-right tile only (the sprite's feet)
    /// - Exit: the top-left and top-right tiles (the door mat)
    /// - Everything else: the full inclusive box
    pub fn footprint(&self) -> Vec<GridCoord> {
        let b = &self.bounding_box;
        match self.label {
            ObjectLabel::Npc => vec![b.bottom_right()],
            ObjectLabel::Exit => {
                if b.x1 == b.x2 {
                    vec![b.top_left()]
                } else {
                    vec![b.top_left(), b.top_right()]
                }
            }
            _ => b.tiles().collect(),
        }
    }
}
