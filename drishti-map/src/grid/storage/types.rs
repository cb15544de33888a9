//! Types used by grid storage.

use crate::core::{CellColor, Direction, GridCoord, TileBox};
use serde::{Deserialize, Serialize};

/// Mutable reference to a single cell's fields in the SoA storage.
pub struct CellMut<'a> {
    /// Palette tag as raw u8.
    pub color: &'a mut u8,
    /// Visited flag (0 = never visited, 1 = visited).
    pub visited: &'a mut u8,
}

impl<'a> CellMut<'a> {
    /// Get the palette tag.
    #[inline]
    pub fn get_color(&self) -> CellColor {
        CellColor::from_u8(*self.color)
    }

    /// Stamp a tag, honouring NPC and exit precedence.
    #[inline]
    pub fn stamp(&mut self, color: CellColor) -> bool {
        if self.get_color().yields_to(color) {
            *self.color = color as u8;
            true
        } else {
            false
        }
    }

    /// Check the visited flag.
    #[inline]
    pub fn is_visited(&self) -> bool {
        *self.visited != 0
    }

    /// Set the visited flag. There is no way to clear it.
    #[inline]
    pub fn mark_visited(&mut self) {
        *self.visited = 1;
    }
}

/// Emitted whenever the grid grows on an edge.
///
/// Growth toward up or left moves the grid origin, so every coordinate
/// stored outside the grid (world objects, planner frontiers) has to be
/// shifted by [`GrowthEvent::shift`] in the same step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthEvent {
    /// Edge that received the new row or column.
    pub direction: Direction,
    /// Translation to apply to previously stored grid indices.
    pub shift: GridCoord,
}

impl GrowthEvent {
    /// Build the event for growth on the given edge.
    pub fn for_direction(direction: Direction) -> Self {
        let shift = match direction {
            Direction::Up => GridCoord::new(0, 1),
            Direction::Left => GridCoord::new(1, 0),
            Direction::Right | Direction::Down => GridCoord::new(0, 0),
        };
        Self { direction, shift }
    }

    /// Does this event move previously stored indices at all?
    #[inline]
    pub fn moves_origin(&self) -> bool {
        self.shift != GridCoord::new(0, 0)
    }

    /// Translate a stored tile coordinate.
    #[inline]
    pub fn apply(&self, coord: GridCoord) -> GridCoord {
        coord + self.shift
    }

    /// Translate a stored tile box.
    #[inline]
    pub fn apply_box(&self, tile_box: TileBox) -> TileBox {
        tile_box.translated(self.shift)
    }
}

/// Cell counts by palette tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Nothing rendered.
    pub empty: usize,
    /// Frontier (observed, unexplored).
    pub frontier: usize,
    /// Inferred walls.
    pub wall: usize,
    /// NPC tiles.
    pub npc: usize,
    /// Exit tiles.
    pub exit: usize,
    /// Building tiles (pokécenter, mart, house, gym).
    pub building: usize,
    /// Agent tile.
    pub agent: usize,
    /// Cells with the visited flag set (independent of color).
    pub visited: usize,
}

impl CellCounts {
    /// Total cells with any tag.
    pub fn known(&self) -> usize {
        self.frontier + self.wall + self.npc + self.exit + self.building + self.agent
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.empty + self.known()
    }

    pub(super) fn add(&mut self, color: CellColor) {
        match color {
            CellColor::Empty => self.empty += 1,
            CellColor::Frontier => self.frontier += 1,
            CellColor::Wall => self.wall += 1,
            CellColor::Npc => self.npc += 1,
            CellColor::Exit => self.exit += 1,
            CellColor::Pokecenter | CellColor::Mart | CellColor::House | CellColor::Gym => {
                self.building += 1
            }
            CellColor::Agent => self.agent += 1,
        }
    }
}
