//! Cell palette for the tile grid.
//!
//! DrishtiMap does not estimate occupancy. Every tile carries a palette tag
//! describing what was last rendered on it, plus a `visited` flag recording
//! whether the tile has ever been inside the viewport interior.

use serde::{Deserialize, Serialize};

/// Palette tag of a tile.
///
/// The tag hierarchy used by [`GridStorage::stamp`](crate::grid::GridStorage::stamp):
/// - `Npc` - never overwritten by any other tag
/// - `Exit` - only overwritten by `Npc`
/// - everything else - freely overwritten
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellColor {
    /// Nothing rendered yet (true unknown, or cleared before a re-render)
    #[default]
    Empty = 0,

    /// Non-player character
    Npc = 1,

    /// Wall or boundary inferred from a blocked movement
    Wall = 2,

    /// Pokécenter building
    Pokecenter = 3,

    /// Mart building
    Mart = 4,

    /// House building
    House = 5,

    /// Gym building
    Gym = 6,

    /// Exit / door / warp tile
    Exit = 7,

    /// The agent's own tile
    Agent = 8,

    /// Observed but not yet explored (exploration candidate)
    Frontier = 9,
}

impl CellColor {
    /// Convert from u8 (storage representation)
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellColor::Npc,
            2 => CellColor::Wall,
            3 => CellColor::Pokecenter,
            4 => CellColor::Mart,
            5 => CellColor::House,
            6 => CellColor::Gym,
            7 => CellColor::Exit,
            8 => CellColor::Agent,
            9 => CellColor::Frontier,
            _ => CellColor::Empty,
        }
    }

    /// RGB value used when the grid is handed to a renderer
    pub fn rgb(self) -> [u8; 3] {
        match self {
            CellColor::Empty => [0, 0, 0],
            CellColor::Npc => [245, 135, 66],
            CellColor::Wall => [105, 105, 105],
            CellColor::Pokecenter => [255, 0, 0],
            CellColor::Mart => [0, 0, 255],
            CellColor::House => [102, 57, 30],
            CellColor::Gym => [30, 102, 96],
            CellColor::Exit => [185, 255, 33],
            CellColor::Agent => [0, 255, 149],
            CellColor::Frontier => [255, 255, 255],
        }
    }

    /// Is this a landmark tag (anything an object can render)?
    #[inline]
    pub fn is_landmark(self) -> bool {
        !matches!(
            self,
            CellColor::Empty | CellColor::Agent | CellColor::Frontier
        )
    }

    /// Would stamping `incoming` over `self` be allowed?
    #[inline]
    pub fn yields_to(self, incoming: CellColor) -> bool {
        match (self, incoming) {
            (CellColor::Npc, CellColor::Npc) => true,
            (CellColor::Npc, _) => false,
            (CellColor::Exit, CellColor::Npc | CellColor::Exit) => true,
            (CellColor::Exit, _) => false,
            _ => true,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellColor::Empty => ' ',
            CellColor::Npc => 'n',
            CellColor::Wall => '#',
            CellColor::Pokecenter => 'P',
            CellColor::Mart => 'M',
            CellColor::House => 'H',
            CellColor::Gym => 'G',
            CellColor::Exit => 'E',
            CellColor::Agent => '@',
            CellColor::Frontier => '.',
        }
    }
}

/// A single tile of the world grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Palette tag currently rendered on the tile
    pub color: CellColor,

    /// Has the tile ever been inside the viewport interior? Never reset.
    pub visited: bool,
}

impl Cell {
    /// Create a new empty, unvisited cell
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cell with a specific color
    #[inline]
    pub fn with_color(color: CellColor) -> Self {
        Self {
            color,
            visited: false,
        }
    }

    /// RGB plus visited byte, the layout renderers consume
    #[inline]
    pub fn rgba(&self) -> [u8; 4] {
        let [r, g, b] = self.color.rgb();
        [r, g, b, self.visited as u8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_roundtrip() {
        for value in 0..10u8 {
            assert_eq!(CellColor::from_u8(value) as u8, value);
        }
        assert_eq!(CellColor::from_u8(200), CellColor::Empty);
    }

    #[test]
    fn test_npc_never_yields() {
        for value in 0..10u8 {
            let incoming = CellColor::from_u8(value);
            assert_eq!(CellColor::Npc.yields_to(incoming), incoming == CellColor::Npc);
        }
    }

    #[test]
    fn test_exit_yields_only_to_npc() {
        assert!(CellColor::Exit.yields_to(CellColor::Npc));
        assert!(!CellColor::Exit.yields_to(CellColor::House));
        assert!(!CellColor::Exit.yields_to(CellColor::Agent));
        assert!(CellColor::House.yields_to(CellColor::Exit));
    }

    #[test]
    fn test_rgba_carries_visited() {
        let mut cell = Cell::with_color(CellColor::Frontier);
        assert_eq!(cell.rgba(), [255, 255, 255, 0]);
        cell.visited = true;
        assert_eq!(cell.rgba(), [255, 255, 255, 1]);
    }
}
