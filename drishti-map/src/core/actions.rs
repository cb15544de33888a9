//! Movement directions and agent actions.

use serde::{Deserialize, Serialize};

use super::point::GridCoord;

/// One of the four movement directions on the tile grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward larger columns
    Right,
    /// Toward larger rows
    Down,
    /// Toward column 0
    Left,
}

impl Direction {
    /// All directions in input-code order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step in tile space
    #[inline]
    pub fn step(self) -> GridCoord {
        match self {
            Direction::Up => GridCoord::new(0, -1),
            Direction::Right => GridCoord::new(1, 0),
            Direction::Down => GridCoord::new(0, 1),
            Direction::Left => GridCoord::new(-1, 0),
        }
    }
}

/// Action issued by the input component for a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move one tile up
    Up,
    /// Move one tile right
    Right,
    /// Move one tile down
    Down,
    /// Move one tile left
    Left,
    /// Press the interact button (no movement)
    Interact,
}

impl Action {
    /// Map the input component's numeric code (0 = up .. 3 = left, 4 = interact)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Action::Up),
            1 => Some(Action::Right),
            2 => Some(Action::Down),
            3 => Some(Action::Left),
            4 => Some(Action::Interact),
            _ => None,
        }
    }

    /// Direction moved by this action, if it moves at all
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::Up => Some(Direction::Up),
            Action::Right => Some(Direction::Right),
            Action::Down => Some(Direction::Down),
            Action::Left => Some(Direction::Left),
            Action::Interact => None,
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Action::Up,
            Direction::Right => Action::Right,
            Direction::Down => Action::Down,
            Direction::Left => Action::Left,
        }
    }
}
