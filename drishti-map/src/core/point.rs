//! Tile and pixel coordinate types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer tile indices)
///
/// `x` is the column, `y` is the row. Row 0 is the top of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Inclusive rectangle of tiles.
///
/// `(x1, y1)` is the top-left tile and `(x2, y2)` the bottom-right tile,
/// both included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TileBox {
    /// Left column
    pub x1: i32,
    /// Top row
    pub y1: i32,
    /// Right column (inclusive)
    pub x2: i32,
    /// Bottom row (inclusive)
    pub y2: i32,
}

impl TileBox {
    /// Create a box from its two corners
    #[inline]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box covering a single tile
    #[inline]
    pub fn single(coord: GridCoord) -> Self {
        Self::new(coord.x, coord.y, coord.x, coord.y)
    }

    /// Top-left tile
    #[inline]
    pub fn top_left(&self) -> GridCoord {
        GridCoord::new(self.x1, self.y1)
    }

    /// Top-right tile
    #[inline]
    pub fn top_right(&self) -> GridCoord {
        GridCoord::new(self.x2, self.y1)
    }

    /// Bottom-right tile
    #[inline]
    pub fn bottom_right(&self) -> GridCoord {
        GridCoord::new(self.x2, self.y2)
    }

    /// Size measure used to pick between two matched boxes.
    ///
    /// Computed from corner differences, so a one-tile-wide box measures 0.
    #[inline]
    pub fn area(&self) -> i64 {
        (self.x2 - self.x1) as i64 * (self.y2 - self.y1) as i64
    }

    /// Is the tile inside this box (edges included)?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.x1 && coord.x <= self.x2 && coord.y >= self.y1 && coord.y <= self.y2
    }

    /// Shift both corners by a delta
    #[inline]
    pub fn translated(&self, delta: GridCoord) -> Self {
        Self::new(
            self.x1 + delta.x,
            self.y1 + delta.y,
            self.x2 + delta.x,
            self.y2 + delta.y,
        )
    }

    /// Do the two boxes share any tile?
    #[inline]
    pub fn intersects(&self, other: &TileBox) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }

    /// Clip to `bounds`, returning `None` when nothing remains
    pub fn clamped_to(&self, bounds: &TileBox) -> Option<TileBox> {
        if !self.intersects(bounds) {
            return None;
        }
        Some(TileBox::new(
            self.x1.max(bounds.x1),
            self.y1.max(bounds.y1),
            self.x2.min(bounds.x2),
            self.y2.min(bounds.y2),
        ))
    }

    /// Iterate every tile in the box, column by column
    pub fn tiles(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (self.x1..=self.x2).flat_map(move |x| (self.y1..=self.y2).map(move |y| GridCoord::new(x, y)))
    }
}

/// Detector bounding box in pixel space of the padded-to-square frame
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelBox {
    /// Left edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
    /// Right edge
    pub x2: f32,
    /// Bottom edge
    pub y2: f32,
}

impl PixelBox {
    /// Create a pixel box from its edges
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<[f32; 4]> for PixelBox {
    fn from(edges: [f32; 4]) -> Self {
        Self::new(edges[0], edges[1], edges[2], edges[3])
    }
}
