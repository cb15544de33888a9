//! Test utilities for DrishtiMap integration tests.
//!
//! Builds detector boxes from viewport tiles and sensor readings for the
//! common movement cases.

#![allow(dead_code)]

use drishti_map::{
    Detection, GridConfig, GridCoord, LiveMap, ObjectLabel, PixelBox, SensorSnapshot,
};

/// Tile edge in pixels for the default 720x480 window.
pub const TILE: f32 = 48.0;

/// Letterbox padding for the default 720x480 window.
pub const PAD: f32 = 120.0;

/// Fresh map with the default geometry.
pub fn new_map() -> LiveMap {
    LiveMap::new(GridConfig::default())
}

/// Pixel box exactly covering viewport tiles (x1, y1)..=(x2, y2).
pub fn tile_pixels(x1: i32, y1: i32, x2: i32, y2: i32) -> PixelBox {
    PixelBox::new(
        x1 as f32 * TILE,
        PAD + y1 as f32 * TILE,
        (x2 + 1) as f32 * TILE,
        PAD + (y2 + 1) as f32 * TILE,
    )
}

/// Detection covering viewport tiles (x1, y1)..=(x2, y2).
pub fn detection(label: ObjectLabel, x1: i32, y1: i32, x2: i32, y2: i32) -> Detection {
    Detection::new(label, tile_pixels(x1, y1, x2, y2), 0.9)
}

/// Sensor reading after a free step to (x, y).
pub fn at(x: u32, y: u32) -> SensorSnapshot {
    SensorSnapshot {
        pos_x: x,
        pos_y: y,
        ..SensorSnapshot::default()
    }
}

/// Sensor reading with the movement-blocked flag set.
pub fn blocked(x: u32, y: u32) -> SensorSnapshot {
    SensorSnapshot {
        movement_blocked: true,
        ..at(x, y)
    }
}

/// Sensor reading with a wild battle starting.
pub fn wild_battle(x: u32, y: u32) -> SensorSnapshot {
    SensorSnapshot {
        wild_battle: true,
        ..at(x, y)
    }
}

/// World offsets of every visited cell.
pub fn visited_world_cells(map: &LiveMap) -> Vec<GridCoord> {
    let grid = map.grid();
    grid.iter()
        .filter(|(_, cell)| cell.visited)
        .map(|(coord, _)| grid.grid_to_world(coord))
        .collect()
}
