//! Grid storage core implementation.
//!
//! Cells live in an over-allocated arena. The logical grid is a window into
//! the arena starting at `origin`; growing toward up or left first consumes
//! slack before the origin, and only reallocates when the slack runs out.

use crate::core::{Cell, CellColor, Direction, GridCoord, TileBox};
use crate::grid::GridConfig;

use super::types::{CellCounts, CellMut, GrowthEvent};

/// Growable tile grid with its world-frame bookkeeping.
///
/// Two coordinate systems meet here:
/// - **grid indices**: `(col, row)` into the current array, `(0, 0)` top-left
/// - **world offsets**: tiles relative to where the agent started;
///   `min_offset` is the world offset of grid index `(0, 0)`
///
/// `offset` is the world offset of the viewport's top-left tile, so
/// `offset - min_offset` is always a valid grid index ([`Self::view_origin`]).
/// `max_offset` is the world offset of the bottom-right grid tile.
///
/// ## Memory Layout
///
/// ```text
/// colors:  [C C C C C C C C|...]   palette tag per cell
/// visited: [V V V V V V V V|...]   0 / 1
///           └── stride ──┘
/// ```
#[derive(Clone, Debug)]
pub struct GridStorage {
    // === SoA Data Arrays ===
    pub(super) colors: Vec<u8>,
    pub(super) visited: Vec<u8>,

    // === Arena Metadata ===
    /// Allocated columns per arena row.
    pub(super) stride: usize,
    /// Allocated arena rows.
    pub(super) arena_rows: usize,
    /// Arena position of grid index (0, 0).
    pub(super) origin: GridCoord,
    pub(super) width: usize,
    pub(super) height: usize,

    // === World Frame ===
    pub(super) offset: GridCoord,
    pub(super) min_offset: GridCoord,
    pub(super) max_offset: GridCoord,
    pub(super) viewport_cols: i32,
    pub(super) viewport_rows: i32,
}

impl GridStorage {
    /// Slack added on an edge when the arena has to be reallocated.
    pub(super) const GROWTH_CHUNK: usize = 8;

    // === Constructors ===

    /// Create a grid covering exactly one viewport, all cells empty.
    pub fn new(config: &GridConfig) -> Self {
        let cols = config.cols().max(1);
        let rows = config.rows().max(1);
        let width = cols as usize;
        let height = rows as usize;

        Self {
            colors: vec![CellColor::Empty as u8; width * height],
            visited: vec![0; width * height],
            stride: width,
            arena_rows: height,
            origin: GridCoord::new(0, 0),
            width,
            height,
            offset: GridCoord::new(0, 0),
            min_offset: GridCoord::new(0, 0),
            max_offset: GridCoord::new(cols - 1, rows - 1),
            viewport_cols: cols,
            viewport_rows: rows,
        }
    }

    // === Basic Properties ===

    /// Grid width in tiles.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// World offset of the viewport's top-left tile.
    #[inline]
    pub fn offset(&self) -> GridCoord {
        self.offset
    }

    /// World offset of grid index (0, 0).
    #[inline]
    pub fn min_offset(&self) -> GridCoord {
        self.min_offset
    }

    /// World offset of the bottom-right grid tile.
    #[inline]
    pub fn max_offset(&self) -> GridCoord {
        self.max_offset
    }

    /// Grid index of the viewport's top-left tile (`offset - min_offset`).
    #[inline]
    pub fn view_origin(&self) -> GridCoord {
        self.offset - self.min_offset
    }

    /// The viewport in grid indices.
    pub fn view_box(&self) -> TileBox {
        let origin = self.view_origin();
        TileBox::new(
            origin.x,
            origin.y,
            origin.x + self.viewport_cols - 1,
            origin.y + self.viewport_rows - 1,
        )
    }

    /// The whole grid in grid indices.
    pub fn bounds(&self) -> TileBox {
        TileBox::new(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    // === Coordinate Conversion ===

    /// Check if grid coordinates are within bounds.
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to an arena index.
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            let ax = (coord.x + self.origin.x) as usize;
            let ay = (coord.y + self.origin.y) as usize;
            Some(ay * self.stride + ax)
        } else {
            None
        }
    }

    /// Convert a world offset to grid coordinates.
    #[inline]
    pub fn world_to_grid(&self, world: GridCoord) -> GridCoord {
        world - self.min_offset
    }

    /// Convert grid coordinates to a world offset.
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> GridCoord {
        coord + self.min_offset
    }

    // === Cell Access ===

    /// Get cell at grid coordinates.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<Cell> {
        self.coord_to_index(coord).map(|i| Cell {
            color: CellColor::from_u8(self.colors[i]),
            visited: self.visited[i] != 0,
        })
    }

    /// Get mutable cell at grid coordinates.
    #[inline]
    pub fn get_mut(&mut self, coord: GridCoord) -> Option<CellMut<'_>> {
        self.coord_to_index(coord).map(move |i| CellMut {
            color: &mut self.colors[i],
            visited: &mut self.visited[i],
        })
    }

    /// Get the palette tag (Empty if out of bounds).
    #[inline]
    pub fn get_color(&self, coord: GridCoord) -> CellColor {
        self.coord_to_index(coord)
            .map(|i| CellColor::from_u8(self.colors[i]))
            .unwrap_or(CellColor::Empty)
    }

    /// Get the visited flag (false if out of bounds).
    #[inline]
    pub fn is_visited(&self, coord: GridCoord) -> bool {
        self.coord_to_index(coord)
            .map(|i| self.visited[i] != 0)
            .unwrap_or(false)
    }

    /// Overwrite a cell's tag unless precedence forbids it.
    ///
    /// NPC tiles are never overwritten by another tag; exit tiles are only
    /// overwritten by NPC. Returns true if the tag was written.
    #[inline]
    pub fn stamp(&mut self, coord: GridCoord, color: CellColor) -> bool {
        match self.get_mut(coord) {
            Some(mut cell) => cell.stamp(color),
            None => false,
        }
    }

    /// Reset every tag to Empty. Visited flags are kept.
    pub fn clear_colors(&mut self) {
        self.colors.fill(CellColor::Empty as u8);
    }

    // === Growth ===

    /// Move the viewport one tile in `direction`, growing the grid first if
    /// the viewport would leave the current bounds.
    ///
    /// Returns the growth event, if any. Callers must apply it to every
    /// stored grid index before using them again.
    pub fn shift_view(&mut self, direction: Direction) -> Option<GrowthEvent> {
        let next = self.offset + direction.step();
        let crosses = match direction {
            Direction::Up => next.y < self.min_offset.y,
            Direction::Left => next.x < self.min_offset.x,
            Direction::Right => next.x + self.viewport_cols - 1 > self.max_offset.x,
            Direction::Down => next.y + self.viewport_rows - 1 > self.max_offset.y,
        };

        let event = crosses.then(|| self.grow(direction));
        self.offset = next;

        debug_assert!(self.is_valid_coord(self.view_origin()));
        debug_assert!(self.is_valid_coord(self.view_box().bottom_right()));
        event
    }

    /// Append one empty row or column on the given edge and extend the
    /// corresponding bound. The grid never shrinks.
    pub fn grow(&mut self, direction: Direction) -> GrowthEvent {
        match direction {
            Direction::Up => {
                if self.origin.y == 0 {
                    self.reserve(0, 0, Self::GROWTH_CHUNK, 0);
                }
                self.origin.y -= 1;
                self.height += 1;
                self.min_offset.y -= 1;
            }
            Direction::Left => {
                if self.origin.x == 0 {
                    self.reserve(Self::GROWTH_CHUNK, 0, 0, 0);
                }
                self.origin.x -= 1;
                self.width += 1;
                self.min_offset.x -= 1;
            }
            Direction::Right => {
                if self.origin.x as usize + self.width == self.stride {
                    self.reserve(0, Self::GROWTH_CHUNK, 0, 0);
                }
                self.width += 1;
                self.max_offset.x += 1;
            }
            Direction::Down => {
                if self.origin.y as usize + self.height == self.arena_rows {
                    self.reserve(0, 0, 0, Self::GROWTH_CHUNK);
                }
                self.height += 1;
                self.max_offset.y += 1;
            }
        }

        log::trace!(
            "Grid grew {:?}: {}x{}, min_offset=({}, {}), max_offset=({}, {})",
            direction,
            self.width,
            self.height,
            self.min_offset.x,
            self.min_offset.y,
            self.max_offset.x,
            self.max_offset.y
        );

        GrowthEvent::for_direction(direction)
    }

    /// Reallocate the arena with extra slack on each side.
    fn reserve(&mut self, left: usize, right: usize, up: usize, down: usize) {
        let new_stride = self.stride + left + right;
        let new_rows = self.arena_rows + up + down;
        let new_size = new_stride * new_rows;

        let mut new_colors = vec![CellColor::Empty as u8; new_size];
        let mut new_visited = vec![0u8; new_size];

        for y in 0..self.arena_rows {
            let old_row_start = y * self.stride;
            let new_row_start = (y + up) * new_stride + left;

            new_colors[new_row_start..new_row_start + self.stride]
                .copy_from_slice(&self.colors[old_row_start..old_row_start + self.stride]);
            new_visited[new_row_start..new_row_start + self.stride]
                .copy_from_slice(&self.visited[old_row_start..old_row_start + self.stride]);
        }

        self.colors = new_colors;
        self.visited = new_visited;
        self.stride = new_stride;
        self.arena_rows = new_rows;
        self.origin = GridCoord::new(self.origin.x + left as i32, self.origin.y + up as i32);
    }

    // === Iterators ===

    /// Iterate over all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, Cell)> + '_ {
        let width = self.width;
        (0..self.cell_count()).map(move |i| {
            let coord = GridCoord::new((i % width) as i32, (i / width) as i32);
            // Always in bounds: i < width * height
            let arena = (coord.y + self.origin.y) as usize * self.stride
                + (coord.x + self.origin.x) as usize;
            (
                coord,
                Cell {
                    color: CellColor::from_u8(self.colors[arena]),
                    visited: self.visited[arena] != 0,
                },
            )
        })
    }

    /// All cells, row-major, without arena slack.
    pub fn cells(&self) -> Vec<Cell> {
        self.iter().map(|(_, cell)| cell).collect()
    }

    /// Count cells by palette tag.
    pub fn count_by_color(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for (_, cell) in self.iter() {
            counts.add(cell.color);
            if cell.visited {
                counts.visited += 1;
            }
        }
        counts
    }

    /// Character map of the grid, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (coord, cell) in self.iter() {
            if coord.x == 0 && coord.y > 0 {
                out.push('\n');
            }
            out.push(cell.color.as_char());
        }
        out
    }
}

impl PartialEq for GridStorage {
    /// Grids are equal when their frames and logical cells match; arena
    /// slack is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.offset == other.offset
            && self.min_offset == other.min_offset
            && self.max_offset == other.max_offset
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}
