//! Frontier marking around the current viewport.
//!
//! Every cell strictly inside the viewport (its outer ring excluded) is
//! marked visited. Visited cells that are still Empty, inside the viewport
//! or not, are painted Frontier. Cells never visited stay Empty.
//!
//! The Frontier tag on previously visited tiles is what lets the collision
//! inferencer tell "observed but unexplored" tiles from true unknowns.

use crate::core::{CellColor, GridCoord, TileBox};
use crate::grid::storage::GridStorage;

/// Result of a frontier pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrontierUpdate {
    /// Cells visited for the first time in this pass
    pub newly_visited: usize,
    /// Cells painted Frontier in this pass
    pub painted: usize,
}

/// Interior of the viewport whose top-left grid index is `view_top`.
pub fn viewport_interior(view_top: GridCoord, viewport_cols: i32, viewport_rows: i32) -> TileBox {
    TileBox::new(
        view_top.x + 1,
        view_top.y + 1,
        view_top.x + viewport_cols - 2,
        view_top.y + viewport_rows - 2,
    )
}

/// Mark visited cells and paint frontiers.
///
/// `view_top` is the grid index of the viewport's top-left tile.
pub fn mark_frontiers(
    storage: &mut GridStorage,
    view_top: GridCoord,
    viewport_cols: i32,
    viewport_rows: i32,
) -> FrontierUpdate {
    let mut update = FrontierUpdate::default();
    let interior = viewport_interior(view_top, viewport_cols, viewport_rows);

    for y in 0..storage.height() as i32 {
        for x in 0..storage.width() as i32 {
            let coord = GridCoord::new(x, y);
            let inside = interior.contains(coord);

            let Some(mut cell) = storage.get_mut(coord) else {
                continue;
            };

            if inside && !cell.is_visited() {
                cell.mark_visited();
                update.newly_visited += 1;
            }

            if cell.is_visited() && cell.get_color() == CellColor::Empty {
                cell.stamp(CellColor::Frontier);
                update.painted += 1;
            }
        }
    }

    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::grid::GridConfig;

    fn create_test_storage() -> GridStorage {
        GridStorage::new(&GridConfig::default())
    }

    #[test]
    fn test_first_pass_marks_interior_only() {
        let mut storage = create_test_storage();

        let update = mark_frontiers(&mut storage, GridCoord::new(0, 0), 15, 11);

        assert_eq!(update.newly_visited, 13 * 9);
        assert_eq!(update.painted, 13 * 9);
        for (coord, cell) in storage.iter() {
            let interior = coord.x > 0 && coord.x < 14 && coord.y > 0 && coord.y < 10;
            assert_eq!(cell.visited, interior, "visited mismatch at {:?}", coord);
            let expected = if interior {
                CellColor::Frontier
            } else {
                CellColor::Empty
            };
            assert_eq!(cell.color, expected, "color mismatch at {:?}", coord);
        }
    }

    #[test]
    fn test_rendered_cells_are_not_painted() {
        let mut storage = create_test_storage();
        storage.stamp(GridCoord::new(7, 5), CellColor::Agent);

        mark_frontiers(&mut storage, GridCoord::new(0, 0), 15, 11);

        assert_eq!(storage.get_color(GridCoord::new(7, 5)), CellColor::Agent);
        assert!(storage.is_visited(GridCoord::new(7, 5)));
    }

    #[test]
    fn test_visited_cells_outside_view_stay_frontier() {
        let mut storage = create_test_storage();
        mark_frontiers(&mut storage, GridCoord::new(0, 0), 15, 11);

        // Move the view right and re-render from scratch
        storage.shift_view(Direction::Right);
        storage.clear_colors();
        let view_top = storage.view_origin();
        mark_frontiers(&mut storage, view_top, 15, 11);

        // Column 1 left the interior but was visited before
        assert!(storage.is_visited(GridCoord::new(1, 5)));
        assert_eq!(storage.get_color(GridCoord::new(1, 5)), CellColor::Frontier);
        // Column 0 was never visited
        assert_eq!(storage.get_color(GridCoord::new(0, 5)), CellColor::Empty);
        // Column 14 entered the interior
        assert!(storage.is_visited(GridCoord::new(14, 5)));
    }

    #[test]
    fn test_visited_is_monotone() {
        let mut storage = create_test_storage();
        mark_frontiers(&mut storage, GridCoord::new(0, 0), 15, 11);
        let before: Vec<_> = storage.iter().filter(|(_, c)| c.visited).map(|(p, _)| p).collect();

        for direction in [Direction::Down, Direction::Down, Direction::Left] {
            storage.shift_view(direction);
            let view_top = storage.view_origin();
            mark_frontiers(&mut storage, view_top, 15, 11);
        }

        // Earlier coordinates shifted one column right after the left growth
        for coord in before {
            assert!(storage.is_visited(coord + GridCoord::new(1, 0)));
        }
    }
}
