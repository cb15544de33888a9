//! Boundary inference from blocked movement.
//!
//! When the sensor reports that the last movement was blocked, the tile the
//! agent was facing is a wall candidate. The candidate is only accepted if it
//! was rendered as Frontier in the previous frame: a tile seen before but
//! never explored. Tiles in any other state give no wall for that frame.

use crate::core::{Action, CellColor, GridCoord};
use crate::grid::GridConfig;
use crate::grid::storage::GridStorage;

/// Grid index of the tile in front of the agent for the attempted action.
///
/// Returns None for actions that do not move (interact, or no key).
pub fn facing_tile(view_top: GridCoord, config: &GridConfig, action: Option<Action>) -> Option<GridCoord> {
    let direction = action?.direction()?;
    Some(view_top + config.facing_tile(direction))
}

/// Infer the wall tile for a blocked movement.
///
/// # Arguments
/// * `previous` - Grid as rendered at the end of the previous step
/// * `view_top` - Grid index of the viewport's top-left tile
/// * `config` - Viewport geometry
/// * `action` - Action attempted this frame
///
/// # Returns
/// Grid index of the inferred wall, if any
pub fn infer_boundary(
    previous: &GridStorage,
    view_top: GridCoord,
    config: &GridConfig,
    action: Option<Action>,
) -> Option<GridCoord> {
    let candidate = facing_tile(view_top, config, action)?;

    if previous.get_color(candidate) == CellColor::Frontier {
        log::debug!("Blocked toward {:?}: wall at ({}, {})", action, candidate.x, candidate.y);
        Some(candidate)
    } else {
        log::trace!(
            "Blocked toward {:?}: tile ({}, {}) not a frontier, no wall",
            action,
            candidate.x,
            candidate.y
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::frontier_update::mark_frontiers;

    fn explored_storage() -> GridStorage {
        let mut storage = GridStorage::new(&GridConfig::default());
        mark_frontiers(&mut storage, GridCoord::new(0, 0), 15, 11);
        storage
    }

    #[test]
    fn test_blocked_up_on_frontier() {
        let storage = explored_storage();
        let config = GridConfig::default();

        let wall = infer_boundary(&storage, GridCoord::new(0, 0), &config, Some(Action::Up));

        assert_eq!(wall, Some(GridCoord::new(7, 4)));
    }

    #[test]
    fn test_each_direction_offset() {
        let storage = explored_storage();
        let config = GridConfig::default();
        let top = GridCoord::new(0, 0);

        assert_eq!(infer_boundary(&storage, top, &config, Some(Action::Right)), Some(GridCoord::new(8, 5)));
        assert_eq!(infer_boundary(&storage, top, &config, Some(Action::Down)), Some(GridCoord::new(7, 6)));
        assert_eq!(infer_boundary(&storage, top, &config, Some(Action::Left)), Some(GridCoord::new(6, 5)));
    }

    #[test]
    fn test_non_frontier_tile_gives_no_wall() {
        let mut storage = explored_storage();
        let config = GridConfig::default();
        storage.stamp(GridCoord::new(7, 4), CellColor::House);

        assert_eq!(
            infer_boundary(&storage, GridCoord::new(0, 0), &config, Some(Action::Up)),
            None
        );

        // Never observed at all
        let unknown = GridStorage::new(&config);
        assert_eq!(
            infer_boundary(&unknown, GridCoord::new(0, 0), &config, Some(Action::Up)),
            None
        );
    }

    #[test]
    fn test_non_movement_is_noop() {
        let storage = explored_storage();
        let config = GridConfig::default();

        assert_eq!(infer_boundary(&storage, GridCoord::new(0, 0), &config, None), None);
        assert_eq!(
            infer_boundary(&storage, GridCoord::new(0, 0), &config, Some(Action::Interact)),
            None
        );
    }
}
