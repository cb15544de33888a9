//! Seam between the mapper and an exploration planner.

use crate::core::{Action, GridCoord};
use crate::grid::{GridStorage, GrowthEvent};

/// Exploration planner driven by the mapper.
///
/// The mapper owns the grid; the planner only reads it when asked for moves.
/// Any grid indices a planner stores must be translated in
/// [`on_grid_growth`](Self::on_grid_growth), which the mapper calls in the
/// same step the grid grows and before anything else reads those indices.
///
/// # Example
///
/// ```rust,ignore
/// use drishti_map::{LiveMap, GridConfig};
/// use drishti_map::planner::IdlePlanner;
///
/// let mut map = LiveMap::with_planner(GridConfig::default(), IdlePlanner::new());
/// let moves = map.get_movelist();
/// ```
pub trait ExplorationPlanner: Send {
    /// Ordered actions toward the next exploration target.
    ///
    /// # Arguments
    /// * `view_origin` - Grid index of the viewport's top-left tile
    /// * `grid` - Current grid, read-only
    fn next_moves(&mut self, view_origin: GridCoord, grid: &GridStorage) -> Vec<Action>;

    /// Translate stored grid indices after the grid grew.
    fn on_grid_growth(&mut self, event: &GrowthEvent);

    /// The last movement attempt was blocked.
    fn on_collision(&mut self);

    /// A step completed without a collision.
    fn on_movement(&mut self);
}
