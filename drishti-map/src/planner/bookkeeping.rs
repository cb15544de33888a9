//! Frontier bookkeeping shared by planners.

use std::collections::HashSet;

use crate::core::{GridCoord, TileBox};
use crate::grid::GrowthEvent;

/// Consecutive non-collision steps needed before the collision streak resets.
pub const MOVEMENTS_TO_RESET_COLLISIONS: u32 = 2;

/// Frontier state a planner keeps in grid indices, plus movement streaks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontierBook {
    /// Current exploration target, if any
    pub next_frontier: Option<TileBox>,
    /// Frontier tiles previously rejected as unreachable
    pub unreachable_frontiers: HashSet<GridCoord>,
    /// Steps completed without collision since the last collision
    pub consecutive_movements: u32,
    /// Collisions since the collision streak was last reset
    pub consecutive_collisions: u32,
}

impl FrontierBook {
    /// Create empty bookkeeping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift every stored index by the growth event's translation.
    pub fn apply_growth(&mut self, event: &GrowthEvent) {
        if !event.moves_origin() {
            return;
        }
        if let Some(frontier) = self.next_frontier.as_mut() {
            *frontier = event.apply_box(*frontier);
        }
        self.unreachable_frontiers = self
            .unreachable_frontiers
            .drain()
            .map(|coord| event.apply(coord))
            .collect();
    }

    /// Count a blocked movement.
    pub fn record_collision(&mut self) {
        self.consecutive_collisions += 1;
        self.consecutive_movements = 0;
    }

    /// Count a step without collision.
    pub fn record_movement(&mut self) {
        self.consecutive_movements += 1;
        if self.consecutive_movements >= MOVEMENTS_TO_RESET_COLLISIONS {
            self.consecutive_collisions = 0;
        }
    }

    /// Reject a frontier tile. Returns false if it was already rejected.
    pub fn mark_unreachable(&mut self, coord: GridCoord) -> bool {
        if self.next_frontier.is_some_and(|f| f.contains(coord)) {
            self.next_frontier = None;
        }
        self.unreachable_frontiers.insert(coord)
    }

    /// Was this tile rejected before?
    pub fn is_unreachable(&self, coord: GridCoord) -> bool {
        self.unreachable_frontiers.contains(&coord)
    }
}
