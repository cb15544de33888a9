//! Planner that never moves.

use crate::core::{Action, GridCoord};
use crate::grid::{GridStorage, GrowthEvent};

use super::bookkeeping::FrontierBook;
use super::traits::ExplorationPlanner;

/// Keeps frontier bookkeeping consistent but never proposes a move.
///
/// Used when the mapper runs without an attached planner, e.g. while
/// replaying recorded frames.
#[derive(Clone, Debug, Default)]
pub struct IdlePlanner {
    book: FrontierBook,
}

impl IdlePlanner {
    /// Create an idle planner with empty bookkeeping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frontier bookkeeping.
    pub fn book(&self) -> &FrontierBook {
        &self.book
    }

    /// Mutable frontier bookkeeping, for seeding targets.
    pub fn book_mut(&mut self) -> &mut FrontierBook {
        &mut self.book
    }
}

impl ExplorationPlanner for IdlePlanner {
    fn next_moves(&mut self, _view_origin: GridCoord, _grid: &GridStorage) -> Vec<Action> {
        Vec::new()
    }

    fn on_grid_growth(&mut self, event: &GrowthEvent) {
        self.book.apply_growth(event);
    }

    fn on_collision(&mut self) {
        self.book.record_collision();
    }

    fn on_movement(&mut self) {
        self.book.record_movement();
    }
}
