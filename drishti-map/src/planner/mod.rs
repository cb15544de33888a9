//! Exploration planner interface.
//!
//! Frontier selection and path finding live outside this crate. The mapper
//! talks to them through [`ExplorationPlanner`], forwarding growth events
//! and collision/movement outcomes so planner state stays aligned with the
//! grid.
//!
//! - [`ExplorationPlanner`]: The planner seam
//! - [`FrontierBook`]: Target, rejected tiles and movement streaks
//! - [`IdlePlanner`]: Default planner that only keeps bookkeeping

mod bookkeeping;
mod idle;
mod traits;

pub use bookkeeping::{FrontierBook, MOVEMENTS_TO_RESET_COLLISIONS};
pub use idle::IdlePlanner;
pub use traits::ExplorationPlanner;
