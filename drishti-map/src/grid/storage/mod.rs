//! Grid storage for the tile map.
//!
//! Uses Structure-of-Arrays (SoA) layout inside an over-allocated arena so
//! that growth toward any edge rarely copies the whole grid.
//!
//! ## Memory Layout
//!
//! ```text
//!            arena (stride x arena_rows)
//!   ┌──────────────────────────────────────┐
//!   │ slack                                │
//!   │      origin ┌──────────────────┐     │
//!   │             │ logical grid     │     │
//!   │             │ (width x height) │     │
//!   │             └──────────────────┘     │
//!   │                                slack │
//!   └──────────────────────────────────────┘
//! ```
//!
//! Growing up or left moves `origin` into the slack; growing right or down
//! extends `width`/`height`. When a side has no slack left the arena is
//! reallocated with a fixed chunk of extra cells on that side.
//!
//! ## Key Types
//!
//! - [`GridStorage`]: Main storage with frame bookkeeping and growth
//! - [`CellMut`]: Mutable reference to a single cell's fields
//! - [`GrowthEvent`]: Translation every stored index must follow after growth
//! - [`CellCounts`]: Statistics for each palette tag

mod core;
mod types;

pub use self::core::GridStorage;
pub use types::{CellCounts, CellMut, GrowthEvent};
