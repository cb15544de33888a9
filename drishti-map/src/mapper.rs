//! Per-frame map controller.
//!
//! [`LiveMap::draw_map`] advances the map by exactly one frame:
//!
//! ```text
//!   battle pending, position unchanged ──► BattleCollisionPre   (nothing touched)
//!   movement blocked ──► infer wall ─► mark frontiers ──► NormalCollision
//!   otherwise ──► shift view / grow ─► project ─► ingest ─► render
//!                 ─► agent ─► mark frontiers ─► battle re-check
//!                 ──► BattleCollisionPost | BattleCollisionPre | NoCollision
//! ```
//!
//! Growth events are forwarded to the object tracker and the planner before
//! the frame's detections are projected, so every stored index refers to the
//! current grid by the time new boxes arrive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MapCoverageStats;
use crate::config::DrishtiConfig;
use crate::core::{Action, CellColor, Detection, GridCoord, SensorSnapshot};
use crate::grid::collision_update::infer_boundary;
use crate::grid::frontier_update::mark_frontiers;
use crate::grid::{GridConfig, GridStorage};
use crate::planner::{ExplorationPlanner, IdlePlanner};
use crate::projection::{DetectionFilter, TileProjector};
use crate::tracking::{ObjectTracker, WorldObject};

/// Outcome of one [`LiveMap::draw_map`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStatus {
    /// A battle started before the movement completed; the grid was not touched
    BattleCollisionPre,
    /// A battle started after the movement completed; the grid was updated
    BattleCollisionPost,
    /// The movement was blocked
    NormalCollision,
    /// Regular step
    NoCollision,
}

impl MapStatus {
    /// Status tag as consumed by planners and renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapStatus::BattleCollisionPre => "battle_collision_pre",
            MapStatus::BattleCollisionPost => "battle_collision_post",
            MapStatus::NormalCollision => "normal_collision",
            MapStatus::NoCollision => "no_collision",
        }
    }

    /// Did a battle interrupt this step?
    pub fn is_battle(&self) -> bool {
        matches!(self, MapStatus::BattleCollisionPre | MapStatus::BattleCollisionPost)
    }
}

impl fmt::Display for MapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of the grid handed to renderers and planners.
#[derive(Clone, Copy, Debug)]
pub struct MapSnapshot<'a> {
    grid: &'a GridStorage,
}

impl<'a> MapSnapshot<'a> {
    /// Wrap a grid.
    pub fn new(grid: &'a GridStorage) -> Self {
        Self { grid }
    }

    /// Underlying grid.
    pub fn grid(&self) -> &'a GridStorage {
        self.grid
    }

    /// Grid width in tiles.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid height in tiles.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Palette tag at a grid index (Empty if out of bounds).
    pub fn color_at(&self, coord: GridCoord) -> CellColor {
        self.grid.get_color(coord)
    }

    /// Visited flag at a grid index.
    pub fn is_visited(&self, coord: GridCoord) -> bool {
        self.grid.is_visited(coord)
    }

    /// Row-major buffer, four bytes per cell: R, G, B, visited (0 or 1).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.grid.cell_count() * 4);
        for (_, cell) in self.grid.iter() {
            buf.extend_from_slice(&cell.rgba());
        }
        buf
    }

    /// Character map, one line per row.
    pub fn to_ascii(&self) -> String {
        self.grid.to_ascii()
    }
}

/// Incremental tile map built from viewport detections and movement outcomes.
///
/// Generic over the exploration planner so planner state is updated through
/// [`ExplorationPlanner`] calls only.
pub struct LiveMap<P: ExplorationPlanner = IdlePlanner> {
    config: GridConfig,
    projector: TileProjector,
    filter: DetectionFilter,

    grid: GridStorage,
    /// Grid as it was at the end of the last non-short-circuited step
    previous_grid: GridStorage,
    previous_sensor: SensorSnapshot,

    tracker: ObjectTracker,
    /// Wall candidates found in the current collision step
    boundary_points: Vec<GridCoord>,

    planner: P,
    move_list: Vec<Action>,
}

impl LiveMap<IdlePlanner> {
    /// Create a map without an active planner.
    pub fn new(config: GridConfig) -> Self {
        Self::with_planner(config, IdlePlanner::new())
    }

    /// Create a map from a loaded configuration file.
    pub fn from_config(config: &DrishtiConfig) -> Self {
        Self::new(config.to_grid_config()).with_detection_filter(config.to_detection_filter())
    }
}

impl<P: ExplorationPlanner> LiveMap<P> {
    /// Create a map driving the given planner.
    pub fn with_planner(config: GridConfig, planner: P) -> Self {
        let grid = GridStorage::new(&config);
        Self {
            projector: TileProjector::new(&config),
            filter: DetectionFilter::default(),
            previous_grid: grid.clone(),
            grid,
            previous_sensor: SensorSnapshot::default(),
            tracker: ObjectTracker::new(),
            boundary_points: Vec::new(),
            planner,
            move_list: Vec::new(),
            config,
        }
    }

    /// Set the detection pre-filter.
    pub fn with_detection_filter(mut self, filter: DetectionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the sensor reading taken before the first frame.
    pub fn with_initial_sensor(mut self, sensor: SensorSnapshot) -> Self {
        self.previous_sensor = sensor;
        self
    }

    // === Accessors ===

    /// Grid geometry.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current grid.
    pub fn grid(&self) -> &GridStorage {
        &self.grid
    }

    /// Read-only snapshot of the current grid.
    pub fn snapshot(&self) -> MapSnapshot<'_> {
        MapSnapshot::new(&self.grid)
    }

    /// Grid at the end of the last step that reached the collision or
    /// normal branch.
    pub fn previous_grid(&self) -> &GridStorage {
        &self.previous_grid
    }

    /// Sensor reading from the last step that reached the collision or
    /// normal branch.
    pub fn previous_sensor(&self) -> &SensorSnapshot {
        &self.previous_sensor
    }

    /// All tracked objects, walls included.
    pub fn objects(&self) -> &[WorldObject] {
        self.tracker.objects()
    }

    /// Wall candidates from the latest collision step.
    pub fn boundary_points(&self) -> &[GridCoord] {
        &self.boundary_points
    }

    /// The attached planner.
    pub fn planner(&self) -> &P {
        &self.planner
    }

    /// Mutable access to the attached planner.
    pub fn planner_mut(&mut self) -> &mut P {
        &mut self.planner
    }

    /// Grid index of the agent's tile.
    pub fn agent_coord(&self) -> GridCoord {
        self.grid.view_origin() + self.config.agent_tile()
    }

    // === Frame Processing ===

    /// Advance the map by one frame.
    ///
    /// # Arguments
    /// * `key` - Action attempted since the last frame, if any
    /// * `detections` - Detector output for the frame, highest score first
    /// * `sensor` - Sensor reading for the frame
    ///
    /// # Returns
    /// Snapshot of the grid and the step status
    pub fn draw_map(
        &mut self,
        key: Option<Action>,
        detections: &[Detection],
        sensor: SensorSnapshot,
    ) -> (MapSnapshot<'_>, MapStatus) {
        let moved = sensor.moved_since(&self.previous_sensor);

        if sensor.battle_pending() {
            if !moved {
                log::debug!("Battle before movement completed, grid untouched");
                return (self.snapshot(), MapStatus::BattleCollisionPre);
            }
            log::debug!("Battle after movement completed, updating grid first");
        } else if sensor.movement_blocked {
            self.process_collision(key);
            self.finish_step(sensor);
            return (self.snapshot(), MapStatus::NormalCollision);
        }

        self.process_movement(key, detections);
        self.finish_step(sensor);

        let status = if !sensor.battle_pending() {
            MapStatus::NoCollision
        } else if key.is_some() || moved {
            MapStatus::BattleCollisionPost
        } else {
            MapStatus::BattleCollisionPre
        };
        log::trace!("Step finished: {}", status);
        (self.snapshot(), status)
    }

    /// Ask the planner for the next moves from the current view.
    pub fn get_movelist(&mut self) -> &[Action] {
        let view_origin = self.grid.view_origin();
        self.move_list = self.planner.next_moves(view_origin, &self.grid);
        &self.move_list
    }

    /// Per-tag counts and visited share of the current grid.
    pub fn coverage_stats(&self) -> MapCoverageStats {
        let counts = self.grid.count_by_color();
        let total = counts.total().max(1);
        MapCoverageStats {
            width: self.grid.width(),
            height: self.grid.height(),
            counts,
            objects: self.tracker.len(),
            visited_fraction: counts.visited as f32 / total as f32,
        }
    }

    fn process_collision(&mut self, key: Option<Action>) {
        self.boundary_points.clear();
        self.planner.on_collision();

        let view_origin = self.grid.view_origin();
        if let Some(wall) = infer_boundary(&self.previous_grid, view_origin, &self.config, key) {
            self.boundary_points.push(wall);
        }

        for &wall in &self.boundary_points {
            self.tracker.add_wall(wall);
            self.grid.stamp(wall, CellColor::Wall);
        }

        mark_frontiers(&mut self.grid, view_origin, self.config.cols(), self.config.rows());
    }

    fn process_movement(&mut self, key: Option<Action>, detections: &[Detection]) {
        self.planner.on_movement();
        self.grid.clear_colors();

        if let Some(direction) = key.and_then(Action::direction)
            && let Some(event) = self.grid.shift_view(direction)
        {
            log::debug!(
                "Grid grew {:?} to {}x{}",
                event.direction,
                self.grid.width(),
                self.grid.height()
            );
            self.tracker.translate(&event);
            self.planner.on_grid_growth(&event);
        }

        let view_origin = self.grid.view_origin();
        let tiles = self
            .projector
            .project(self.filter.apply(detections), view_origin);
        self.tracker.ingest(tiles);
        self.tracker.render(&mut self.grid);

        self.grid.stamp(view_origin + self.config.agent_tile(), CellColor::Agent);
        mark_frontiers(&mut self.grid, view_origin, self.config.cols(), self.config.rows());
    }

    fn finish_step(&mut self, sensor: SensorSnapshot) {
        self.previous_grid.clone_from(&self.grid);
        self.previous_sensor = sensor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ObjectLabel, PixelBox};

    fn sensor(x: u32, y: u32) -> SensorSnapshot {
        SensorSnapshot {
            pos_x: x,
            pos_y: y,
            ..SensorSnapshot::default()
        }
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(MapStatus::BattleCollisionPre.as_str(), "battle_collision_pre");
        assert_eq!(MapStatus::BattleCollisionPost.to_string(), "battle_collision_post");
        assert_eq!(MapStatus::NormalCollision.as_str(), "normal_collision");
        assert_eq!(MapStatus::NoCollision.as_str(), "no_collision");
        assert!(MapStatus::BattleCollisionPre.is_battle());
        assert!(!MapStatus::NoCollision.is_battle());
    }

    #[test]
    fn test_first_frame_stamps_agent() {
        let mut map = LiveMap::new(GridConfig::default());

        let (snapshot, status) = map.draw_map(None, &[], sensor(0, 0));

        assert_eq!(status, MapStatus::NoCollision);
        assert_eq!(snapshot.color_at(GridCoord::new(7, 5)), CellColor::Agent);
        assert_eq!(map.agent_coord(), GridCoord::new(7, 5));
    }

    #[test]
    fn test_rgba_export() {
        let mut map = LiveMap::new(GridConfig::default());
        let (snapshot, _) = map.draw_map(None, &[], sensor(0, 0));

        let rgba = snapshot.to_rgba();

        assert_eq!(rgba.len(), 15 * 11 * 4);
        // Cell (1, 1) is visited frontier
        let i = (15 + 1) * 4;
        assert_eq!(&rgba[i..i + 4], &[255, 255, 255, 1]);
        // Cell (0, 0) is untouched
        assert_eq!(&rgba[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_detection_filter_applies() {
        let filter = DetectionFilter {
            min_score: 0.5,
            suppress_npc: false,
        };
        let mut map = LiveMap::new(GridConfig::default()).with_detection_filter(filter);
        let detections = [
            Detection::new(ObjectLabel::House, PixelBox::new(0.0, 120.0, 96.0, 216.0), 0.9),
            Detection::new(ObjectLabel::Gym, PixelBox::new(480.0, 264.0, 576.0, 360.0), 0.3),
        ];

        map.draw_map(None, &detections, sensor(0, 0));

        assert_eq!(map.objects().len(), 1);
        assert_eq!(map.objects()[0].label, ObjectLabel::House);
    }

    #[test]
    fn test_coverage_stats() {
        let mut map = LiveMap::new(GridConfig::default());
        map.draw_map(None, &[], sensor(0, 0));

        let stats = map.coverage_stats();

        assert_eq!(stats.width, 15);
        assert_eq!(stats.height, 11);
        assert_eq!(stats.counts.visited, 13 * 9);
        assert_eq!(stats.counts.agent, 1);
        assert_eq!(stats.counts.frontier, 13 * 9 - 1);
        assert_eq!(stats.objects, 0);
    }

    #[test]
    fn test_idle_planner_has_no_moves() {
        let mut map = LiveMap::new(GridConfig::default());
        map.draw_map(None, &[], sensor(0, 0));
        assert!(map.get_movelist().is_empty());
    }
}
