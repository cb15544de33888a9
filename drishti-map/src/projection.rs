//! Detector pixel boxes to world tile boxes.
//!
//! Detector boxes are in pixel space of the frame after it was letterboxed
//! to a square. Each edge is snapped to the nearest tile boundary on its own:
//!
//! ```text
//!   x edges:  q = x / tile           floor(q) if |x - tile*floor(q)| < |x - tile*ceil(q)|
//!   y edges:  v = y - padding        floor(q) if |v + tile/2 - tile*floor(q)| < |v - tile*ceil(q)|
//!             q = v / tile
//! ```
//!
//! The half-tile bias on the vertical axis compensates for sprites whose box
//! starts above the tile they stand on. Right and bottom edges are boundary
//! indices, so one is subtracted to get the last covered tile. Local viewport
//! tiles are finally shifted by the viewport's grid index.

use serde::{Deserialize, Serialize};

use crate::core::{Detection, GridCoord, ObjectLabel, PixelBox, TileBox};
use crate::grid::GridConfig;

/// Detection pre-filter applied before projection.
///
/// Detections arrive sorted by descending score, so filtering stops at the
/// first detection below `min_score`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionFilter {
    /// Minimum detector score to keep
    pub min_score: f32,
    /// Drop NPC detections entirely
    pub suppress_npc: bool,
}

impl Default for DetectionFilter {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            suppress_npc: false,
        }
    }
}

impl DetectionFilter {
    /// Filter a score-sorted detection list.
    pub fn apply<'a>(&self, detections: &'a [Detection]) -> impl Iterator<Item = &'a Detection> {
        let min_score = self.min_score;
        let suppress_npc = self.suppress_npc;
        detections
            .iter()
            .take_while(move |d| d.score >= min_score)
            .filter(move |d| !(suppress_npc && d.label == ObjectLabel::Npc))
    }
}

/// Pixel-to-tile projection for one viewport geometry.
#[derive(Clone, Debug)]
pub struct TileProjector {
    tile_size: f32,
    padding: f32,
    viewport: TileBox,
    agent_tile: GridCoord,
}

impl TileProjector {
    /// Create a projector from the grid configuration.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            tile_size: config.tile_size(),
            padding: config.effective_padding(),
            viewport: config.viewport_box(),
            agent_tile: config.agent_tile(),
        }
    }

    /// Tile edge length in pixels.
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Snap a horizontal pixel edge to a tile boundary index.
    pub fn quantize_x(&self, x: f32) -> i32 {
        let q = x / self.tile_size;
        let floor = q.floor();
        let ceil = q.ceil();
        if (x - self.tile_size * floor).abs() < (x - self.tile_size * ceil).abs() {
            floor as i32
        } else {
            ceil as i32
        }
    }

    /// Snap a vertical pixel edge to a tile boundary index.
    pub fn quantize_y(&self, y: f32) -> i32 {
        let v = y - self.padding;
        let q = v / self.tile_size;
        let floor = q.floor();
        let ceil = q.ceil();
        if (v + self.tile_size / 2.0 - self.tile_size * floor).abs()
            < (v - self.tile_size * ceil).abs()
        {
            floor as i32
        } else {
            ceil as i32
        }
    }

    /// Convert a pixel box to an inclusive tile box in viewport-local tiles.
    ///
    /// Boxes thinner than a tile can snap both edges to the same boundary;
    /// such boxes are widened to the single tile at their near edge.
    pub fn pixel_box_to_tiles(&self, pixel_box: &PixelBox) -> TileBox {
        let x1 = self.quantize_x(pixel_box.x1);
        let y1 = self.quantize_y(pixel_box.y1);
        let x2 = self.quantize_x(pixel_box.x2) - 1;
        let y2 = self.quantize_y(pixel_box.y2) - 1;
        TileBox::new(x1, y1, x2.max(x1), y2.max(y1))
    }

    /// Shift a viewport-local box to grid indices.
    #[inline]
    pub fn local_to_grid(&self, local: TileBox, view_origin: GridCoord) -> TileBox {
        local.translated(view_origin)
    }

    /// Project a frame's detections into grid indices.
    ///
    /// Boxes are clipped to the viewport (boxes entirely outside it are
    /// dropped), and NPC-like boxes whose bottom-right tile is the agent's
    /// tile are discarded as the agent's own sprite.
    pub fn project<'a>(
        &self,
        detections: impl IntoIterator<Item = &'a Detection>,
        view_origin: GridCoord,
    ) -> Vec<(ObjectLabel, TileBox)> {
        let agent = view_origin + self.agent_tile;
        let mut tiles = Vec::new();

        for detection in detections {
            let local = self.pixel_box_to_tiles(&detection.pixel_box);

            let Some(clipped) = local.clamped_to(&self.viewport) else {
                log::debug!(
                    "Dropping {:?} outside viewport: local {:?}",
                    detection.label,
                    local
                );
                continue;
            };
            if clipped != local {
                log::trace!("Clipped {:?} from {:?} to {:?}", detection.label, local, clipped);
            }

            let grid_box = self.local_to_grid(clipped, view_origin);

            if detection.label.is_npc_like() && grid_box.bottom_right() == agent {
                log::trace!("Discarding agent sprite detected as {:?}", detection.label);
                continue;
            }

            tiles.push((detection.label, grid_box));
        }

        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> TileProjector {
        TileProjector::new(&GridConfig::default())
    }

    /// Pixel box covering tiles (x1, y1)..=(x2, y2) exactly
    fn aligned(x1: i32, y1: i32, x2: i32, y2: i32) -> PixelBox {
        PixelBox::new(
            x1 as f32 * 48.0,
            120.0 + y1 as f32 * 48.0,
            (x2 + 1) as f32 * 48.0,
            120.0 + (y2 + 1) as f32 * 48.0,
        )
    }

    #[test]
    fn test_aligned_box() {
        let p = projector();
        assert_eq!(p.pixel_box_to_tiles(&aligned(3, 2, 4, 3)), TileBox::new(3, 2, 4, 3));
    }

    #[test]
    fn test_x_rounds_to_nearest() {
        let p = projector();
        assert_eq!(p.quantize_x(100.0), 2); // 2.08 tiles
        assert_eq!(p.quantize_x(130.0), 3); // 2.71 tiles
        // Exact midpoint goes to ceil
        assert_eq!(p.quantize_x(72.0), 2);
    }

    #[test]
    fn test_y_uses_padding_and_bias() {
        let p = projector();
        assert_eq!(p.quantize_y(120.0 + 96.0), 2);
        assert_eq!(p.quantize_y(120.0 + 100.0), 2);
        // Bias pulls toward the lower boundary earlier than plain rounding
        assert_eq!(p.quantize_y(120.0 + 115.0), 3);
        assert_eq!(p.quantize_y(120.0 + 130.0), 3);
    }

    #[test]
    fn test_thin_box_is_widened() {
        let p = projector();
        let b = p.pixel_box_to_tiles(&PixelBox::new(96.0, 216.0, 100.0, 220.0));
        assert_eq!(b, TileBox::new(2, 2, 2, 2));
    }

    #[test]
    fn test_project_translates_to_grid() {
        let p = projector();
        let detections = [Detection::new(ObjectLabel::House, aligned(1, 1, 3, 2), 0.9)];

        let tiles = p.project(&detections, GridCoord::new(4, 2));

        assert_eq!(tiles, vec![(ObjectLabel::House, TileBox::new(5, 3, 7, 4))]);
    }

    #[test]
    fn test_agent_sprite_discarded() {
        let p = projector();
        let detections = [
            Detection::new(ObjectLabel::Npc, aligned(7, 5, 7, 5), 0.9),
            Detection::new(ObjectLabel::Exit, aligned(7, 5, 7, 5), 0.9),
        ];

        let tiles = p.project(&detections, GridCoord::new(2, 2));

        assert_eq!(tiles, vec![(ObjectLabel::Exit, TileBox::new(9, 7, 9, 7))]);
    }

    #[test]
    fn test_box_in_padding_is_clipped() {
        let p = projector();
        // Bottom edge reaches into the lower letterbox band
        let detections = [Detection::new(ObjectLabel::Gym, aligned(2, 9, 4, 12), 0.8)];

        let tiles = p.project(&detections, GridCoord::new(0, 0));

        assert_eq!(tiles, vec![(ObjectLabel::Gym, TileBox::new(2, 9, 4, 10))]);
    }

    #[test]
    fn test_box_outside_viewport_dropped() {
        let p = projector();
        let detections = [Detection::new(ObjectLabel::Gym, aligned(2, 12, 4, 13), 0.8)];
        assert!(p.project(&detections, GridCoord::new(0, 0)).is_empty());
    }

    #[test]
    fn test_filter_stops_at_threshold() {
        let filter = DetectionFilter {
            min_score: 0.5,
            suppress_npc: true,
        };
        let detections = [
            Detection::new(ObjectLabel::House, aligned(0, 0, 1, 1), 0.9),
            Detection::new(ObjectLabel::Npc, aligned(3, 3, 3, 3), 0.8),
            Detection::new(ObjectLabel::Gym, aligned(5, 5, 6, 6), 0.4),
            Detection::new(ObjectLabel::Mart, aligned(8, 8, 9, 9), 0.7),
        ];

        let kept: Vec<_> = filter.apply(&detections).map(|d| d.label).collect();

        assert_eq!(kept, vec![ObjectLabel::House]);
    }
}
