//! Frame-to-frame association of detected objects.
//!
//! A detection is taken to be an object seen before when one of its two
//! corners falls inside that object's box. Matching is first-hit in
//! insertion order and only considers objects known before the current
//! frame; everything unmatched is appended once the frame is processed.

use crate::core::{GridCoord, ObjectLabel, TileBox};
use crate::grid::{GridStorage, GrowthEvent};

use super::object::WorldObject;

/// Is `candidate` the same object as `existing`?
///
/// True when the candidate's top-left or bottom-right tile lies inside the
/// existing box (edges included). Labels are not compared.
#[inline]
pub fn corners_overlap(candidate: &TileBox, existing: &TileBox) -> bool {
    existing.contains(candidate.top_left()) || existing.contains(candidate.bottom_right())
}

/// Outcome of one [`ObjectTracker::ingest`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Detections appended as new objects
    pub added: usize,
    /// Matched detections whose larger box replaced the stored one
    pub replaced: usize,
    /// Matched detections that left the stored object unchanged
    pub kept: usize,
}

/// Persistent list of every object seen so far, in grid indices.
#[derive(Clone, Debug, Default)]
pub struct ObjectTracker {
    objects: Vec<WorldObject>,
}

impl ObjectTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// All tracked objects in insertion order.
    pub fn objects(&self) -> &[WorldObject] {
        &self.objects
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when nothing has been tracked yet.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Merge one frame's detections into the object list.
    ///
    /// For each detection, the first pre-existing object passing
    /// [`corners_overlap`] is the match. The stored box is replaced only if
    /// the new box has a strictly larger area; the stored label is kept
    /// either way.
    pub fn ingest<I>(&mut self, detections: I) -> IngestReport
    where
        I: IntoIterator<Item = (ObjectLabel, TileBox)>,
    {
        let known = self.objects.len();
        let mut report = IngestReport::default();
        let mut fresh = Vec::new();

        for (label, candidate) in detections {
            let matched = self.objects[..known]
                .iter_mut()
                .find(|object| corners_overlap(&candidate, &object.bounding_box));

            match matched {
                Some(object) => {
                    if candidate.area() > object.bounding_box.area() {
                        log::trace!(
                            "{:?} box {:?} replaced by larger {:?}",
                            object.label,
                            object.bounding_box,
                            candidate
                        );
                        object.bounding_box = candidate;
                        report.replaced += 1;
                    } else {
                        report.kept += 1;
                    }
                }
                None => fresh.push(WorldObject::new(label, candidate)),
            }
        }

        report.added = fresh.len();
        self.objects.extend(fresh);

        if report.added > 0 {
            log::debug!(
                "Tracker: {} new, {} replaced, {} kept ({} total)",
                report.added,
                report.replaced,
                report.kept,
                self.objects.len()
            );
        }
        report
    }

    /// Record a wall tile inferred from a blocked move.
    ///
    /// Returns false if a wall already occupies that tile.
    pub fn add_wall(&mut self, coord: GridCoord) -> bool {
        let wall = WorldObject::wall(coord);
        if self.objects.contains(&wall) {
            return false;
        }
        self.objects.push(wall);
        true
    }

    /// Shift every stored box after the grid grew up or left.
    pub fn translate(&mut self, event: &GrowthEvent) {
        if !event.moves_origin() {
            return;
        }
        for object in &mut self.objects {
            object.bounding_box = event.apply_box(object.bounding_box);
        }
    }

    /// Paint every object into the grid in insertion order.
    ///
    /// Stamps go through the grid's precedence rules, so the result does not
    /// depend on the order NPCs and exits were inserted in.
    pub fn render(&self, storage: &mut GridStorage) {
        for object in &self.objects {
            let color = object.label.color();
            for coord in object.footprint() {
                storage.stamp(coord, color);
            }
        }
    }
}
