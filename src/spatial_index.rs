//! Spatial index over element boxes.
//!
//! R-tree based hit testing for the reference document, so resolving the
//! element under the pointer stays O(log n) as documents grow.

use crate::types::{ElementId, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// An element's layout box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element: ElementId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(element: ElementId, rect: Rect) -> Self {
        Self {
            element,
            min_x: rect.left,
            min_y: rect.top,
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

/// Point queries over element boxes using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ElementId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or move an element's box.
    pub fn insert(&mut self, element: ElementId, rect: Rect) {
        if let Some(old_entry) = self.entries.remove(&element) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(element, rect);
        self.tree.insert(entry);
        self.entries.insert(element, entry);
    }

    pub fn remove(&mut self, element: ElementId) -> bool {
        if let Some(entry) = self.entries.remove(&element) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All elements whose box contains the point.
    pub fn query_point(&self, point: Point) -> Vec<ElementId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .map(|entry| entry.element)
            .collect()
    }

}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
