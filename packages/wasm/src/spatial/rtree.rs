//! R-tree based spatial index using the rstar crate.
//!
//! Provides O(log n) point-in-radius queries over orbital node positions.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

/// An orbital node's position for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPoint {
    /// Index of the node in the population.
    pub index: usize,
    /// Orbit band of the node.
    pub orbit: u32,
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl OrbitPoint {
    /// Create a new OrbitPoint.
    pub fn new(index: usize, orbit: u32, x: f32, y: f32) -> Self {
        Self { index, orbit, x, y }
    }
}

impl RTreeObject for OrbitPoint {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for OrbitPoint {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index for orbital node positions.
///
/// Uses an R*-tree, rebuilt in bulk once per frame.
pub struct SpatialIndex {
    tree: RTree<OrbitPoint>,
}

impl SpatialIndex {
    /// Create a new empty spatial index.
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Replace the index contents with `points`.
    ///
    /// Bulk loading is cheaper than incremental inserts and yields a better
    /// balanced tree.
    pub fn rebuild(&mut self, points: Vec<OrbitPoint>) {
        self.tree = RTree::bulk_load(points);
    }

    /// All points within `radius` of `(x, y)`, inclusive, sorted by index.
    pub fn in_radius(&self, x: f32, y: f32, radius: f32) -> Vec<OrbitPoint> {
        let mut found: Vec<OrbitPoint> = self
            .tree
            .locate_within_distance([x, y], radius * radius)
            .copied()
            .collect();
        found.sort_unstable_by_key(|p| p.index);
        found
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.tree = RTree::new();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
