//! Spatial indexing for connection lookups.
//!
//! This module provides an R-tree based index over the current on-screen
//! positions of orbital nodes, so each frame can find connection candidates
//! without testing every pair.

mod rtree;

pub use rtree::{OrbitPoint, SpatialIndex};
