//! The orbital scene.
//!
//! Orbital nodes circle the surface center on banded orbits, floating
//! particles drift across it and lean toward the pointer. The whole scene is
//! plain Rust and renders through [`crate::render::Surface`], so it runs the
//! same against a browser canvas or a recording surface.

mod engine;
mod node;
mod population;

pub use engine::{Connection, OrbitalVisualizer};
pub use node::{FloatingParticle, NodeColor, OrbitalNode};
pub use population::Population;
