//! OrbitalVisualizer - the animated scene.
//!
//! The visualizer owns every piece of mutable simulation state: the node
//! population, simulated time, the pointer position and the random source.
//! Each frame is one [`OrbitalVisualizer::update`] followed by one
//! [`OrbitalVisualizer::render`]; both are synchronous and never fail.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::node::{FloatingParticle, OrbitalNode};
use super::population::Population;
use crate::config::VisualizerConfig;
use crate::render::{Point, Surface};
use crate::spatial::{OrbitPoint, SpatialIndex};

/// Line width of the connection segments.
const CONNECTION_LINE_WIDTH: f32 = 0.5;

/// Line width of the guide rings.
const GUIDE_RING_LINE_WIDTH: f32 = 1.0;

/// A connection line between two orbital nodes for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Population index of the first node (the one whose color is used).
    pub from: usize,
    /// Population index of the second node.
    pub to: usize,
    /// Current on-screen distance.
    pub distance: f32,
}

/// The orbital particle scene.
///
/// This struct manages:
/// - The node population, regenerated on every resize
/// - Simulated time, advanced by a fixed step per frame
/// - The last known pointer position
/// - A seedable random source, so identical seeds replay identically
/// - A spatial index for connection lookups
pub struct OrbitalVisualizer {
    config: VisualizerConfig,
    width: f32,
    height: f32,
    time: f64,
    pointer: Option<Point>,
    population: Population,
    rng: StdRng,
    spatial: SpatialIndex,
}

impl OrbitalVisualizer {
    /// Create a visualizer for a `width` × `height` surface.
    ///
    /// The initial population is generated immediately from `seed`.
    pub fn new(config: VisualizerConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut visualizer = Self {
            config,
            width: 0.0,
            height: 0.0,
            time: 0.0,
            pointer: None,
            population: Population::default(),
            rng: StdRng::seed_from_u64(seed),
            spatial: SpatialIndex::new(),
        };
        visualizer.resize(width, height);
        visualizer
    }

    /// Create a visualizer with the default configuration.
    pub fn with_defaults(width: f32, height: f32, seed: u64) -> Self {
        Self::new(VisualizerConfig::default(), width, height, seed)
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Adopt a new surface size and regenerate the whole population.
    ///
    /// The new population is built completely before it replaces the old one.
    /// Negative or non-finite sizes are treated as zero.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = sanitize(width);
        self.height = sanitize(height);
        self.population = Population::generate(&self.config, self.width, self.height, &mut self.rng);
        self.spatial.clear();

        log::debug!(
            "orbit scene resized to {}x{}: {} orbital, {} floating",
            self.width,
            self.height,
            self.population.orbital.len(),
            self.population.floating.len()
        );
    }

    /// Record the pointer position used for particle attraction.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Some(Point::new(x, y));
        }
    }

    /// Forget the pointer; particles drift freely until the next move.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Advance the simulation by one frame.
    ///
    /// Time moves by the fixed `time_step` regardless of wall-clock time.
    /// Floating particles integrate, wrap, feel the pointer, then damp.
    pub fn update(&mut self) {
        self.time += self.config.time_step as f64;

        let (width, height) = (self.width, self.height);
        let pointer = self.pointer;
        let config = &self.config;
        for particle in &mut self.population.floating {
            particle.advance(width, height);
            if let Some(target) = pointer {
                particle.attract(target, config.attraction_radius, config.attraction_strength);
            }
            particle.damp(config.damping);
        }
    }

    /// Run one frame: update, then render onto `surface`.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.update();
        self.render(surface);
    }

    /// Surface center.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// On-screen position of an orbital node at the current simulated time.
    #[inline]
    pub fn orbital_position(&self, node: &OrbitalNode) -> Point {
        node.position_at(self.center(), self.time, self.config.angular_scale)
    }

    /// Connections for the current frame, ordered by `from` then `to`.
    ///
    /// Two orbital nodes connect when their orbits differ by at most one and
    /// they are strictly closer than `connection_distance`.
    pub fn connections(&mut self) -> Vec<Connection> {
        let positions: Vec<Point> = self
            .population
            .orbital
            .iter()
            .map(|node| self.orbital_position(node))
            .collect();

        let points = self
            .population
            .orbital
            .iter()
            .zip(&positions)
            .enumerate()
            .map(|(i, (node, p))| OrbitPoint::new(i, node.orbit, p.x, p.y))
            .collect();
        self.spatial.rebuild(points);

        let max_distance = self.config.connection_distance;
        let mut connections = Vec::new();
        for (i, node) in self.population.orbital.iter().enumerate() {
            let here = positions[i];
            for other in self.spatial.in_radius(here.x, here.y, max_distance) {
                if other.index <= i || node.orbit.abs_diff(other.orbit) > 1 {
                    continue;
                }
                let distance = here.distance(positions[other.index]);
                if distance < max_distance {
                    connections.push(Connection {
                        from: i,
                        to: other.index,
                        distance,
                    });
                }
            }
        }
        connections
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Draw the current frame.
    ///
    /// Order: clear, guide rings, connections, nodes, center glow.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        let center = self.center();
        let palette = self.config.palette;

        if self.width > 0.0 && self.height > 0.0 {
            let short_side = self.width.min(self.height);
            let ring_color = palette.primary.with_alpha(self.config.guide_ring_alpha);
            for orbit in 1..=self.config.guide_rings {
                let radius = self.config.orbit_radius(orbit, short_side);
                surface.stroke_circle(center, radius, ring_color, GUIDE_RING_LINE_WIDTH);
            }
        }

        for connection in self.connections() {
            let a = &self.population.orbital[connection.from];
            let b = &self.population.orbital[connection.to];
            let alpha = (1.0 - connection.distance / self.config.connection_distance)
                * self.config.connection_alpha;
            surface.line(
                self.orbital_position(a),
                self.orbital_position(b),
                a.color.resolve(&palette).with_alpha(alpha),
                CONNECTION_LINE_WIDTH,
            );
        }

        for node in &self.population.orbital {
            let position = self.orbital_position(node);
            let radius = node.size * self.pulse(node.pulse_offset);
            let color = node.color.resolve(&palette);
            surface.fill_circle(position, radius, color.with_alpha(node.opacity));

            if node.size > self.config.glow_min_size {
                surface.fill_radial_glow(
                    position,
                    radius * self.config.glow_scale,
                    color,
                    node.opacity * self.config.glow_alpha,
                );
            }
        }

        for particle in &self.population.floating {
            let radius = particle.size * self.pulse(0.0);
            surface.fill_circle(
                particle.position(),
                radius,
                palette.accent.with_alpha(particle.opacity),
            );
        }

        surface.fill_radial_glow(
            center,
            self.config.center_glow_radius,
            palette.primary.with_alpha(self.config.center_glow_alpha),
            1.0,
        );
    }

    /// Size multiplier of the pulse for a node with the given phase.
    #[inline]
    fn pulse(&self, offset: f32) -> f32 {
        1.0 + self.config.pulse_amplitude
            * (self.time * self.config.pulse_frequency as f64 + offset as f64).sin() as f32
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Simulated time.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn orbital_nodes(&self) -> &[OrbitalNode] {
        &self.population.orbital
    }

    pub fn floating_particles(&self) -> &[FloatingParticle] {
        &self.population.floating
    }

    /// Mutable access to floating particles, for scripted scenes.
    pub fn floating_particles_mut(&mut self) -> &mut [FloatingParticle] {
        &mut self.population.floating
    }

    /// Replace the orbital nodes, for scripted scenes.
    pub fn set_orbital_nodes(&mut self, nodes: Vec<OrbitalNode>) {
        self.population.orbital = nodes;
    }

    /// Total number of nodes of both kinds.
    pub fn node_count(&self) -> usize {
        self.population.len()
    }
}

fn sanitize(side: f32) -> f32 {
    if side.is_finite() && side > 0.0 { side } else { 0.0 }
}
