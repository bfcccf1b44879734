//! Node population generation.
//!
//! A population is generated in one go for a given surface size and replaced
//! wholesale on resize. Orbital nodes are spread over orbit bands of
//! `nodes_per_orbit` each; floating particles are scattered uniformly.

use std::f32::consts::TAU;

use rand::Rng;

use super::node::{FloatingParticle, NodeColor, OrbitalNode};
use crate::config::VisualizerConfig;

/// Probability threshold above which an orbital node takes the primary color.
const PRIMARY_THRESHOLD: f32 = 0.6;

/// Angular offset between consecutive orbit bands (radians).
const ORBIT_PHASE_STEP: f32 = 0.5;

/// Base angular speed magnitude; each node adds up to `SPEED_SPREAD` more.
const BASE_SPEED: f32 = 0.0002;
const SPEED_SPREAD: f32 = 0.0003;

/// The complete set of nodes for one surface size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    pub orbital: Vec<OrbitalNode>,
    pub floating: Vec<FloatingParticle>,
}

impl Population {
    /// Generate a population for a `width` × `height` surface.
    ///
    /// A degenerate surface (zero or negative side) yields an empty
    /// population.
    pub fn generate<R: Rng + ?Sized>(
        config: &VisualizerConfig,
        width: f32,
        height: f32,
        rng: &mut R,
    ) -> Self {
        if !(width > 0.0 && height > 0.0) {
            return Self::default();
        }

        let count = config.orbital_count(width, height);
        let short_side = width.min(height);

        let mut orbital = Vec::with_capacity(count as usize);
        for i in 0..count {
            let orbit = config.orbit_for(i);
            let base_radius = config.orbit_radius(orbit, short_side);
            let direction = if orbit % 2 == 0 { 1.0 } else { -1.0 };

            orbital.push(OrbitalNode {
                base_angle: (i as f32 / count as f32) * TAU + orbit as f32 * ORBIT_PHASE_STEP,
                orbit,
                radius: base_radius + (unit(rng) - 0.5) * config.radius_jitter,
                size: unit(rng) * 2.5 + 1.0,
                angular_speed: (BASE_SPEED + unit(rng) * SPEED_SPREAD) * direction,
                color: if unit(rng) > PRIMARY_THRESHOLD {
                    NodeColor::Primary
                } else {
                    NodeColor::Secondary
                },
                pulse_offset: unit(rng) * TAU,
                opacity: unit(rng) * 0.5 + 0.3,
            });
        }

        let speed_span = config.floating_max_speed * 2.0;
        let floating = (0..config.floating_count)
            .map(|_| FloatingParticle {
                x: unit(rng) * width,
                y: unit(rng) * height,
                vx: (unit(rng) - 0.5) * speed_span,
                vy: (unit(rng) - 0.5) * speed_span,
                size: unit(rng) * 1.5 + 0.5,
                opacity: unit(rng) * 0.3 + 0.1,
            })
            .collect();

        Self { orbital, floating }
    }

    /// Total number of nodes of both kinds.
    #[inline]
    pub fn len(&self) -> usize {
        self.orbital.len() + self.floating.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orbital.is_empty() && self.floating.is_empty()
    }

    /// Highest orbit band in use, or 0 without orbital nodes.
    pub fn max_orbit(&self) -> u32 {
        self.orbital.iter().map(|n| n.orbit).max().unwrap_or(0)
    }
}

/// Uniform draw in [0, 1).
#[inline]
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..1.0)
}
