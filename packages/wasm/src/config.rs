//! Visualizer configuration.
//!
//! Every tunable constant of the orbital animation lives here. The defaults
//! reproduce the look of the webring landing page; a JavaScript caller may pass
//! a partial object (camelCase keys) to override individual values.

use serde::Deserialize;

use crate::render::Rgba;

/// Color palette for the three node roles.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    /// Orbital nodes, guide rings and the center glow (default: `#FF6B35`).
    pub primary: Rgba,
    /// The remaining orbital nodes (default: `#003E7E`).
    pub secondary: Rgba,
    /// Floating particles (default: `#00D4FF`).
    pub accent: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Rgba::rgb(0xFF, 0x6B, 0x35),
            secondary: Rgba::rgb(0x00, 0x3E, 0x7E),
            accent: Rgba::rgb(0x00, 0xD4, 0xFF),
        }
    }
}

/// Configuration for the orbital visualizer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualizerConfig {
    /// Upper bound on orbital nodes (default: 40).
    pub max_orbital_nodes: u32,
    /// Surface area (px²) per orbital node (default: 25000).
    pub area_per_node: f32,
    /// Orbital nodes per orbit band (default: 12).
    pub nodes_per_orbit: u32,
    /// Band radius as a fraction of the short side, before the per-orbit step (default: 0.15).
    pub orbit_base_fraction: f32,
    /// Band radius growth per orbit index (default: 0.12).
    pub orbit_step_fraction: f32,
    /// Full width of the per-node radius jitter in px (default: 60, i.e. ±30).
    pub radius_jitter: f32,
    /// Number of floating particles (default: 30).
    pub floating_count: u32,
    /// Max absolute initial velocity component of a floating particle (default: 0.15).
    pub floating_max_speed: f32,
    /// Pointer attraction range in px (default: 200).
    pub attraction_radius: f32,
    /// Peak pointer acceleration per frame (default: 0.01).
    pub attraction_strength: f32,
    /// Per-frame velocity multiplier (default: 0.99).
    pub damping: f32,
    /// Max distance for a connection line in px (default: 150).
    pub connection_distance: f32,
    /// Alpha of a connection line at zero distance (default: 0.15).
    pub connection_alpha: f32,
    /// Simulated time added per frame (default: 0.016).
    pub time_step: f32,
    /// Multiplier from `time * angular_speed` to radians (default: 1000).
    pub angular_scale: f32,
    /// Number of guide rings drawn (default: 3).
    pub guide_rings: u32,
    /// Guide ring alpha (default: 0.03).
    pub guide_ring_alpha: f32,
    /// Relative size swing of the pulse (default: 0.3).
    pub pulse_amplitude: f32,
    /// Pulse angular frequency per unit of simulated time (default: 2).
    pub pulse_frequency: f32,
    /// Glow radius relative to the pulsing node radius (default: 2.5).
    pub glow_scale: f32,
    /// Orbital nodes above this base size get a glow (default: 1.5).
    pub glow_min_size: f32,
    /// Glow alpha relative to the node opacity (default: 0.3).
    pub glow_alpha: f32,
    /// Radius of the ambient center glow (default: 100).
    pub center_glow_radius: f32,
    /// Alpha at the center of the ambient glow (default: 0.05).
    pub center_glow_alpha: f32,
    /// Node colors.
    pub palette: Palette,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            max_orbital_nodes: 40,
            area_per_node: 25_000.0,
            nodes_per_orbit: 12,
            orbit_base_fraction: 0.15,
            orbit_step_fraction: 0.12,
            radius_jitter: 60.0,
            floating_count: 30,
            floating_max_speed: 0.15,
            attraction_radius: 200.0,
            attraction_strength: 0.01,
            damping: 0.99,
            connection_distance: 150.0,
            connection_alpha: 0.15,
            time_step: 0.016,
            angular_scale: 1000.0,
            guide_rings: 3,
            guide_ring_alpha: 0.03,
            pulse_amplitude: 0.3,
            pulse_frequency: 2.0,
            glow_scale: 2.5,
            glow_min_size: 1.5,
            glow_alpha: 0.3,
            center_glow_radius: 100.0,
            center_glow_alpha: 0.05,
            palette: Palette::default(),
        }
    }
}

impl VisualizerConfig {
    /// Number of orbital nodes for a surface of the given size.
    ///
    /// `min(max_orbital_nodes, floor(width * height / area_per_node))`, and
    /// zero for a degenerate surface.
    pub fn orbital_count(&self, width: f32, height: f32) -> u32 {
        if width <= 0.0 || height <= 0.0 || self.area_per_node <= 0.0 {
            return 0;
        }
        let by_area = ((width * height) / self.area_per_node).floor() as u32;
        by_area.min(self.max_orbital_nodes)
    }

    /// Orbit band for the `index`-th orbital node (1-based).
    #[inline]
    pub fn orbit_for(&self, index: u32) -> u32 {
        1 + index / self.nodes_per_orbit.max(1)
    }

    /// Base radius of orbit band `orbit` on a surface with the given short side.
    #[inline]
    pub fn orbit_radius(&self, orbit: u32, short_side: f32) -> f32 {
        short_side * (self.orbit_base_fraction + orbit as f32 * self.orbit_step_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbital_count_scenarios() {
        let config = VisualizerConfig::default();
        assert_eq!(config.orbital_count(1200.0, 800.0), 38);
        assert_eq!(config.orbital_count(1920.0, 1080.0), 40);
        assert_eq!(config.orbital_count(400.0, 300.0), 4);
        assert_eq!(config.orbital_count(0.0, 800.0), 0);
        assert_eq!(config.orbital_count(1200.0, -1.0), 0);
    }

    #[test]
    fn test_orbit_bands() {
        let config = VisualizerConfig::default();
        assert_eq!(config.orbit_for(0), 1);
        assert_eq!(config.orbit_for(11), 1);
        assert_eq!(config.orbit_for(12), 2);
        assert_eq!(config.orbit_for(39), 4);

        let r1 = config.orbit_radius(1, 800.0);
        let r2 = config.orbit_radius(2, 800.0);
        assert!((r1 - 216.0).abs() < 1e-3);
        assert!(r2 > r1);
    }

    #[test]
    fn test_palette_defaults() {
        let palette = Palette::default();
        assert_eq!(palette.primary.to_css(), "rgb(255, 107, 53)");
        assert_eq!(palette.secondary.to_css(), "rgb(0, 62, 126)");
        assert_eq!(palette.accent.to_css(), "rgb(0, 212, 255)");
    }
}
