//! Node types of the orbital scene.
//!
//! Two kinds of decorative points share the canvas:
//! - [`OrbitalNode`]: position derived from simulated time, no mutable state
//! - [`FloatingParticle`]: free position and velocity, integrated per frame

use crate::config::Palette;
use crate::render::{Point, Rgba};

/// Color role of an orbital node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeColor {
    Primary,
    Secondary,
}

impl NodeColor {
    /// Resolve against a palette.
    #[inline]
    pub fn resolve(self, palette: &Palette) -> Rgba {
        match self {
            NodeColor::Primary => palette.primary,
            NodeColor::Secondary => palette.secondary,
        }
    }
}

/// A node circling the surface center.
///
/// Immutable between resizes; only the angle changes, and it is recomputed
/// from simulated time rather than stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalNode {
    /// Angle at simulated time zero (radians).
    pub base_angle: f32,
    /// Orbit band, starting at 1.
    pub orbit: u32,
    /// Distance from the center (px).
    pub radius: f32,
    /// Base drawing radius (px).
    pub size: f32,
    /// Signed angular speed; the sign alternates with orbit parity.
    pub angular_speed: f32,
    pub color: NodeColor,
    /// Phase of the size pulse (radians).
    pub pulse_offset: f32,
    /// Opacity in [0, 1].
    pub opacity: f32,
}

impl OrbitalNode {
    /// Current angle for the given simulated time.
    ///
    /// `angular_scale` converts `time * angular_speed` to radians. Computed
    /// in f64 so long-running scenes keep moving smoothly.
    #[inline]
    pub fn angle_at(&self, time: f64, angular_scale: f32) -> f64 {
        self.base_angle as f64 + time * self.angular_speed as f64 * angular_scale as f64
    }

    /// Screen position around `center` at the given simulated time.
    #[inline]
    pub fn position_at(&self, center: Point, time: f64, angular_scale: f32) -> Point {
        let angle = self.angle_at(time, angular_scale);
        Point::new(
            center.x + angle.cos() as f32 * self.radius,
            center.y + angle.sin() as f32 * self.radius,
        )
    }
}

/// A free-drifting particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingParticle {
    pub x: f32,
    pub y: f32,
    /// Velocity in px per frame.
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    /// Opacity in [0, 1].
    pub opacity: f32,
}

impl FloatingParticle {
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Move by one frame of velocity, then wrap onto the opposite edge.
    ///
    /// A coordinate below zero snaps to the far edge and one beyond the far
    /// edge snaps to zero; velocity is untouched.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 {
            self.x = width;
        }
        if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
        if self.y > height {
            self.y = 0.0;
        }
    }

    /// Accelerate toward `target` when closer than `radius`.
    ///
    /// The pull falls off linearly from `strength` at the target to zero at
    /// `radius`. A particle sitting exactly on the target is left alone.
    pub fn attract(&mut self, target: Point, radius: f32, strength: f32) {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= 0.0 || distance >= radius {
            return;
        }
        let force = (radius - distance) / radius * strength;
        self.vx += dx / distance * force;
        self.vy += dy / distance * force;
    }

    /// Scale velocity by `factor`.
    #[inline]
    pub fn damp(&mut self, factor: f32) {
        self.vx *= factor;
        self.vy *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> FloatingParticle {
        FloatingParticle {
            x,
            y,
            vx,
            vy,
            size: 1.0,
            opacity: 0.2,
        }
    }

    #[test]
    fn test_orbital_position() {
        let node = OrbitalNode {
            base_angle: 0.0,
            orbit: 1,
            radius: 100.0,
            size: 2.0,
            angular_speed: 0.0005,
            color: NodeColor::Primary,
            pulse_offset: 0.0,
            opacity: 0.5,
        };
        let center = Point::new(600.0, 400.0);

        let p0 = node.position_at(center, 0.0, 1000.0);
        assert!((p0.x - 700.0).abs() < 1e-3);
        assert!((p0.y - 400.0).abs() < 1e-3);

        // time * speed * 1000 = pi / 2
        let t = std::f64::consts::FRAC_PI_2 / 0.5;
        let p1 = node.position_at(center, t, 1000.0);
        assert!((p1.x - 600.0).abs() < 1e-2);
        assert!((p1.y - 500.0).abs() < 1e-2);
    }

    #[test]
    fn test_wrap_left_edge_snaps_to_width() {
        let mut p = particle(0.0, 50.0, -0.2, 0.0);
        p.advance(1200.0, 800.0);
        assert_eq!(p.x, 1200.0);
        assert_eq!(p.y, 50.0);
        assert_eq!(p.vx, -0.2);
    }

    #[test]
    fn test_wrap_far_edges_snap_to_zero() {
        let mut p = particle(1199.9, 799.9, 0.2, 0.2);
        p.advance(1200.0, 800.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_attract_pulls_toward_target() {
        let mut p = particle(100.0, 100.0, 0.0, 0.0);
        p.attract(Point::new(200.0, 100.0), 200.0, 0.01);
        assert!(p.vx > 0.0);
        assert!((p.vx - 0.005).abs() < 1e-6);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn test_attract_out_of_range_or_coincident() {
        let mut far = particle(0.0, 0.0, 0.1, 0.1);
        far.attract(Point::new(300.0, 0.0), 200.0, 0.01);
        assert_eq!((far.vx, far.vy), (0.1, 0.1));

        let mut on_top = particle(5.0, 5.0, 0.1, 0.1);
        on_top.attract(Point::new(5.0, 5.0), 200.0, 0.01);
        assert_eq!((on_top.vx, on_top.vy), (0.1, 0.1));
        assert!(on_top.vx.is_finite());
    }

    #[test]
    fn test_damp() {
        let mut p = particle(0.0, 0.0, 0.1, -0.1);
        let before = p.speed();
        p.damp(0.99);
        assert!((p.speed() - before * 0.99).abs() < 1e-7);
    }
}
