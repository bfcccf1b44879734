//! Surface trait and the value types it draws with.

use serde::Deserialize;

/// A point in logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new Point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in [0, 1].
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with the given alpha, clamped to [0, 1].
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string, ignoring alpha.
    ///
    /// Canvas drawing applies alpha through `globalAlpha`, so the fill style
    /// itself is always opaque unless [`Rgba::to_css_rgba`] is used.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS color string including alpha.
    pub fn to_css_rgba(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A 2D immediate-mode drawing target.
///
/// Coordinates are logical pixels; implementations handle device pixel
/// scaling. Alpha is carried by the color argument. Implementations must not
/// panic on degenerate input (zero radius, zero-sized clear).
pub trait Surface {
    /// Clear the rectangle `(0, 0, width, height)` to transparent.
    fn clear(&mut self, width: f32, height: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba, line_width: f32);

    /// Stroke a line segment.
    fn line(&mut self, from: Point, to: Point, color: Rgba, line_width: f32);

    /// Fill a circle with a radial gradient from `inner` at the center to
    /// fully transparent at `radius`.
    ///
    /// `alpha` scales the whole fill, independently of `inner.a`.
    fn fill_radial_glow(&mut self, center: Point, radius: f32, inner: Rgba, alpha: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_rgba_css() {
        let c = Rgba::rgb(255, 107, 53);
        assert_eq!(c.to_css(), "rgb(255, 107, 53)");
        assert_eq!(c.with_alpha(0.05).to_css_rgba(), "rgba(255, 107, 53, 0.05)");
    }

    #[test]
    fn test_rgba_alpha_clamped() {
        let c = Rgba::rgb(1, 2, 3);
        assert_eq!(c.with_alpha(2.0).a, 1.0);
        assert_eq!(c.with_alpha(-1.0).a, 0.0);
    }
}
