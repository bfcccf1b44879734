//! A surface that records draw calls instead of rasterizing them.

use super::surface::{Point, Rgba, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Rgba,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        color: Rgba,
        line_width: f32,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        line_width: f32,
    },
    RadialGlow {
        center: Point,
        radius: f32,
        inner: Rgba,
        alpha: f32,
    },
}

/// Surface that stores every call as a [`DrawCommand`].
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Recorded line segments.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Recorded filled circles.
    pub fn filled_circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
    }

    /// Recorded stroked circles.
    pub fn stroked_circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
    }

    /// Recorded radial glows.
    pub fn glows(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::RadialGlow { .. }))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba, line_width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Rgba, line_width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            line_width,
        });
    }

    fn fill_radial_glow(&mut self, center: Point, radius: f32, inner: Rgba, alpha: f32) {
        self.commands.push(DrawCommand::RadialGlow {
            center,
            radius,
            inner,
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.clear(10.0, 20.0);
        surface.fill_circle(Point::new(1.0, 1.0), 2.0, Rgba::rgb(1, 2, 3));
        surface.line(Point::default(), Point::new(5.0, 5.0), Rgba::rgb(0, 0, 0), 0.5);

        assert_eq!(surface.commands().len(), 3);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear {
                width: 10.0,
                height: 20.0
            }
        );
        assert_eq!(surface.filled_circles().count(), 1);
        assert_eq!(surface.lines().count(), 1);
        assert_eq!(surface.glows().count(), 0);
    }

    #[test]
    fn test_reset() {
        let mut surface = RecordingSurface::new();
        surface.stroke_circle(Point::default(), 1.0, Rgba::rgb(0, 0, 0), 1.0);
        surface.reset();
        assert!(surface.commands().is_empty());
        assert_eq!(surface.stroked_circles().count(), 0);
    }
}
