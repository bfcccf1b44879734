//! HTML canvas implementation of [`Surface`].

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::surface::{Point, Rgba, Surface};

/// Surface backed by a canvas 2D rendering context.
///
/// Alpha is applied through `globalAlpha`, which is reset to 1 after every
/// call. JS exceptions raised by the context are logged and swallowed so a
/// single bad frame never stops the animation loop.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a 2D context.
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Scale the context so logical pixels map to `dpr` device pixels.
    ///
    /// Resets any previous transform; assigning the canvas size already does
    /// that, but an explicit reset keeps repeated resizes from compounding.
    pub fn set_pixel_ratio(&self, dpr: f64) {
        if let Err(err) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            report("setTransform", &err);
        }
    }

    fn circle_path(&self, center: Point, radius: f32) -> bool {
        self.ctx.begin_path();
        match self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
        {
            Ok(()) => true,
            Err(err) => {
                report("arc", &err);
                false
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        if !self.circle_path(center, radius) {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_global_alpha(color.a as f64);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba, line_width: f32) {
        if !self.circle_path(center, radius) {
            return;
        }
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_global_alpha(color.a as f64);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }

    fn line(&mut self, from: Point, to: Point, color: Rgba, line_width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_global_alpha(color.a as f64);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }

    fn fill_radial_glow(&mut self, center: Point, radius: f32, inner: Rgba, alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let gradient = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(gradient) => gradient,
            Err(err) => {
                report("createRadialGradient", &err);
                return;
            }
        };
        let stops = gradient
            .add_color_stop(0.0, &inner.to_css_rgba())
            .and_then(|()| gradient.add_color_stop(1.0, "transparent"));
        if let Err(err) = stops {
            report("addColorStop", &err);
            return;
        }
        if !self.circle_path(center, radius) {
            return;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }
}

fn report(call: &str, err: &JsValue) {
    log::warn!("canvas {call} failed: {err:?}");
}
