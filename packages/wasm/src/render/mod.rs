//! Drawing surfaces.
//!
//! The visualizer renders through the [`Surface`] trait, a small 2D
//! immediate-mode API (clear, circles, lines, radial glows). Two
//! implementations are provided:
//!
//! - [`CanvasSurface`]: an HTML canvas 2D context via web-sys
//! - [`RecordingSurface`]: captures [`DrawCommand`]s for headless runs and tests

mod canvas;
mod recording;
mod surface;

pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Point, Rgba, Surface};
