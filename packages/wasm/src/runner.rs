//! Browser animation driver.
//!
//! Binds an [`OrbitalVisualizer`] to a canvas element:
//! - sizes the canvas backing store for the device pixel ratio
//! - regenerates the scene on window resize
//! - feeds pointer moves into particle attraction
//! - runs one `step` per `requestAnimationFrame` until stopped
//!
//! All state sits behind `Rc<RefCell<_>>` shared by the callbacks. Callbacks
//! run to completion on the single JS thread, so a frame always draws either
//! the old or the new population, never a mix.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::config::VisualizerConfig;
use crate::error::MountError;
use crate::render::CanvasSurface;
use crate::scene::OrbitalVisualizer;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Canvas, context and scene, borrowed together by every callback.
struct Stage {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    visualizer: OrbitalVisualizer,
}

impl Stage {
    /// Match the canvas to the viewport and regenerate the scene.
    fn fit(&mut self, window: &Window) {
        let (width, height, dpr) = viewport(window);
        self.canvas.set_width((width * dpr).round() as u32);
        self.canvas.set_height((height * dpr).round() as u32);
        self.surface.set_pixel_ratio(dpr);
        self.visualizer.resize(width as f32, height as f32);
    }
}

/// An event listener registered on the window.
///
/// Dropping it removes the listener, so a callback never outlives the
/// closure it points to.
pub struct Listener {
    target: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `callback` for `event` on `target`.
    pub fn register(
        target: &Window,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, MountError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(MountError::js)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, callback)
        {
            log::warn!("failed to detach {} listener: {err:?}", self.event);
        }
    }
}

/// A running (or paused) animation bound to one canvas.
///
/// Dropping the loop stops it and detaches its event listeners.
pub struct AnimationLoop {
    window: Window,
    stage: Rc<RefCell<Stage>>,
    running: Rc<Cell<bool>>,
    pending_frame: Rc<Cell<Option<i32>>>,
    frame: FrameCallback,
    _on_resize: Listener,
    _on_pointer: Listener,
}

impl AnimationLoop {
    /// Attach to the canvas with id `canvas_id`.
    ///
    /// The scene is generated and listeners are registered, but no frame is
    /// requested until [`AnimationLoop::start`].
    pub fn attach(canvas_id: &str, config: VisualizerConfig, seed: u64) -> Result<Self, MountError> {
        let (window, canvas, ctx) = acquire_canvas(canvas_id)?;

        let mut stage = Stage {
            canvas,
            surface: CanvasSurface::new(ctx),
            visualizer: OrbitalVisualizer::new(config, 0.0, 0.0, seed),
        };
        stage.fit(&window);
        let stage = Rc::new(RefCell::new(stage));

        let on_resize = {
            let stage = stage.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |_: Event| match stage.try_borrow_mut() {
                Ok(mut stage) => stage.fit(&window),
                Err(_) => log::warn!("resize skipped: scene busy"),
            }) as Box<dyn FnMut(Event)>)
        };
        let on_resize = Listener::register(&window, "resize", on_resize)?;

        // If this registration fails, dropping `on_resize` unregisters it.
        let on_pointer = {
            let stage = stage.clone();
            Closure::wrap(Box::new(move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if let Ok(mut stage) = stage.try_borrow_mut() {
                    stage
                        .visualizer
                        .set_pointer(event.client_x() as f32, event.client_y() as f32);
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let on_pointer = Listener::register(&window, "mousemove", on_pointer)?;

        log::info!(
            "orbit ring attached to #{canvas_id} with {} nodes",
            stage.borrow().visualizer.node_count()
        );

        Ok(Self {
            window,
            stage,
            running: Rc::new(Cell::new(false)),
            pending_frame: Rc::new(Cell::new(None)),
            frame: Rc::new(RefCell::new(None)),
            _on_resize: on_resize,
            _on_pointer: on_pointer,
        })
    }

    /// Start requesting frames. No-op when already running.
    pub fn start(&mut self) {
        if self.running.get() {
            return;
        }
        self.running.set(true);

        if self.frame.borrow().is_none() {
            let stage = self.stage.clone();
            let running = self.running.clone();
            let pending = self.pending_frame.clone();
            let handle = self.frame.clone();
            let window = self.window.clone();
            let callback = Closure::wrap(Box::new(move || {
                pending.set(None);
                if !running.get() {
                    return;
                }
                if let Ok(mut stage) = stage.try_borrow_mut() {
                    let Stage {
                        surface,
                        visualizer,
                        ..
                    } = &mut *stage;
                    visualizer.step(surface);
                }
                // Only schedule the next frame once this one is fully drawn.
                if running.get() {
                    if let Some(callback) = handle.borrow().as_ref() {
                        pending.set(request_frame(&window, callback));
                    }
                }
            }) as Box<dyn FnMut()>);
            *self.frame.borrow_mut() = Some(callback);
        }

        if let Some(callback) = self.frame.borrow().as_ref() {
            self.pending_frame.set(request_frame(&self.window, callback));
        }
        log::info!("orbit ring started");
    }

    /// Stop requesting frames and cancel the pending one.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending_frame.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        log::info!("orbit ring stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Total nodes in the current population.
    pub fn node_count(&self) -> usize {
        self.stage.borrow().visualizer.node_count()
    }

    /// Simulated time of the scene.
    pub fn time(&self) -> f64 {
        self.stage.borrow().visualizer.time()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        // The frame callback holds a handle to its own slot; clearing the
        // slot breaks that cycle.
        self.frame.borrow_mut().take();
    }
}

/// Look up the canvas and its 2D context.
fn acquire_canvas(
    canvas_id: &str,
) -> Result<(Window, HtmlCanvasElement, CanvasRenderingContext2d), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| MountError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(canvas_id.to_string()))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(MountError::js)?
        .ok_or(MountError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| MountError::ContextUnavailable)?;
    Ok((window, canvas, ctx))
}

/// Viewport size in CSS pixels and the device pixel ratio.
fn viewport(window: &Window) -> (f64, f64, f64) {
    let read = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0)
    };
    let dpr = window.device_pixel_ratio();
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    (read(window.inner_width()), read(window.inner_height()), dpr)
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>) -> Option<i32> {
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            log::warn!("requestAnimationFrame failed: {err:?}");
            None
        }
    }
}

/// Seed for the scene's random source, drawn from `Math.random`.
pub fn browser_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (high << 32) | low
}
