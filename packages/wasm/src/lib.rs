//! Webring Orbit - WASM Module
//!
//! This module provides the animated orbital backdrop and the ring navigation
//! for the webring landing page. It is compiled to WebAssembly and exposes a
//! JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `scene`: Orbital nodes, floating particles and the per-frame simulation
//! - `render`: Surface trait with canvas and recording implementations
//! - `spatial`: R-tree index for connection lookups
//! - `config`: Tunable constants, deserializable from JS
//! - `ring`: Member sites and previous/next/random navigation
//! - `runner`: requestAnimationFrame driver and DOM event wiring

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod render;
pub mod ring;
pub mod runner;
pub mod scene;
pub mod spatial;

use config::VisualizerConfig;
use error::MountError;
use ring::{MemberSite, WebRing};
use runner::AnimationLoop;

thread_local! {
    /// Loops started by [`mount`], keyed by canvas id. They live here rather
    /// than in the returned handle, which JS may drop at any time.
    static MOUNTED: RefCell<HashMap<String, Rc<RefCell<AnimationLoop>>>> =
        RefCell::new(HashMap::new());
}

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Orbital canvas animation bound to one canvas element.
///
/// A handle built with `new` owns its loop: once JS releases it, the loop
/// stops. Handles returned by `mount` share a loop kept alive by the module
/// until `unmount`.
#[wasm_bindgen]
pub struct OrbitRingWasm {
    animation: Rc<RefCell<AnimationLoop>>,
}

#[wasm_bindgen]
impl OrbitRingWasm {
    /// Attach to the canvas with the given element id.
    ///
    /// # Arguments
    ///
    /// * `canvas_id` - id of a `<canvas>` element
    /// * `config` - partial config object (camelCase keys), or undefined
    ///
    /// Throws when the canvas or its 2D context is unavailable. The animation
    /// does not run until `start()` is called.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config: JsValue) -> Result<OrbitRingWasm, JsValue> {
        let config = parse_config(config)?;
        let animation = AnimationLoop::attach(canvas_id, config, runner::browser_seed())?;
        Ok(Self {
            animation: Rc::new(RefCell::new(animation)),
        })
    }

    /// Start the animation loop.
    pub fn start(&mut self) {
        self.animation.borrow_mut().start();
    }

    /// Stop the animation loop. It can be restarted with `start()`.
    pub fn stop(&mut self) {
        self.animation.borrow_mut().stop();
    }

    /// Check if the animation is running.
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animation.borrow().is_running()
    }

    /// Total nodes (orbital and floating) in the current scene.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> u32 {
        self.animation.borrow().node_count() as u32
    }

    /// Simulated time of the scene.
    pub fn time(&self) -> f64 {
        self.animation.borrow().time()
    }
}

/// Attach to a canvas with the default config and start animating.
///
/// The loop keeps running after the returned handle is released; call
/// `unmount` to tear it down. Mounting the same canvas again replaces the
/// previous loop. Returns undefined instead of throwing when the canvas cannot
/// be used, so the rest of the page keeps working.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Option<OrbitRingWasm> {
    match AnimationLoop::attach(canvas_id, VisualizerConfig::default(), runner::browser_seed()) {
        Ok(mut animation) => {
            animation.start();
            let animation = Rc::new(RefCell::new(animation));
            let previous = MOUNTED.with(|mounted| {
                mounted
                    .borrow_mut()
                    .insert(canvas_id.to_string(), animation.clone())
            });
            // Dropped outside the registry borrow.
            drop(previous);
            Some(OrbitRingWasm { animation })
        }
        Err(err) => {
            log::warn!("orbit ring not started: {err}");
            None
        }
    }
}

/// Stop the loop mounted on `canvas_id` and release it.
///
/// Returns false when nothing was mounted there. Handles still held by JS
/// keep working but no longer animate until restarted.
#[wasm_bindgen]
pub fn unmount(canvas_id: &str) -> bool {
    let removed = MOUNTED.with(|mounted| mounted.borrow_mut().remove(canvas_id));
    match removed {
        Some(animation) => {
            animation.borrow_mut().stop();
            true
        }
        None => false,
    }
}

/// Check whether a mounted loop is animating `canvas_id`.
#[wasm_bindgen(js_name = isMounted)]
pub fn is_mounted(canvas_id: &str) -> bool {
    MOUNTED.with(|mounted| {
        mounted
            .borrow()
            .get(canvas_id)
            .is_some_and(|animation| animation.borrow().is_running())
    })
}

/// Webring navigation over the member list.
#[wasm_bindgen]
pub struct WebRingWasm {
    ring: WebRing,
    rng: StdRng,
}

#[wasm_bindgen]
impl WebRingWasm {
    /// Build the ring from an array of `{ name, year, website, internships }`.
    #[wasm_bindgen(constructor)]
    pub fn new(sites: JsValue) -> Result<WebRingWasm, JsValue> {
        let sites: Vec<MemberSite> = serde_wasm_bindgen::from_value(sites)
            .map_err(|e| MountError::InvalidSites(e.to_string()))?;
        log::info!("webring loaded with {} members", sites.len());
        Ok(Self {
            ring: WebRing::new(sites),
            rng: StdRng::seed_from_u64(runner::browser_seed()),
        })
    }

    /// Number of members.
    pub fn len(&self) -> u32 {
        self.ring.len() as u32
    }

    /// Check if the ring has no members.
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Website of the member after `current_url`.
    ///
    /// An unknown URL navigates from the first member.
    #[wasm_bindgen(js_name = nextUrl)]
    pub fn next_url(&self, current_url: &str) -> Option<String> {
        let from = self.ring.position_of(current_url).unwrap_or(0);
        self.website(self.ring.next(from))
    }

    /// Website of the member before `current_url`.
    ///
    /// An unknown URL navigates from the first member.
    #[wasm_bindgen(js_name = previousUrl)]
    pub fn previous_url(&self, current_url: &str) -> Option<String> {
        let from = self.ring.position_of(current_url).unwrap_or(0);
        self.website(self.ring.previous(from))
    }

    /// Website of a uniformly chosen member.
    #[wasm_bindgen(js_name = randomUrl)]
    pub fn random_url(&mut self) -> Option<String> {
        let position = self.ring.random(&mut self.rng);
        self.website(position)
    }

    fn website(&self, position: Option<usize>) -> Option<String> {
        position
            .and_then(|p| self.ring.get(p))
            .map(|site| site.website.clone())
    }
}

/// Decode a JS config object; undefined or null means all defaults.
fn parse_config(value: JsValue) -> Result<VisualizerConfig, MountError> {
    if value.is_undefined() || value.is_null() {
        return Ok(VisualizerConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| MountError::InvalidConfig(e.to_string()))
}
