//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement};

use webring_orbit_wasm::render::CanvasSurface;
use webring_orbit_wasm::runner::Listener;
use webring_orbit_wasm::scene::OrbitalVisualizer;
use webring_orbit_wasm::{OrbitRingWasm, WebRingWasm, is_mounted, mount, unmount};

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn test_mount_missing_canvas_returns_none() {
    assert!(mount("no-such-canvas").is_none());
}

#[wasm_bindgen_test]
fn test_mounted_loop_outlives_its_handle() {
    add_canvas("ring-canvas-mount");
    let _ = mount("ring-canvas-mount");
    assert!(is_mounted("ring-canvas-mount"));

    assert!(unmount("ring-canvas-mount"));
    assert!(!is_mounted("ring-canvas-mount"));
    assert!(!unmount("ring-canvas-mount"));
}

#[wasm_bindgen_test]
fn test_listener_detaches_on_drop() {
    let window = web_sys::window().unwrap();
    let calls = Rc::new(Cell::new(0u32));
    let callback = {
        let calls = calls.clone();
        Closure::wrap(Box::new(move |_: Event| calls.set(calls.get() + 1)) as Box<dyn FnMut(Event)>)
    };
    let listener = Listener::register(&window, "orbit-ring-test", callback).unwrap();

    let event = Event::new("orbit-ring-test").unwrap();
    window.dispatch_event(&event).unwrap();
    assert_eq!(calls.get(), 1);

    drop(listener);
    window.dispatch_event(&event).unwrap();
    assert_eq!(calls.get(), 1);
}

#[wasm_bindgen_test]
fn test_constructor_rejects_missing_canvas() {
    assert!(OrbitRingWasm::new("still-missing", JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_start_and_stop() {
    add_canvas("ring-canvas-start");
    let mut ring = OrbitRingWasm::new("ring-canvas-start", JsValue::UNDEFINED).unwrap();
    assert!(!ring.is_running());
    ring.start();
    assert!(ring.is_running());
    ring.stop();
    assert!(!ring.is_running());
}

#[wasm_bindgen_test]
fn test_canvas_surface_draws_frames() {
    let canvas = add_canvas("ring-canvas-draw");
    canvas.set_width(800);
    canvas.set_height(600);
    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();

    let mut surface = CanvasSurface::new(ctx);
    let mut visualizer = OrbitalVisualizer::with_defaults(800.0, 600.0, 3);
    for _ in 0..10 {
        visualizer.step(&mut surface);
    }
    assert_eq!(visualizer.node_count(), 19 + 30);
}

#[wasm_bindgen_test]
fn test_webring_from_js() {
    let sites = js_sys::JSON::parse(
        r#"[
            {"name": "Ada", "year": 2026, "website": "https://ada.dev", "internships": [{"company": "Acme"}]},
            {"name": "Bob", "website": "https://bob.dev/"}
        ]"#,
    )
    .unwrap();
    let mut ring = WebRingWasm::new(sites).unwrap();
    assert_eq!(ring.len(), 2);
    assert_eq!(ring.next_url("https://ada.dev/").as_deref(), Some("https://bob.dev/"));
    assert_eq!(ring.previous_url("https://ada.dev").as_deref(), Some("https://bob.dev/"));
    assert!(ring.random_url().is_some());
}
