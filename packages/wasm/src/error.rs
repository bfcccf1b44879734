//! Errors raised while attaching to the page.
//!
//! Frames themselves never fail; everything that can go wrong happens once,
//! when the canvas and its context are acquired or JS input is decoded.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("canvas 2d context unavailable")]
    ContextUnavailable,
    #[error("invalid visualizer config: {0}")]
    InvalidConfig(String),
    #[error("invalid member list: {0}")]
    InvalidSites(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl MountError {
    /// Wrap a thrown JS value.
    pub fn js(err: JsValue) -> Self {
        MountError::Js(format!("{err:?}"))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
