//! Canvas Editor WASM - browser bindings for the canvas editor
//!
//! This crate binds `canvas-editor-core` to an HTML `<canvas>` element: it
//! draws through the canvas 2D context, loads images via `<img>` elements and
//! turns DOM mouse events into editor pointer events.
//!
//! # Module Structure
//!
//! - `editor` - the exported `CanvasEditor` class and its DOM listeners
//! - `surface` - `DrawingSurface` implementation for `CanvasRenderingContext2d`
//! - `loader` - asynchronous image loading
//! - `types` - JavaScript-facing data types
//! - `logging` - `log` backend for the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { CanvasEditor } from '@canvas-editor/wasm';
//!
//! await init();
//!
//! const editor = new CanvasEditor(document.querySelector('canvas'), {});
//! await editor.load_image('/photos/cat.jpg');
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod loader;
mod logging;
mod surface;
mod types;

pub use editor::CanvasEditor;
pub use surface::WebCanvasSurface;
pub use types::JsPlacement;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
