//! JavaScript-facing data types.
//!
//! These are plain serde structs converted with `serde-wasm-bindgen`, so they
//! reach JavaScript as ordinary objects rather than wrapped class handles.

use canvas_editor_core::{EditorConfig, Placement};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Placement of the current image as seen from JavaScript.
///
/// `source*` fields are in bitmap pixels, the rest in canvas pixels.
/// `rotation` is in radians, clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsPlacement {
    pub source_x: f64,
    pub source_y: f64,
    pub source_width: f64,
    pub source_height: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub natural_width: f64,
    pub natural_height: f64,
}

impl From<Placement> for JsPlacement {
    fn from(placement: Placement) -> Self {
        let Placement {
            source,
            destination,
            rotation,
            original,
        } = placement;
        Self {
            source_x: source.x0,
            source_y: source.y0,
            source_width: source.width(),
            source_height: source.height(),
            x: destination.x0,
            y: destination.y0,
            width: destination.width(),
            height: destination.height(),
            rotation,
            natural_width: original.width,
            natural_height: original.height,
        }
    }
}

pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub(crate) fn placement_to_js(placement: Placement) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&JsPlacement::from(placement)).map_err(to_js_error)
}

/// Read editor options. `undefined` and `null` give the defaults.
pub(crate) fn config_from_js(options: JsValue) -> Result<EditorConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(EditorConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid editor options: {}", e)))
}
