//! Editor configuration.
//!
//! Every field has a default, so callers can pass a partial object and only
//! override what they need.

use kurbo::Size;
use serde::{Deserialize, Serialize};

use crate::surface::Shadow;

/// Surface size and image fit bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Largest width a freshly loaded image is displayed at.
    pub max_image_width: f64,
    /// Largest height a freshly loaded image is displayed at.
    pub max_image_height: f64,
    pub overlay: OverlayStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            max_image_width: 400.0,
            max_image_height: 300.0,
            overlay: OverlayStyle::default(),
        }
    }
}

impl EditorConfig {
    pub fn surface_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_image_size(&self) -> Size {
        Size::new(self.max_image_width, self.max_image_height)
    }
}

/// Appearance and size of the selection overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayStyle {
    pub edge_color: String,
    pub edge_width: f64,
    pub handle_color: String,
    /// Shadow cast by the edge outline.
    pub shadow: Option<Shadow>,
    pub corner_radius: f64,
    /// Length of a crop handle along its edge.
    pub crop_handle_length: f64,
    /// Thickness of a crop handle across its edge.
    pub crop_handle_thickness: f64,
    pub rotate_radius: f64,
    /// Distance from the bottom edge to the rotate handle's center.
    pub rotate_margin: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            edge_color: "white".to_string(),
            edge_width: 2.0,
            handle_color: "white".to_string(),
            shadow: Some(Shadow::default()),
            corner_radius: 6.0,
            crop_handle_length: 24.0,
            crop_handle_thickness: 6.0,
            rotate_radius: 15.0,
            rotate_margin: 40.0,
        }
    }
}
