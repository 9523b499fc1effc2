//! The drawing surface the editor renders through.
//!
//! The trait mirrors the subset of the canvas 2D API the editor needs. The
//! web binding implements it over `CanvasRenderingContext2d`; tests use a
//! recording implementation that tracks the transform stack.

use kurbo::{Affine, Point, Rect, Size};
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub(crate) mod recording;

/// Cursor hints the editor asks the surface to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Over the image body, or while dragging it.
    Grab,
    /// Over the rotate handle.
    Pointer,
    /// Over the left or right crop handle.
    HorizontalResize,
    /// Over the top or bottom crop handle.
    VerticalResize,
    /// Over the top-right or bottom-left corner.
    NeswResize,
    /// Over the top-left or bottom-right corner.
    NwseResize,
}

impl Cursor {
    /// The CSS `cursor` value for this hint.
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
            Cursor::Pointer => "pointer",
            Cursor::HorizontalResize => "e-resize",
            Cursor::VerticalResize => "n-resize",
            Cursor::NeswResize => "nesw-resize",
            Cursor::NwseResize => "nwse-resize",
        }
    }
}

/// Drop shadow applied to subsequent strokes and fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shadow {
    /// CSS color.
    pub color: String,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: "rgba(0, 0, 0, 0.4)".to_string(),
            blur: 8.0,
            offset_x: 3.0,
            offset_y: 3.0,
        }
    }
}

/// A 2D drawing surface with a canvas-style transform stack.
///
/// Colors are CSS color strings. Transforms compose onto the current one, as
/// `translate`/`rotate` do on a canvas context.
pub trait DrawingSurface {
    /// Decoded bitmap type the surface can blit.
    type Image;

    /// Size of the drawing area.
    fn size(&self) -> Size;

    /// Reset the transform to identity and erase every pixel.
    fn clear(&mut self);

    /// Push the transform and style state.
    fn save(&mut self);

    /// Pop the state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Compose a translation onto the current transform.
    fn translate(&mut self, offset: kurbo::Vec2);

    /// Compose a rotation (radians, clockwise on screen) onto the current transform.
    fn rotate(&mut self, radians: f64);

    /// The transform currently in effect.
    fn transform(&self) -> Affine;

    fn set_shadow(&mut self, shadow: Option<&Shadow>);

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64);

    fn fill_rect(&mut self, rect: Rect, color: &str);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);

    /// Blit the `source` region of `image` into `destination`.
    fn draw_image(&mut self, image: &Self::Image, source: Rect, destination: Rect);

    fn set_cursor(&mut self, cursor: Cursor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_css_values() {
        assert_eq!(Cursor::default().as_css(), "default");
        assert_eq!(Cursor::Grab.as_css(), "grab");
        assert_eq!(Cursor::HorizontalResize.as_css(), "e-resize");
        assert_eq!(Cursor::VerticalResize.as_css(), "n-resize");
        assert_eq!(Cursor::NeswResize.as_css(), "nesw-resize");
        assert_eq!(Cursor::NwseResize.as_css(), "nwse-resize");
    }

    #[test]
    fn test_shadow_default() {
        let shadow = Shadow::default();
        assert_eq!(shadow.color, "rgba(0, 0, 0, 0.4)");
        assert_eq!(shadow.blur, 8.0);
    }
}
