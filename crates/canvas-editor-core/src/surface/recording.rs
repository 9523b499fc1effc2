//! In-memory surface that records draw calls, for tests.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use super::{Cursor, DrawingSurface, Shadow};

/// One recorded draw call, with the transform active when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawOp {
    Clear,
    StrokeRect { rect: Rect, transform: Affine },
    FillRect { rect: Rect, transform: Affine },
    FillCircle { center: Point, radius: f64, transform: Affine },
    Image { image: u32, source: Rect, destination: Rect, transform: Affine },
}

#[derive(Debug, Clone)]
pub(crate) struct RecordingSurface {
    size: Size,
    transform: Affine,
    stack: Vec<Affine>,
    pub(crate) ops: Vec<DrawOp>,
    pub(crate) cursor: Cursor,
    pub(crate) shadowed: bool,
}

impl RecordingSurface {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            ops: Vec::new(),
            cursor: Cursor::Default,
            shadowed: false,
        }
    }

    /// Depth of unmatched `save` calls.
    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn images(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .collect()
    }

    pub(crate) fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
            .count()
    }

    pub(crate) fn filled_rects(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { .. }))
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    /// Images are identified by a number.
    type Image = u32;

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.transform = Affine::IDENTITY;
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
        self.shadowed = false;
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine::translate(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform * Affine::rotate(radians);
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_shadow(&mut self, shadow: Option<&Shadow>) {
        self.shadowed = shadow.is_some();
    }

    fn stroke_rect(&mut self, rect: Rect, _color: &str, _line_width: f64) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            transform: self.transform,
        });
    }

    fn fill_rect(&mut self, rect: Rect, _color: &str) {
        self.ops.push(DrawOp::FillRect {
            rect,
            transform: self.transform,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, _color: &str) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            transform: self.transform,
        });
    }

    fn draw_image(&mut self, image: &u32, source: Rect, destination: Rect) {
        self.ops.push(DrawOp::Image {
            image: *image,
            source,
            destination,
            transform: self.transform,
        });
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}
