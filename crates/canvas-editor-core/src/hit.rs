//! Hit-testable regions recorded while drawing.
//!
//! A region is stored in the local coordinates it was drawn in, together with
//! the surface transform active at that moment. Pointer events arrive in page
//! space, so containment maps the pointer through the inverse of that
//! transform before testing the shape.

use kurbo::{Circle, Point, Rect, Shape};

use crate::geometry::SurfaceFrame;
use crate::surface::Cursor;

/// Resize handles on the corners of the selected image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Whether dragging this corner to the right shrinks the image.
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// The corner's position on `rect`.
    pub fn point_on(self, rect: Rect) -> Point {
        match self {
            Corner::TopLeft => Point::new(rect.x0, rect.y0),
            Corner::TopRight => Point::new(rect.x1, rect.y0),
            Corner::BottomLeft => Point::new(rect.x0, rect.y1),
            Corner::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }

    pub fn cursor(self) -> Cursor {
        match self {
            Corner::TopRight | Corner::BottomLeft => Cursor::NeswResize,
            Corner::TopLeft | Corner::BottomRight => Cursor::NwseResize,
        }
    }
}

/// Crop handles centered on each edge of the selected image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Left and right edges crop horizontally.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    /// Midpoint of this edge on `rect`.
    pub fn midpoint_on(self, rect: Rect) -> Point {
        let center = rect.center();
        match self {
            Edge::Top => Point::new(center.x, rect.y0),
            Edge::Right => Point::new(rect.x1, center.y),
            Edge::Bottom => Point::new(center.x, rect.y1),
            Edge::Left => Point::new(rect.x0, center.y),
        }
    }

    pub fn cursor(self) -> Cursor {
        if self.is_horizontal() {
            Cursor::HorizontalResize
        } else {
            Cursor::VerticalResize
        }
    }
}

/// Local-space shape of a hit region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionShape {
    Rect(Rect),
    Circle(Circle),
}

/// A shape plus the surface frame it was drawn under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub shape: RegionShape,
    pub frame: SurfaceFrame,
}

impl HitRegion {
    pub fn rect(rect: Rect, frame: SurfaceFrame) -> Self {
        Self {
            shape: RegionShape::Rect(rect),
            frame,
        }
    }

    pub fn circle(center: Point, radius: f64, frame: SurfaceFrame) -> Self {
        Self {
            shape: RegionShape::Circle(Circle::new(center, radius)),
            frame,
        }
    }

    /// Whether a page-space point falls inside the region.
    pub fn contains(&self, page: Point) -> bool {
        let local = self.frame.to_local(page);
        match self.shape {
            RegionShape::Rect(rect) => {
                local.x >= rect.x0 && local.x <= rect.x1 && local.y >= rect.y0 && local.y <= rect.y1
            }
            RegionShape::Circle(circle) => circle.contains(local),
        }
    }
}
