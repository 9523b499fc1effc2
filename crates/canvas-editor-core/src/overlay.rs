//! Selection overlay drawn around the current image.
//!
//! All overlay geometry is derived from the placement every frame and laid
//! out in image-local space, so the same numbers serve for drawing and hit
//! testing regardless of rotation.

use kurbo::{Point, Rect, Size};

use crate::config::OverlayStyle;
use crate::geometry::SurfaceFrame;
use crate::hit::{Corner, Edge, HitRegion};
use crate::placement::Placement;
use crate::surface::DrawingSurface;

/// How much of the overlay to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decorations {
    /// Outline only, used while a gesture is live.
    EdgesOnly,
    /// Outline plus every handle.
    Full,
}

/// Overlay geometry in image-local space.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    pub outline: Rect,
    pub crop_handles: [(Edge, Rect); 4],
    pub corner_handles: [(Corner, Point); 4],
    pub rotate_handle: Point,
}

impl OverlayLayout {
    pub fn new(placement: &Placement, style: &OverlayStyle) -> Self {
        let outline = placement.local_rect();
        let along = style.crop_handle_length;
        let across = style.crop_handle_thickness;
        let crop_handles = Edge::ALL.map(|edge| {
            let size = if edge.is_horizontal() {
                Size::new(across, along)
            } else {
                Size::new(along, across)
            };
            (edge, Rect::from_center_size(edge.midpoint_on(outline), size))
        });
        let corner_handles = Corner::ALL.map(|corner| (corner, corner.point_on(outline)));
        let rotate_handle = Point::new(0.0, outline.y1 + style.rotate_margin);

        Self {
            outline,
            crop_handles,
            corner_handles,
            rotate_handle,
        }
    }
}

/// A bitmap drawn inside the rotate handle.
#[derive(Debug, Clone)]
pub struct Icon<I> {
    pub image: I,
    /// Natural size of the bitmap.
    pub size: Size,
}

/// Handle regions recorded by the last full overlay draw.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRegions {
    crop: [(Edge, HitRegion); 4],
    corners: [(Corner, HitRegion); 4],
    rotate: HitRegion,
}

impl OverlayRegions {
    pub fn new(layout: &OverlayLayout, style: &OverlayStyle, frame: SurfaceFrame) -> Self {
        Self {
            crop: layout
                .crop_handles
                .map(|(edge, rect)| (edge, HitRegion::rect(rect, frame))),
            corners: layout.corner_handles.map(|(corner, center)| {
                (corner, HitRegion::circle(center, style.corner_radius, frame))
            }),
            rotate: HitRegion::circle(layout.rotate_handle, style.rotate_radius, frame),
        }
    }

    /// First crop handle under a page-space point.
    pub fn crop_at(&self, page: Point) -> Option<Edge> {
        self.crop
            .iter()
            .find(|(_, region)| region.contains(page))
            .map(|(edge, _)| *edge)
    }

    /// First corner handle under a page-space point.
    pub fn corner_at(&self, page: Point) -> Option<Corner> {
        self.corners
            .iter()
            .find(|(_, region)| region.contains(page))
            .map(|(corner, _)| *corner)
    }

    pub fn rotate_contains(&self, page: Point) -> bool {
        self.rotate.contains(page)
    }
}

/// Draw the overlay for `placement`.
///
/// Returns the handle regions when `decorations` is [`Decorations::Full`];
/// an outline-only draw records nothing.
pub fn draw_overlay<S: DrawingSurface>(
    surface: &mut S,
    placement: &Placement,
    style: &OverlayStyle,
    decorations: Decorations,
    rotate_icon: Option<&Icon<S::Image>>,
) -> Option<OverlayRegions> {
    let layout = OverlayLayout::new(placement, style);

    surface.save();
    surface.translate(placement.center().to_vec2());
    surface.rotate(placement.rotation);

    surface.set_shadow(style.shadow.as_ref());
    surface.stroke_rect(layout.outline, &style.edge_color, style.edge_width);
    surface.set_shadow(None);

    let regions = match decorations {
        Decorations::EdgesOnly => None,
        Decorations::Full => {
            for (_, rect) in &layout.crop_handles {
                surface.fill_rect(*rect, &style.handle_color);
            }
            for (_, center) in &layout.corner_handles {
                surface.fill_circle(*center, style.corner_radius, &style.handle_color);
            }
            surface.fill_circle(layout.rotate_handle, style.rotate_radius, &style.handle_color);
            if let Some(icon) = rotate_icon {
                let target = Rect::from_center_size(
                    layout.rotate_handle,
                    Size::new(style.rotate_radius, style.rotate_radius),
                );
                let source = Rect::from_origin_size(Point::ORIGIN, icon.size);
                surface.draw_image(&icon.image, source, target);
            }

            let frame = SurfaceFrame::from_affine(surface.transform());
            Some(OverlayRegions::new(&layout, style, frame))
        }
    };

    surface.restore();
    regions
}
