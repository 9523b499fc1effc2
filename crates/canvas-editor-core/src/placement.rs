//! Where and how an image is drawn.
//!
//! A [`Placement`] is a plain value. Interactions never patch it in place:
//! every update builds a new `Placement` from the one captured when the
//! gesture started, and the drawable image swaps it in wholesale on commit.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::{rotate_vec, SurfaceFrame};

/// Smallest width or height a destination rectangle may shrink to.
pub const MIN_DIMENSION: f64 = 10.0;

/// Source crop, destination rectangle and rotation of one image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Region of the original bitmap being drawn.
    pub source: Rect,
    /// Unrotated on-surface rectangle the source is drawn into.
    pub destination: Rect,
    /// Rotation about the destination center, in radians.
    pub rotation: f64,
    /// Dimensions of the uncropped bitmap.
    pub original: Size,
}

impl Placement {
    /// Place a whole image, fitted into `max_size` and centered on a surface
    /// of `surface_size`.
    ///
    /// Neither side ends up shorter than [`MIN_DIMENSION`]. A very thin or
    /// very small image is scaled up until its short side reaches the
    /// minimum, which may take the long side past `max_size`.
    pub fn fitted(original: Size, surface_size: Size, max_size: Size) -> Self {
        let size = at_least_minimum(fit_within(original, max_size));
        let origin = Point::new(
            (surface_size.width - size.width) / 2.0,
            (surface_size.height - size.height) / 2.0,
        );
        Self {
            source: Rect::from_origin_size(Point::ORIGIN, original),
            destination: Rect::from_origin_size(origin, size),
            rotation: 0.0,
            original,
        }
    }

    /// Center of the destination rectangle; the pivot for rotation.
    pub fn center(&self) -> Point {
        self.destination.center()
    }

    /// Destination width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.destination.width() / self.destination.height()
    }

    /// Frame whose origin is the destination center, rotated by the placement angle.
    pub fn image_frame(&self) -> SurfaceFrame {
        SurfaceFrame::new(self.center(), self.rotation)
    }

    /// The destination rectangle in image-local space (centered on the origin).
    pub fn local_rect(&self) -> Rect {
        Rect::from_center_size(Point::ORIGIN, self.destination.size())
    }

    /// Horizontal and vertical scale from destination units to source pixels.
    pub fn source_scale(&self) -> Vec2 {
        Vec2::new(
            self.source.width() / self.destination.width(),
            self.source.height() / self.destination.height(),
        )
    }

    /// Copy with the destination moved to a new top-left origin.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self {
            destination: self.destination.with_origin(origin),
            ..*self
        }
    }

    /// Copy with a new rotation angle.
    pub fn with_rotation(&self, rotation: f64) -> Self {
        Self { rotation, ..*self }
    }

    /// Copy with the destination resized to `size` around a center expressed in
    /// image-local space.
    ///
    /// The local center is mapped through the rotation, so moving it along the
    /// image's own axes keeps the opposite edge fixed on screen.
    pub fn with_destination(&self, local_center: Point, size: Size) -> Self {
        let center = self.center() + rotate_vec(local_center.to_vec2(), self.rotation);
        Self {
            destination: Rect::from_center_size(center, size),
            ..*self
        }
    }

    /// Whether the source lies inside the bitmap and the destination is not
    /// smaller than [`MIN_DIMENSION`].
    pub fn is_valid(&self) -> bool {
        const TOLERANCE: f64 = 1e-6;
        self.source.x0 >= -TOLERANCE
            && self.source.y0 >= -TOLERANCE
            && self.source.x1 <= self.original.width + TOLERANCE
            && self.source.y1 <= self.original.height + TOLERANCE
            && self.destination.width() >= MIN_DIMENSION - TOLERANCE
            && self.destination.height() >= MIN_DIMENSION - TOLERANCE
    }
}

/// Scale `size` down to fit inside `max`, preserving aspect ratio.
///
/// Images already within bounds are returned unchanged; images are never
/// scaled up.
pub fn fit_within(size: Size, max: Size) -> Size {
    if size.width <= max.width && size.height <= max.height {
        return size;
    }
    let scale = (max.width / size.width).min(max.height / size.height);
    Size::new(size.width * scale, size.height * scale)
}

/// Scale `size` up, preserving aspect ratio, until both sides are at least
/// [`MIN_DIMENSION`]. Sizes already large enough are returned unchanged.
pub fn at_least_minimum(size: Size) -> Size {
    let short = size.width.min(size.height);
    if short >= MIN_DIMENSION {
        return size;
    }
    let scale = MIN_DIMENSION / short;
    Size::new(size.width * scale, size.height * scale)
}
