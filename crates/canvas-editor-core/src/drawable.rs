//! A loaded image bound to its placement.

use kurbo::Point;

use crate::geometry::SurfaceFrame;
use crate::hit::HitRegion;
use crate::placement::Placement;
use crate::surface::DrawingSurface;

/// One image and the placement it is drawn with.
///
/// Each draw records the region the image covers so pointer events can be
/// tested against what is actually on screen.
#[derive(Debug, Clone)]
pub struct DrawableImage<I> {
    image: I,
    placement: Placement,
    region: Option<HitRegion>,
}

impl<I> DrawableImage<I> {
    pub fn new(image: I, placement: Placement) -> Self {
        Self {
            image,
            placement,
            region: None,
        }
    }

    /// The committed placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Replace the committed placement.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Whether a page-space point lies on the image as last drawn.
    pub fn contains(&self, page: Point) -> bool {
        self.region.is_some_and(|region| region.contains(page))
    }

    /// Draw with the committed placement.
    pub fn draw<S>(&mut self, surface: &mut S)
    where
        S: DrawingSurface<Image = I>,
    {
        let placement = self.placement;
        self.draw_preview(surface, &placement);
    }

    /// Draw with the destination moved to `origin`, leaving the committed
    /// placement untouched.
    pub fn draw_at<S>(&mut self, surface: &mut S, origin: Point)
    where
        S: DrawingSurface<Image = I>,
    {
        let placement = self.placement.with_origin(origin);
        self.draw_preview(surface, &placement);
    }

    /// Draw an uncommitted placement.
    pub fn draw_preview<S>(&mut self, surface: &mut S, placement: &Placement)
    where
        S: DrawingSurface<Image = I>,
    {
        surface.save();
        surface.translate(placement.center().to_vec2());
        surface.rotate(placement.rotation);

        let local = placement.local_rect();
        surface.draw_image(&self.image, placement.source, local);
        self.region = Some(HitRegion::rect(
            local,
            SurfaceFrame::from_affine(surface.transform()),
        ));

        surface.restore();
    }
}
