//! Pointer-driven editing of the current image.
//!
//! # State Machine
//!
//! ```text
//!            down on image (overlay hidden): show overlay
//!   Idle ─── down on crop handle ──────────▶ Cropping(edge)
//!     ▲  ─── down on corner ───────────────▶ Resizing(corner)
//!     │  ─── down on rotate handle ────────▶ Rotating
//!     │  ─── down on image body ───────────▶ Dragging
//!     │  ─── down elsewhere: hide overlay
//!     └───── up (from any active state): commit
//! ```
//!
//! Handles are tested in that order and the first hit wins. While a gesture
//! is live only the outline is drawn; the full overlay comes back on release.

pub mod ops;

use kurbo::Point;

use crate::config::OverlayStyle;
use crate::drawable::DrawableImage;
use crate::geometry::SurfaceFrame;
use crate::hit::{Corner, Edge};
use crate::overlay::{draw_overlay, Decorations, Icon, OverlayRegions};
use crate::placement::Placement;
use crate::surface::{Cursor, DrawingSurface};

/// What the pointer is currently doing to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging,
    Rotating,
    Resizing(Corner),
    Cropping(Edge),
}

impl Interaction {
    fn cursor(self) -> Cursor {
        match self {
            Interaction::Idle => Cursor::Default,
            Interaction::Dragging => Cursor::Grab,
            Interaction::Rotating => Cursor::Pointer,
            Interaction::Resizing(corner) => corner.cursor(),
            Interaction::Cropping(edge) => edge.cursor(),
        }
    }
}

/// A gesture in progress.
#[derive(Debug, Clone, Copy)]
struct Gesture {
    /// Pointer position at pointer-down, in surface space.
    start: Point,
    /// Placement when the gesture began.
    snapshot: Placement,
    /// Placement shown for the latest pointer position.
    preview: Placement,
}

/// Owns the overlay and turns pointer events into placements.
#[derive(Debug)]
pub struct InteractionController<I> {
    style: OverlayStyle,
    interaction: Interaction,
    gesture: Option<Gesture>,
    overlay_visible: bool,
    regions: Option<OverlayRegions>,
    rotate_icon: Option<Icon<I>>,
}

impl<I> InteractionController<I> {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            interaction: Interaction::Idle,
            gesture: None,
            overlay_visible: false,
            regions: None,
            rotate_icon: None,
        }
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Placement of the gesture in progress, if any.
    pub fn preview(&self) -> Option<Placement> {
        self.gesture.map(|gesture| gesture.preview)
    }

    /// Use a bitmap inside the rotate handle.
    pub fn set_rotate_icon(&mut self, icon: Icon<I>) {
        self.rotate_icon = Some(icon);
    }

    /// Forget the overlay and any gesture, as when a new image becomes current.
    pub fn reset(&mut self) {
        self.interaction = Interaction::Idle;
        self.gesture = None;
        self.overlay_visible = false;
        self.regions = None;
    }

    /// Redraw the committed image and, when shown, the full overlay.
    pub fn render<S>(&mut self, image: &mut DrawableImage<I>, surface: &mut S)
    where
        S: DrawingSurface<Image = I>,
    {
        surface.clear();
        image.draw(surface);
        if self.overlay_visible {
            let placement = image.placement();
            self.regions = draw_overlay(
                surface,
                &placement,
                &self.style,
                Decorations::Full,
                self.rotate_icon.as_ref(),
            );
        }
    }

    /// Handle a press.
    ///
    /// With the overlay hidden, a press on the image only reveals it. With
    /// the overlay shown, the first of crop handle, corner, rotate handle and
    /// image body under the pointer starts the matching gesture; a press on
    /// none of them hides the overlay.
    ///
    /// # Arguments
    ///
    /// * `page` - Pointer position relative to the surface's top-left corner
    /// * `image` - The image being edited; its committed placement is the
    ///   gesture's starting point
    /// * `surface` - Surface the image was last drawn on
    pub fn pointer_down<S>(&mut self, page: Point, image: &mut DrawableImage<I>, surface: &mut S)
    where
        S: DrawingSurface<Image = I>,
    {
        if !self.overlay_visible {
            if image.contains(page) {
                log::debug!("image selected at ({:.1}, {:.1})", page.x, page.y);
                surface.set_cursor(Cursor::Grab);
                self.overlay_visible = true;
                self.render(image, surface);
            }
            return;
        }

        let Some(next) = self.target_at(page, image) else {
            log::debug!("pointer down outside image, hiding overlay");
            self.reset();
            self.render(image, surface);
            surface.set_cursor(Cursor::Default);
            return;
        };

        let snapshot = image.placement();
        self.interaction = next;
        self.gesture = Some(Gesture {
            start: surface_point(surface, page),
            snapshot,
            preview: snapshot,
        });
        surface.set_cursor(next.cursor());
        log::debug!("gesture started: {next:?}");
    }

    /// Handle pointer movement: update the hover cursor when idle, or draw a
    /// live preview of the gesture in progress.
    pub fn pointer_move<S>(&mut self, page: Point, image: &mut DrawableImage<I>, surface: &mut S)
    where
        S: DrawingSurface<Image = I>,
    {
        if !self.overlay_visible {
            return;
        }
        let Some(gesture) = self.gesture.as_mut() else {
            let cursor = self.hover_cursor(page, image);
            surface.set_cursor(cursor);
            return;
        };

        let current = surface_point(surface, page);
        let delta = current - gesture.start;
        let snapshot = &gesture.snapshot;
        gesture.preview = match self.interaction {
            Interaction::Idle => return,
            Interaction::Dragging => ops::drag(snapshot, delta),
            Interaction::Rotating => ops::rotate(snapshot, gesture.start, current),
            Interaction::Resizing(corner) => ops::resize(snapshot, corner, delta),
            Interaction::Cropping(edge) => ops::crop(snapshot, edge, delta),
        };
        let preview = gesture.preview;

        surface.clear();
        if self.interaction == Interaction::Dragging {
            image.draw_at(surface, preview.destination.origin());
        } else {
            image.draw_preview(surface, &preview);
        }
        draw_overlay(surface, &preview, &self.style, Decorations::EdgesOnly, None);
    }

    /// Finish the gesture in progress.
    ///
    /// Commits the previewed placement to `image` and returns it. The caller
    /// is expected to redraw; nothing is drawn here. Returns `None` when no
    /// gesture was active.
    pub fn pointer_up<S>(&mut self, image: &mut DrawableImage<I>, surface: &mut S) -> Option<Placement>
    where
        S: DrawingSurface<Image = I>,
    {
        let gesture = self.gesture.take()?;
        log::debug!("gesture finished: {:?}", self.interaction);
        self.interaction = Interaction::Idle;
        image.set_placement(gesture.preview);
        surface.set_cursor(Cursor::Default);
        Some(gesture.preview)
    }

    /// Which gesture a pointer-down at `page` starts, or `None` when it
    /// misses the image and every handle.
    fn target_at(&self, page: Point, image: &DrawableImage<I>) -> Option<Interaction> {
        if let Some(regions) = &self.regions {
            if let Some(edge) = regions.crop_at(page) {
                return Some(Interaction::Cropping(edge));
            }
            if let Some(corner) = regions.corner_at(page) {
                return Some(Interaction::Resizing(corner));
            }
            if regions.rotate_contains(page) {
                return Some(Interaction::Rotating);
            }
        }
        image.contains(page).then_some(Interaction::Dragging)
    }

    /// Cursor for an idle pointer. Unlike pointer-down, the image body is
    /// checked before the rotate handle.
    fn hover_cursor(&self, page: Point, image: &DrawableImage<I>) -> Cursor {
        if let Some(regions) = &self.regions {
            if let Some(edge) = regions.crop_at(page) {
                return edge.cursor();
            }
            if let Some(corner) = regions.corner_at(page) {
                return corner.cursor();
            }
            if image.contains(page) {
                return Cursor::Grab;
            }
            if regions.rotate_contains(page) {
                return Cursor::Pointer;
            }
        }
        if image.contains(page) {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }
}

/// Convert a page point into the surface's current coordinate space.
fn surface_point<S: DrawingSurface>(surface: &S, page: Point) -> Point {
    SurfaceFrame::from_affine(surface.transform()).to_local(page)
}
