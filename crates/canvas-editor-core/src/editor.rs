//! Surface manager: owns the drawing surface and the current image.

use kurbo::{Point, Size};

use crate::config::EditorConfig;
use crate::drawable::DrawableImage;
use crate::error::EditorError;
use crate::interaction::{Interaction, InteractionController};
use crate::overlay::Icon;
use crate::placement::Placement;
use crate::surface::DrawingSurface;

/// Identifies one load request. Only the most recent ticket may finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Binds a drawing surface, the image being edited and the controller that
/// edits it.
pub struct Editor<S: DrawingSurface> {
    surface: S,
    config: EditorConfig,
    image: Option<DrawableImage<S::Image>>,
    controller: InteractionController<S::Image>,
    next_ticket: u64,
    pending: Option<LoadTicket>,
}

impl<S: DrawingSurface> Editor<S> {
    /// Create an editor drawing onto `surface`.
    ///
    /// # Arguments
    ///
    /// * `surface` - Drawing surface, already sized to the canvas
    /// * `config` - Fit bounds and overlay style; the surface size is read
    ///   from `surface`, not from `config`
    pub fn new(surface: S, config: EditorConfig) -> Self {
        let controller = InteractionController::new(config.overlay.clone());
        Self {
            surface,
            config,
            image: None,
            controller,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn controller(&self) -> &InteractionController<S::Image> {
        &self.controller
    }

    /// Committed placement of the current image.
    pub fn placement(&self) -> Option<Placement> {
        self.image.as_ref().map(DrawableImage::placement)
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Start a load. Any load still in flight is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        if let Some(previous) = self.pending.replace(ticket) {
            log::debug!("load {} superseded by {}", previous.0, ticket.0);
        }
        ticket
    }

    /// Finish a load with the decoded image and its natural size.
    ///
    /// The image is fitted into the configured bounds, centered on the
    /// surface and drawn. It replaces any previous image, and the overlay
    /// starts hidden.
    ///
    /// # Arguments
    ///
    /// * `ticket` - Ticket returned by [`begin_load`](Self::begin_load)
    /// * `image` - Decoded bitmap
    /// * `natural_size` - Bitmap dimensions in pixels
    ///
    /// # Returns
    ///
    /// The initial placement. Both destination sides are at least
    /// [`MIN_DIMENSION`](crate::MIN_DIMENSION).
    ///
    /// # Errors
    ///
    /// * [`EditorError::StaleLoad`] if a later load superseded `ticket`, the
    ///   ticket already finished, or the editor was cleared since
    /// * [`EditorError::DegenerateImage`] if either dimension is not positive
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        image: S::Image,
        natural_size: Size,
    ) -> Result<Placement, EditorError> {
        self.check_ticket(ticket)?;
        self.pending = None;

        if !(natural_size.width > 0.0 && natural_size.height > 0.0) {
            log::warn!(
                "rejecting image with size {}x{}",
                natural_size.width,
                natural_size.height
            );
            return Err(EditorError::DegenerateImage {
                width: natural_size.width,
                height: natural_size.height,
            });
        }

        let placement = Placement::fitted(
            natural_size,
            self.surface.size(),
            self.config.max_image_size(),
        );
        log::info!(
            "image loaded: {}x{} displayed at {:.0}x{:.0}",
            natural_size.width,
            natural_size.height,
            placement.destination.width(),
            placement.destination.height()
        );

        self.image = Some(DrawableImage::new(image, placement));
        self.controller.reset();
        self.redraw();
        Ok(placement)
    }

    /// Abandon a load whose image could not be decoded.
    ///
    /// # Returns
    ///
    /// [`EditorError::Decode`] carrying `reason`, or
    /// [`EditorError::StaleLoad`] when `ticket` is no longer current.
    pub fn fail_load(&mut self, ticket: LoadTicket, reason: impl Into<String>) -> EditorError {
        if let Err(stale) = self.check_ticket(ticket) {
            return stale;
        }
        self.pending = None;
        let reason = reason.into();
        log::warn!("image load {} failed: {reason}", ticket.0);
        EditorError::Decode(reason)
    }

    fn check_ticket(&self, ticket: LoadTicket) -> Result<(), EditorError> {
        match self.pending {
            Some(current) if current == ticket => Ok(()),
            current => {
                let current = current.map_or(self.next_ticket, LoadTicket::id);
                log::debug!("dropping stale load {} (current {current})", ticket.0);
                Err(EditorError::StaleLoad {
                    ticket: ticket.0,
                    current,
                })
            }
        }
    }

    /// Show `image` inside the rotate handle.
    ///
    /// # Arguments
    ///
    /// * `image` - Decoded icon bitmap
    /// * `size` - Natural size of the bitmap; it is drawn scaled into the handle
    pub fn set_rotate_icon(&mut self, image: S::Image, size: Size) {
        self.controller.set_rotate_icon(Icon { image, size });
        if self.controller.is_overlay_visible() {
            self.redraw();
        }
    }

    /// Clear the surface and draw the current image with its overlay.
    pub fn redraw(&mut self) {
        match self.image.as_mut() {
            Some(image) => self.controller.render(image, &mut self.surface),
            None => self.surface.clear(),
        }
    }

    /// Drop the current image and blank the surface.
    ///
    /// A load still in flight is abandoned and will finish with
    /// [`EditorError::StaleLoad`].
    pub fn clear(&mut self) {
        self.image = None;
        self.pending = None;
        self.controller.reset();
        self.surface.clear();
    }

    /// Press at `page`, in canvas pixels from the top-left corner.
    ///
    /// Selects the image, starts a gesture on a handle or the image body, or
    /// hides the overlay when the press misses everything. Ignored when no
    /// image is loaded.
    pub fn pointer_down(&mut self, page: Point) {
        if let Some(image) = self.image.as_mut() {
            self.controller.pointer_down(page, image, &mut self.surface);
        }
    }

    pub fn pointer_move(&mut self, page: Point) {
        if let Some(image) = self.image.as_mut() {
            self.controller.pointer_move(page, image, &mut self.surface);
        }
    }

    /// Finish the current gesture. A committed placement triggers a full
    /// redraw and is returned.
    pub fn pointer_up(&mut self, _page: Point) -> Option<Placement> {
        let image = self.image.as_mut()?;
        let committed = self.controller.pointer_up(image, &mut self.surface)?;
        self.redraw();
        Some(committed)
    }

    pub fn interaction(&self) -> Interaction {
        self.controller.interaction()
    }
}
