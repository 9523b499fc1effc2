//! Canvas Editor Core - interactive image placement on a 2D surface
//!
//! This crate holds everything about editing an image on a canvas that does
//! not need a browser: placement geometry, hit testing, the selection overlay
//! and the pointer-driven interaction controller. Drawing goes through the
//! [`DrawingSurface`] trait, which the wasm crate implements for a web canvas.

pub mod config;
pub mod drawable;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod interaction;
pub mod overlay;
pub mod placement;
pub mod surface;

pub use config::{EditorConfig, OverlayStyle};
pub use drawable::DrawableImage;
pub use editor::{Editor, LoadTicket};
pub use error::EditorError;
pub use hit::{Corner, Edge, HitRegion};
pub use interaction::{Interaction, InteractionController};
pub use overlay::{Decorations, Icon};
pub use placement::{at_least_minimum, fit_within, Placement, MIN_DIMENSION};
pub use surface::{Cursor, DrawingSurface, Shadow};
