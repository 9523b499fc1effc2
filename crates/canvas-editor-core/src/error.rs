//! Error types for the editor.

use thiserror::Error;

/// Errors surfaced by the surface manager.
///
/// Geometry updates never fail; they are clamped instead. Errors only arise
/// around image loading, where the caller can retry with another source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// The load request had no source to read from.
    #[error("Image source is empty")]
    EmptySource,

    /// The decoded image has no usable area.
    #[error("Image has degenerate dimensions {width}x{height}")]
    DegenerateImage { width: f64, height: f64 },

    /// A newer load request superseded this one.
    #[error("Load {ticket} was superseded by load {current}")]
    StaleLoad { ticket: u64, current: u64 },

    /// The image could not be decoded.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The canvas did not provide a 2D rendering context.
    #[error("Canvas has no 2D rendering context")]
    NoSurfaceContext,
}
