//! 2D geometry helpers shared by the drawable image and the controller.
//!
//! # Coordinate System
//!
//! - Page space: pointer coordinates relative to the canvas element's top-left
//!   corner, y pointing down.
//! - Surface space: the canvas coordinate system under its current transform.
//!   Between draw calls the editor keeps the canvas transform at identity, so
//!   surface space and page space normally coincide.
//! - Image-local space: origin at the destination rectangle's center, axes
//!   rotated by the placement angle. Overlay handles live here.
//!
//! Angles are in radians, positive = clockwise on screen (canvas convention).

use std::f64::consts::{PI, TAU};

use kurbo::{Affine, Point, Vec2};

/// Wrap an angle into the range `[-π, π)`.
pub fn normalize_angle(radians: f64) -> f64 {
    (radians + PI).rem_euclid(TAU) - PI
}

/// Signed angle swept from `start` to `end` around `center`.
///
/// The result is normalized to `[-π, π)`, so a pointer circling the center
/// reports the short way round.
pub fn rotation_between(start: Point, center: Point, end: Point) -> f64 {
    let from = start - center;
    let to = end - center;
    normalize_angle(to.y.atan2(to.x) - from.y.atan2(from.x))
}

/// Express a surface-space vector in the axes of an image rotated by `angle`.
///
/// The `x` component of the result runs along the image's own width, the `y`
/// component along its height.
pub fn to_image_axes(delta: Vec2, angle: f64) -> Vec2 {
    rotate_vec(delta, -angle)
}

/// Rotate a vector by `angle` radians.
pub fn rotate_vec(v: Vec2, angle: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotation and translation read out of a surface transform.
///
/// This is the one conversion between page space and a rotated/translated
/// local space. Scale and skew are not part of the editor's transforms and are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFrame {
    /// Rotation in radians.
    pub rotation: f64,
    /// Where the local origin sits in page space.
    pub origin: Point,
}

impl Default for SurfaceFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl SurfaceFrame {
    /// The untransformed frame.
    pub const IDENTITY: SurfaceFrame = SurfaceFrame {
        rotation: 0.0,
        origin: Point::ORIGIN,
    };

    pub fn new(origin: Point, rotation: f64) -> Self {
        Self { rotation, origin }
    }

    /// Read rotation and translation from an affine transform.
    pub fn from_affine(transform: Affine) -> Self {
        let [a, b, _c, _d, e, f] = transform.as_coeffs();
        Self {
            rotation: b.atan2(a),
            origin: Point::new(e, f),
        }
    }

    /// The affine equivalent of `translate(origin)` followed by `rotate(rotation)`.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.origin.to_vec2()) * Affine::rotate(self.rotation)
    }

    /// Map a page-space point into this frame's local space.
    pub fn to_local(self, page: Point) -> Point {
        let offset = page - self.origin;
        rotate_vec(offset, -self.rotation).to_point()
    }

    /// Map a local point back into page space.
    pub fn to_page(self, local: Point) -> Point {
        self.origin + rotate_vec(local.to_vec2(), self.rotation)
    }
}
