//! Placement updates for each kind of gesture.
//!
//! Every function takes the placement captured when the gesture started and
//! the total pointer movement since then, and returns a fresh placement.
//! Nothing accumulates between pointer moves, so rounding never drifts.

use kurbo::{Point, Rect, Size, Vec2};

use crate::geometry::{normalize_angle, rotation_between, to_image_axes};
use crate::hit::{Corner, Edge};
use crate::placement::{Placement, MIN_DIMENSION};

/// Move the destination by `delta` (surface space).
pub fn drag(snapshot: &Placement, delta: Vec2) -> Placement {
    snapshot.with_origin(snapshot.destination.origin() + delta)
}

/// Rotate around the destination center by the angle the pointer swept from
/// `start` to `current`.
pub fn rotate(snapshot: &Placement, start: Point, current: Point) -> Placement {
    let sweep = rotation_between(start, snapshot.center(), current);
    snapshot.with_rotation(normalize_angle(snapshot.rotation + sweep))
}

/// Resize from a corner, keeping the aspect ratio and the center fixed.
///
/// Only the pointer movement along the image's own width counts. Dragging a
/// left-side corner to the right shrinks the image.
pub fn resize(snapshot: &Placement, corner: Corner, delta: Vec2) -> Placement {
    let along = to_image_axes(delta, snapshot.rotation).x;
    let change = if corner.is_left() { -along } else { along };

    let aspect = snapshot.aspect_ratio();
    let min_width = MIN_DIMENSION.max(MIN_DIMENSION * aspect);
    let width = (snapshot.destination.width() + change).max(min_width);

    snapshot.with_destination(Point::ORIGIN, Size::new(width, width / aspect))
}

/// Crop by dragging one edge.
///
/// The pointer movement is projected onto the axis perpendicular to the edge
/// and converted to source pixels with the snapshot's source/destination
/// ratio. The movement is clamped so the source stays inside the original
/// bitmap and the destination stays at least [`MIN_DIMENSION`] across. The
/// opposite edge stays where it is on screen.
pub fn crop(snapshot: &Placement, edge: Edge, delta: Vec2) -> Placement {
    let local = to_image_axes(delta, snapshot.rotation);
    let scale = snapshot.source_scale();
    let src = snapshot.source;
    let original = snapshot.original;
    let (width, height) = (snapshot.destination.width(), snapshot.destination.height());

    let (source, size, shift) = match edge {
        Edge::Right => {
            let d = clamp_span(
                local.x,
                MIN_DIMENSION - width,
                (original.width - src.x1) / scale.x,
            );
            (
                Rect::new(src.x0, src.y0, src.x1 + d * scale.x, src.y1),
                Size::new(width + d, height),
                Vec2::new(d / 2.0, 0.0),
            )
        }
        Edge::Left => {
            let d = clamp_span(local.x, -src.x0 / scale.x, width - MIN_DIMENSION);
            (
                Rect::new(src.x0 + d * scale.x, src.y0, src.x1, src.y1),
                Size::new(width - d, height),
                Vec2::new(d / 2.0, 0.0),
            )
        }
        Edge::Bottom => {
            let d = clamp_span(
                local.y,
                MIN_DIMENSION - height,
                (original.height - src.y1) / scale.y,
            );
            (
                Rect::new(src.x0, src.y0, src.x1, src.y1 + d * scale.y),
                Size::new(width, height + d),
                Vec2::new(0.0, d / 2.0),
            )
        }
        Edge::Top => {
            let d = clamp_span(local.y, -src.y0 / scale.y, height - MIN_DIMENSION);
            (
                Rect::new(src.x0, src.y0 + d * scale.y, src.x1, src.y1),
                Size::new(width, height - d),
                Vec2::new(0.0, d / 2.0),
            )
        }
    };

    Placement {
        source,
        ..snapshot.with_destination(shift.to_point(), size)
    }
}

/// Clamp `value` to `[lo, hi]`, or refuse to move when the span is empty.
fn clamp_span(value: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        0.0
    } else {
        value.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// 200x200 bitmap drawn at 100x100 with its top-left at (50, 50).
    fn snapshot() -> Placement {
        Placement {
            source: Rect::new(0.0, 0.0, 200.0, 200.0),
            destination: Rect::new(50.0, 50.0, 150.0, 150.0),
            rotation: 0.0,
            original: Size::new(200.0, 200.0),
        }
    }

    #[test]
    fn test_drag_moves_origin_by_delta() {
        // pointer from (100, 100) to (150, 130)
        let moved = drag(&snapshot(), Point::new(150.0, 130.0) - Point::new(100.0, 100.0));
        assert_eq!(moved.destination.origin(), Point::new(100.0, 80.0));
        assert_eq!(moved.destination.size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let start = Point::new(200.0, 100.0);
        let current = Point::new(100.0, 200.0);
        let rotated = rotate(&snapshot(), start, current);
        assert!(approx(rotated.rotation, FRAC_PI_2));
        assert_eq!(rotated.destination, snapshot().destination);
    }

    #[test]
    fn test_rotate_adds_to_existing_angle() {
        let base = snapshot().with_rotation(FRAC_PI_2);
        let rotated = rotate(&base, Point::new(200.0, 100.0), Point::new(100.0, 200.0));
        // π/2 + π/2 = π, which normalizes to -π
        assert!(approx(rotated.rotation.abs(), std::f64::consts::PI));
    }

    #[test]
    fn test_resize_bottom_right_grows_around_center() {
        let resized = resize(&snapshot(), Corner::BottomRight, Vec2::new(20.0, 0.0));
        assert!(approx(resized.destination.width(), 120.0));
        assert!(approx(resized.destination.height(), 120.0));
        assert!(approx(resized.center().x, 100.0));
        assert!(approx(resized.center().y, 100.0));
        // resizing never touches the crop
        assert_eq!(resized.source, snapshot().source);
    }

    #[test]
    fn test_resize_left_corner_inverts_direction() {
        let resized = resize(&snapshot(), Corner::TopLeft, Vec2::new(20.0, 0.0));
        assert!(approx(resized.destination.width(), 80.0));
        assert!(approx(resized.destination.height(), 80.0));
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let wide = Placement {
            destination: Rect::new(0.0, 0.0, 200.0, 100.0),
            ..snapshot()
        };
        let resized = resize(&wide, Corner::BottomRight, Vec2::new(-1000.0, 0.0));
        // height hits the floor first for a 2:1 image
        assert!(approx(resized.destination.height(), MIN_DIMENSION));
        assert!(approx(resized.destination.width(), 2.0 * MIN_DIMENSION));
    }

    #[test]
    fn test_resize_uses_image_axis_when_rotated() {
        let rotated = snapshot().with_rotation(FRAC_PI_2);
        // screen-down is the rotated image's width direction
        let resized = resize(&rotated, Corner::BottomRight, Vec2::new(0.0, 30.0));
        assert!(approx(resized.destination.width(), 130.0));
    }

    #[test]
    fn test_crop_right_keeps_left_edge() {
        let cropped = crop(&snapshot(), Edge::Right, Vec2::new(-20.0, 0.0));
        assert!(approx(cropped.source.width(), 160.0));
        assert!(approx(cropped.source.x0, 0.0));
        assert!(approx(cropped.destination.x0, 50.0));
        assert!(approx(cropped.destination.x1, 130.0));
        assert!(approx(cropped.destination.height(), 100.0));
    }

    #[test]
    fn test_crop_right_cannot_grow_past_bitmap() {
        let cropped = crop(&snapshot(), Edge::Right, Vec2::new(50.0, 0.0));
        assert!(approx(cropped.source.x1, 200.0));
        assert!(approx(cropped.destination.width(), 100.0));
    }

    #[test]
    fn test_crop_left_moves_origin_and_keeps_right_edge() {
        let cropped = crop(&snapshot(), Edge::Left, Vec2::new(30.0, 0.0));
        assert!(approx(cropped.source.x0, 60.0));
        assert!(approx(cropped.source.x1, 200.0));
        assert!(approx(cropped.destination.x0, 80.0));
        assert!(approx(cropped.destination.x1, 150.0));
    }

    #[test]
    fn test_crop_left_can_uncrop_back_to_bitmap_edge() {
        let cropped = crop(&snapshot(), Edge::Left, Vec2::new(30.0, 0.0));
        let restored = crop(&cropped, Edge::Left, Vec2::new(-100.0, 0.0));
        assert!(approx(restored.source.x0, 0.0));
        assert!(approx(restored.destination.x0, 50.0));
    }

    #[test]
    fn test_crop_top_and_bottom() {
        let top = crop(&snapshot(), Edge::Top, Vec2::new(0.0, 10.0));
        assert!(approx(top.source.y0, 20.0));
        assert!(approx(top.destination.y0, 60.0));
        assert!(approx(top.destination.y1, 150.0));

        let bottom = crop(&snapshot(), Edge::Bottom, Vec2::new(0.0, -95.0));
        // stops at the minimum height
        assert!(approx(bottom.destination.height(), MIN_DIMENSION));
        assert!(approx(bottom.destination.y0, 50.0));
        assert!(approx(bottom.source.height(), 20.0));
    }

    #[test]
    fn test_crop_ignores_movement_along_edge() {
        let cropped = crop(&snapshot(), Edge::Right, Vec2::new(0.0, 40.0));
        assert_eq!(cropped.destination, snapshot().destination);
        assert_eq!(cropped.source, snapshot().source);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{PI, TAU};

    fn corner_strategy() -> impl Strategy<Value = Corner> {
        prop_oneof![
            Just(Corner::TopLeft),
            Just(Corner::TopRight),
            Just(Corner::BottomLeft),
            Just(Corner::BottomRight),
        ]
    }

    fn edge_strategy() -> impl Strategy<Value = Edge> {
        prop_oneof![
            Just(Edge::Top),
            Just(Edge::Right),
            Just(Edge::Bottom),
            Just(Edge::Left),
        ]
    }

    /// A valid placement: a crop window inside the bitmap, drawn at some scale.
    fn placement_strategy() -> impl Strategy<Value = Placement> {
        (
            50.0f64..2000.0,
            50.0f64..2000.0,
            0.0f64..0.4,
            0.0f64..0.4,
            0.5f64..1.0,
            0.5f64..1.0,
            0.05f64..2.0,
            -PI..PI,
        )
            .prop_map(|(w, h, fx, fy, fw, fh, zoom, rotation)| {
                let sx = w * fx;
                let sy = h * fy;
                let sw = (w - sx) * fw;
                let sh = (h - sy) * fh;
                let dw = (sw * zoom).max(MIN_DIMENSION);
                let dh = (sh * zoom).max(MIN_DIMENSION);
                Placement {
                    source: Rect::new(sx, sy, sx + sw, sy + sh),
                    destination: Rect::new(100.0, 100.0, 100.0 + dw, 100.0 + dh),
                    rotation,
                    original: Size::new(w, h),
                }
            })
    }

    fn delta_strategy() -> impl Strategy<Value = Vec2> {
        (-3000.0f64..3000.0, -3000.0f64..3000.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        /// Property: resizing keeps both sides above the minimum.
        #[test]
        fn prop_resize_respects_minimum(
            snapshot in placement_strategy(),
            corner in corner_strategy(),
            delta in delta_strategy(),
        ) {
            let resized = resize(&snapshot, corner, delta);
            prop_assert!(resized.destination.width() >= MIN_DIMENSION - 1e-9);
            prop_assert!(resized.destination.height() >= MIN_DIMENSION - 1e-9);
        }

        /// Property: resizing preserves the starting aspect ratio.
        #[test]
        fn prop_resize_preserves_aspect(
            snapshot in placement_strategy(),
            corner in corner_strategy(),
            delta in delta_strategy(),
        ) {
            let resized = resize(&snapshot, corner, delta);
            let before = snapshot.aspect_ratio();
            let after = resized.aspect_ratio();
            prop_assert!((before - after).abs() / before < 1e-9, "{} vs {}", before, after);
        }

        /// Property: resizing keeps the center fixed.
        #[test]
        fn prop_resize_keeps_center(
            snapshot in placement_strategy(),
            corner in corner_strategy(),
            delta in delta_strategy(),
        ) {
            let resized = resize(&snapshot, corner, delta);
            prop_assert!((resized.center() - snapshot.center()).hypot() < 1e-6);
        }

        /// Property: cropping keeps the source inside the bitmap.
        #[test]
        fn prop_crop_stays_in_bitmap(
            snapshot in placement_strategy(),
            edge in edge_strategy(),
            delta in delta_strategy(),
        ) {
            let cropped = crop(&snapshot, edge, delta);
            let tolerance = 1e-6;
            prop_assert!(cropped.source.x0 >= -tolerance);
            prop_assert!(cropped.source.y0 >= -tolerance);
            prop_assert!(cropped.source.x1 <= snapshot.original.width + tolerance);
            prop_assert!(cropped.source.y1 <= snapshot.original.height + tolerance);
            prop_assert!(cropped.source.area() <= snapshot.original.area() + tolerance);
        }

        /// Property: cropping keeps the destination above the minimum size.
        #[test]
        fn prop_crop_respects_minimum(
            snapshot in placement_strategy(),
            edge in edge_strategy(),
            delta in delta_strategy(),
        ) {
            let cropped = crop(&snapshot, edge, delta);
            prop_assert!(cropped.is_valid(), "{:?}", cropped);
        }

        /// Property: cropping never changes the display scale of the bitmap.
        #[test]
        fn prop_crop_preserves_scale(
            snapshot in placement_strategy(),
            edge in edge_strategy(),
            delta in delta_strategy(),
        ) {
            let cropped = crop(&snapshot, edge, delta);
            let before = snapshot.source_scale();
            let after = cropped.source_scale();
            prop_assert!((before.x - after.x).abs() / before.x < 1e-6);
            prop_assert!((before.y - after.y).abs() / before.y < 1e-6);
        }

        /// Property: rotating through a full revolution in steps returns to
        /// the starting angle.
        #[test]
        fn prop_full_revolution_is_identity(
            snapshot in placement_strategy(),
            steps in 3usize..24,
            start_angle in -PI..PI,
        ) {
            let center = snapshot.center();
            let on_circle = |angle: f64| center + Vec2::new(angle.cos(), angle.sin()) * 100.0;

            let step = TAU / steps as f64;
            let mut placement = snapshot;
            for i in 0..steps {
                let from = on_circle(start_angle + step * i as f64);
                let to = on_circle(start_angle + step * (i + 1) as f64);
                placement = rotate(&placement, from, to);
            }

            let diff = normalize_angle(placement.rotation - snapshot.rotation);
            prop_assert!(diff.abs() < 1e-9, "drifted by {}", diff);
        }

        /// Property: dragging leaves size, crop and rotation alone.
        #[test]
        fn prop_drag_only_translates(
            snapshot in placement_strategy(),
            delta in delta_strategy(),
        ) {
            let moved = drag(&snapshot, delta);
            prop_assert_eq!(moved.source, snapshot.source);
            prop_assert_eq!(moved.rotation, snapshot.rotation);
            prop_assert!((moved.destination.width() - snapshot.destination.width()).abs() < 1e-6);
            prop_assert!((moved.destination.height() - snapshot.destination.height()).abs() < 1e-6);
        }
    }
}
