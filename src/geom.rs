//! Canvas-space geometry: page-to-local coordinate mapping, circle hit
//! tests, and increment snapping.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A point in two-dimensional space, `f64` by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// One link in a chain of nested frames, each offset within its parent.
///
/// The seam for coordinate mapping: anything that can report where it sits
/// relative to its parent can anchor [`to_canvas_coords`].
pub trait OffsetFrame {
    fn offset_left(&self) -> f64;
    fn offset_top(&self) -> f64;
    fn offset_parent(&self) -> Option<&dyn OffsetFrame>;
}

/// Convert a page-space point to frame-local coordinates.
///
/// Walks the ancestor chain up from `frame`, accumulating every frame's
/// offset into the caller-supplied `offset` accumulator (mutated in place),
/// then subtracts the accumulated offset from `page` and divides by
/// `scale`. Conventional defaults are `scale = 1.0` and `Point::default()`
/// for both the accumulator seed and the page point.
pub fn to_canvas_coords(
    frame: &dyn OffsetFrame,
    scale: f64,
    offset: &mut Point,
    page: Point,
) -> Point {
    let mut current = Some(frame);
    while let Some(f) = current {
        offset.x += f.offset_left();
        offset.y += f.offset_top();
        current = f.offset_parent();
    }

    Point::new((page.x - offset.x) / scale, (page.y - offset.y) / scale)
}

/// Whether `(x, y)` lies within or on the circle of `radius` around
/// `origin`.
///
/// Compared in squared distance; no square root is taken.
pub fn are_coords_in_circle<T: Float>(radius: T, x: T, y: T, origin: Point<T>) -> bool {
    let dx = (x - origin.x).abs();
    let dy = (y - origin.y).abs();

    dx.powi(2) + dy.powi(2) <= radius.powi(2)
}

/// Euclidean length of the right triangle with legs `adjacent` and
/// `opposite`.
pub fn hypot<T: Float>(adjacent: T, opposite: T) -> T {
    adjacent.hypot(opposite)
}

/// Snap `value` to a multiple of `increment` using the supplied rounding
/// rule.
///
/// Pass `f64::floor` or `f64::ceil` instead of `f64::round` to bias the
/// snap. Inputs are not validated: a zero increment yields the IEEE result
/// of the division.
pub fn round_to_increment<T: Float>(round: impl FnOnce(T) -> T, increment: T, value: T) -> T {
    round(value / increment) * increment
}
