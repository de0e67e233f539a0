//! Straight-line distances between coordinates.

use geo::Coord;

/// Euclidean distance from `start` to `end`.
///
/// The result is computed as `sqrt((x2 - x1)^2 + (y2 - y1)^2)` in exactly that
/// order so rankings built from it are reproducible bit for bit.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use courier_core::euclidean_distance;
///
/// let d = euclidean_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert_eq!(d, 5.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance is floating-point by definition"
)]
pub fn euclidean_distance(start: Coord<f64>, end: Coord<f64>) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    (dx * dx + dy * dy).sqrt()
}
