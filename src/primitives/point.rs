//! Integer grid point type.

use std::fmt;

/// A cell of a discrete raster, addressed by integer coordinates.
///
/// Points order lexicographically by `(x, y)`, which is the order a
/// [`Line`](super::Line) keeps its endpoints in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        distance(self, other)
    }

    /// Returns the squared Euclidean distance to another point.
    ///
    /// Exact for every pair of `i32` coordinates.
    #[inline]
    pub fn distance_squared(self, other: Self) -> u128 {
        let (dx, dy) = self.abs_diff(other);
        let (dx, dy) = (u128::from(dx), u128::from(dy));
        dx * dx + dy * dy
    }

    /// Returns `true` if `other` is one of the eight cells surrounding this
    /// one, or this cell itself.
    #[inline]
    pub fn is_neighbor(self, other: Self) -> bool {
        let (dx, dy) = self.abs_diff(other);
        dx <= 1 && dy <= 1
    }

    #[inline]
    fn abs_diff(self, other: Self) -> (u32, u32) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Returns the Euclidean distance between `p` and `q`.
///
/// Differences are taken in `i64`, so coordinates at the `i32` limits do not
/// overflow.
///
/// # Example
///
/// ```
/// use pixel_runs::{distance, Point};
///
/// assert_eq!(distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
/// ```
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    let dx = (i64::from(p.x) - i64::from(q.x)) as f64;
    let dy = (i64::from(p.y) - i64::from(q.y)) as f64;
    (dx * dx + dy * dy).sqrt()
}
