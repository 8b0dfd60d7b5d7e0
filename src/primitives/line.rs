//! Pixel line segment grown one grid point at a time.

use super::{distance, slope, Point, Slope};
use crate::error::LineError;
use log::{debug, trace};
use std::fmt;
use std::iter::FusedIterator;

/// A straight run of adjacent grid points.
///
/// A line starts *degenerate*: a single seed point with zero length and no
/// slope. The first accepted neighbour promotes it to a proper segment, after
/// which it only grows by one grid step past either endpoint along its
/// established slope. Promotion happens at most once; a proper line never
/// becomes degenerate again.
///
/// Endpoints are kept in ascending `(x, y)` order, so `start` has the
/// smaller x (or, for a vertical line, the smaller y).
///
/// Because the first step is to an 8-connected neighbour, every proper line
/// is horizontal, vertical or diagonal.
///
/// # Example
///
/// ```
/// use pixel_runs::{Line, Point, Slope};
///
/// let mut line = Line::new(Point::new(0, 0));
/// for x in 1..=3 {
///     let p = Point::new(x, 0);
///     if line.is_adjacent(p) {
///         line.add_point(p).unwrap();
///     }
/// }
/// assert_eq!(line.length(), 3.0);
/// assert_eq!(line.slope(), Some(Slope::Finite(0.0)));
/// assert_eq!(line.to_string(), "[(0, 0) -> (3, 0)]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    /// `None` while degenerate.
    slope: Option<Slope>,
    length: f64,
}

impl Line {
    /// Creates a degenerate line seeded at `seed`.
    #[inline]
    pub fn new(seed: Point) -> Self {
        Self {
            start: seed,
            end: seed,
            slope: None,
            length: 0.0,
        }
    }

    /// Returns the starting point.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the ending point.
    ///
    /// On a degenerate line this is a placeholder (currently the seed) and
    /// should not be relied on. Use [`Line::endpoints`] to avoid the ambiguity.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns `(start, end)` for a proper line, `None` while degenerate.
    #[inline]
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        self.slope.map(|_| (self.start, self.end))
    }

    /// Returns the Euclidean length, `0.0` while degenerate.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the slope, `None` while degenerate.
    #[inline]
    pub fn slope(&self) -> Option<Slope> {
        self.slope
    }

    /// Returns `true` if the line is still a single point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.slope.is_none()
    }

    /// Tests whether `p` may be added to this line.
    ///
    /// - Degenerate: `p` is the seed or one of its eight neighbours.
    /// - Proper: `p` lies on the line with the established slope and sits one
    ///   step past `start` or `end` along x (along y for a vertical line).
    pub fn is_adjacent(&self, p: Point) -> bool {
        match self.slope {
            None => self.start.is_neighbor(p),
            Some(s) if s.is_vertical() => {
                p.x == self.start.x
                    && (one_before(p.y, self.start.y) || one_after(p.y, self.end.y))
            }
            Some(s) => {
                (one_before(p.x, self.start.x) || one_after(p.x, self.end.x))
                    && s.passes_through(self.start, p)
            }
        }
    }

    /// Adds `p` to this line.
    ///
    /// A degenerate line is promoted: its endpoints become the seed and `p`
    /// in ascending order, and slope and length are computed. Adding the seed
    /// itself leaves the line degenerate. A proper line replaces the endpoint
    /// `p` extends and recomputes its length; the slope is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::NonAdjacentPoint`] if `p` fails
    /// [`Line::is_adjacent`]. The line is left unchanged.
    pub fn add_point(&mut self, p: Point) -> Result<(), LineError> {
        if !self.is_adjacent(p) {
            debug!("Line::add_point rejected {p} for {self}");
            return Err(LineError::NonAdjacentPoint {
                point: p,
                line: self.clone(),
            });
        }
        match self.slope {
            None => self.promote(p),
            Some(s) => self.extend(p, s),
        }
        Ok(())
    }

    fn promote(&mut self, p: Point) {
        if p == self.start {
            trace!("Line::add_point seed {p} added again, line stays degenerate");
            return;
        }
        let (start, end) = if p < self.start {
            (p, self.start)
        } else {
            (self.start, p)
        };
        self.start = start;
        self.end = end;
        self.slope = Some(slope(start, end));
        self.length = distance(start, end);
        debug!("Line::add_point promoted to {self}");
    }

    fn extend(&mut self, p: Point, s: Slope) {
        let before_start = if s.is_vertical() {
            p.y < self.start.y
        } else {
            p.x < self.start.x
        };
        if before_start {
            self.start = p;
        } else {
            self.end = p;
        }
        self.length = distance(self.start, self.end);
        trace!("Line::add_point extended to {self}, length {}", self.length);
    }

    /// Compares two lines, slope and length within `eps`.
    ///
    /// Endpoints must match exactly. A degenerate line only matches another
    /// degenerate line with the same seed.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        if self.start != other.start || self.end != other.end {
            return false;
        }
        let slopes_match = match (self.slope, other.slope) {
            (None, None) => true,
            (Some(a), Some(b)) => a.approx_eq(b, eps),
            _ => false,
        };
        slopes_match && (self.length - other.length).abs() <= eps
    }

    /// Returns `true` if `p` is one of the points this line covers.
    pub fn contains(&self, p: Point) -> bool {
        match self.slope {
            None => p == self.start,
            Some(s) if s.is_vertical() => {
                p.x == self.start.x && (self.start.y..=self.end.y).contains(&p.y)
            }
            Some(s) => {
                (self.start.x..=self.end.x).contains(&p.x) && s.passes_through(self.start, p)
            }
        }
    }

    /// Returns the number of grid points the line covers.
    pub fn pixel_count(&self) -> u64 {
        let dx = (i64::from(self.end.x) - i64::from(self.start.x)).unsigned_abs();
        let dy = (i64::from(self.end.y) - i64::from(self.start.y)).unsigned_abs();
        dx.max(dy) + 1
    }

    /// Returns an iterator over the covered grid points, `start` to `end`.
    ///
    /// A degenerate line yields its seed once.
    pub fn pixels(&self) -> LinePixels {
        LinePixels {
            next: self.start,
            step_x: step(self.start.x, self.end.x),
            step_y: step(self.start.y, self.end.y),
            remaining: self.pixel_count(),
        }
    }
}

impl From<Point> for Line {
    fn from(seed: Point) -> Self {
        Self::new(seed)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.endpoints() {
            None => write!(f, "[{}]", self.start),
            Some((start, end)) => write!(f, "[{start} -> {end}]"),
        }
    }
}

/// `a == b - 1`, without overflow.
#[inline]
fn one_before(a: i32, b: i32) -> bool {
    i64::from(a) == i64::from(b) - 1
}

/// `a == b + 1`, without overflow.
#[inline]
fn one_after(a: i32, b: i32) -> bool {
    i64::from(a) == i64::from(b) + 1
}

/// Unit step from `from` toward `to`.
#[inline]
fn step(from: i32, to: i32) -> i32 {
    (i64::from(to) - i64::from(from)).signum() as i32
}

/// Iterator over the grid points of a [`Line`].
#[derive(Debug, Clone)]
pub struct LinePixels {
    next: Point,
    step_x: i32,
    step_y: i32,
    remaining: u64,
}

impl Iterator for LinePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        // Past the last point the coordinates may leave the i32 range; they
        // are never read.
        self.next = Point::new(
            current.x.wrapping_add(self.step_x),
            current.y.wrapping_add(self.step_y),
        );
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for LinePixels {}
