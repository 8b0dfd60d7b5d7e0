//! Slope of a line through two grid points.

use super::Point;
use std::fmt;

/// Which way a vertical line points, from the first point to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalDirection {
    /// Toward increasing y. Also used when both points coincide.
    Up,
    /// Toward decreasing y.
    Down,
}

/// Slope of a line, with vertical lines kept apart from finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    /// `dy / dx` of a non-vertical line.
    Finite(f64),
    /// A vertical line, whose slope is unbounded.
    Vertical(VerticalDirection),
}

impl Slope {
    /// Returns `true` for a vertical line.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Slope::Vertical(_))
    }

    /// Returns the finite slope, or `None` for a vertical line.
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Slope::Finite(m) => Some(m),
            Slope::Vertical(_) => None,
        }
    }

    /// Returns the slope as a plain number.
    ///
    /// Vertical lines map to `f64::MAX` when pointing up and `-f64::MAX` when
    /// pointing down. Do not do arithmetic on the result.
    #[inline]
    pub fn sentinel(self) -> f64 {
        match self {
            Slope::Finite(m) => m,
            Slope::Vertical(VerticalDirection::Up) => f64::MAX,
            Slope::Vertical(VerticalDirection::Down) => -f64::MAX,
        }
    }

    /// Returns `true` if the line through `anchor` with this slope also
    /// passes through `p`.
    ///
    /// Exact for the slopes a grown line can have (0, ±1 and vertical); other
    /// finite slopes may not survive the float round trip.
    pub(crate) fn passes_through(self, anchor: Point, p: Point) -> bool {
        let dx = i64::from(p.x) - i64::from(anchor.x);
        let dy = i64::from(p.y) - i64::from(anchor.y);
        match self {
            Slope::Finite(m) => dy as f64 == m * dx as f64,
            Slope::Vertical(_) => dx == 0,
        }
    }

    /// Compares two slopes, finite values within `eps`.
    ///
    /// Vertical slopes only match vertical slopes of the same direction.
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        match (self, other) {
            (Slope::Finite(a), Slope::Finite(b)) => (a - b).abs() <= eps,
            (Slope::Vertical(a), Slope::Vertical(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slope::Finite(m) => write!(f, "{m}"),
            Slope::Vertical(VerticalDirection::Up) => f.write_str("+inf"),
            Slope::Vertical(VerticalDirection::Down) => f.write_str("-inf"),
        }
    }
}

/// Returns the slope of the line from `p` to `q`.
///
/// When `p.x == q.x` the line is vertical and the result carries its
/// direction instead of a number.
///
/// # Example
///
/// ```
/// use pixel_runs::{slope, Point, Slope, VerticalDirection};
///
/// assert_eq!(slope(Point::new(0, 0), Point::new(2, 1)), Slope::Finite(0.5));
/// assert_eq!(
///     slope(Point::new(3, 4), Point::new(3, 1)),
///     Slope::Vertical(VerticalDirection::Down)
/// );
/// ```
pub fn slope(p: Point, q: Point) -> Slope {
    let dx = i64::from(q.x) - i64::from(p.x);
    let dy = i64::from(q.y) - i64::from(p.y);
    if dx == 0 {
        let direction = if dy >= 0 {
            VerticalDirection::Up
        } else {
            VerticalDirection::Down
        };
        return Slope::Vertical(direction);
    }
    Slope::Finite(dy as f64 / dx as f64)
}
