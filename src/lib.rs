//! pixel_runs - Integer grid points and incrementally grown pixel lines
//!
//! A scanner that walks a raster one pixel at a time can accumulate straight
//! runs with [`Line`]: seed it with one [`Point`], then offer candidates that
//! pass [`Line::is_adjacent`] to [`Line::add_point`]. Which points to offer,
//! and to which line, stays with the caller.
//!
//! ```
//! use pixel_runs::{Line, Point};
//!
//! let mut line = Line::new(Point::new(5, 5));
//! assert!(line.is_degenerate());
//!
//! line.add_point(Point::new(6, 6)).unwrap();
//! line.add_point(Point::new(4, 4)).unwrap();
//! assert_eq!(line.endpoints(), Some((Point::new(4, 4), Point::new(6, 6))));
//!
//! // (7, 6) is next to the end but off the diagonal.
//! assert!(line.add_point(Point::new(7, 6)).is_err());
//! ```

pub mod error;
pub mod primitives;

pub use error::LineError;
pub use primitives::{distance, slope, Line, LinePixels, Point, Slope, VerticalDirection};
