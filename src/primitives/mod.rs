//! Integer grid primitives: points, slopes and pixel lines.

mod line;
mod point;
mod slope;

pub use line::{Line, LinePixels};
pub use point::{distance, Point};
pub use slope::{slope, Slope, VerticalDirection};
