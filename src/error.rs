//! Error types for line growth.

use crate::primitives::{Line, Point};
use thiserror::Error;

/// Errors that can occur while growing a [`Line`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// The point does not extend the line by one grid step.
    #[error("point {point} is not adjacent to line {line}")]
    NonAdjacentPoint {
        /// The rejected point.
        point: Point,
        /// The line as it was when the point was rejected.
        line: Line,
    },
}
