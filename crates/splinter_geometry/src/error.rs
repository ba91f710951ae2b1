//! # Geometry Error Types
//!
//! All errors that can occur during sampling and triangulation.

use thiserror::Error;

/// Errors that can occur in the geometry pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A ring spec violated its constraints (`count >= 1`, `radius >= 0`).
    #[error("invalid ring spec: radius {radius}, count {count}")]
    InvalidRing {
        /// The offending radius.
        radius: f32,
        /// The offending count.
        count: usize,
    },

    /// Triangulation was invoked with degenerate input.
    ///
    /// Fewer than 3 points, or an all-collinear set. Ring configuration
    /// guarantees this cannot happen in production, so it is surfaced as a
    /// hard error rather than recovered from.
    #[error("degenerate triangulation input: {point_count} usable points")]
    DegenerateInput {
        /// Number of points handed to the triangulator.
        point_count: usize,
    },
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
