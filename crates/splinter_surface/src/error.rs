//! # Surface Error Types
//!
//! All errors that can occur while allocating or drawing pixel surfaces.

use thiserror::Error;

/// Errors that can occur in the surface layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// Backing storage for a surface could not be reserved.
    ///
    /// Fatal for the current shatter cycle: the session must abort and roll
    /// back to its idle state, never animate a partial fragment set.
    #[error("surface allocation failed: {width}x{height} pixels")]
    Allocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// A surface was requested with a zero dimension.
    #[error("zero-sized surface requested: {width}x{height}")]
    ZeroSized {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;
