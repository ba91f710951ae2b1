//! # Session Error Types
//!
//! All errors that can surface from a shatter session.

use thiserror::Error;

use splinter_geometry::GeometryError;
use splinter_surface::SurfaceError;

/// Errors that can occur while orchestrating a shatter cycle.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Configuration failed validation at load time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The session was created without a displayable image.
    ///
    /// Setup error: fatal, the session is never constructed.
    #[error("no source image supplied")]
    NoImage,

    /// Geometry pipeline failure (degenerate input). A configuration
    /// defect, not a runtime condition to recover from.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Surface allocation failed while building fragments.
    ///
    /// Fatal for the current cycle; the session rolls back to idle with
    /// the original image intact.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from the external snapshot service.
///
/// Snapshot failures are input errors: the session logs them and treats the
/// triggering click as a no-op, so they are kept out of [`SessionError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// An image source referenced by the scene could not be fetched.
    #[error("image fetch failed: {0}")]
    Fetch(String),

    /// The scene could not be rasterized into an image payload.
    #[error("rasterization failed: {0}")]
    Rasterize(String),
}

/// Result type for snapshot capture.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
