//! # SPLINTER
//!
//! An interactive "shatter" effect pipeline: a displayed image is
//! subdivided into irregular triangular fragments radiating from a click
//! point, the fragments fly outward (or recede) while fading, and the
//! scene resets.
//!
//! ## Pipeline
//!
//! ```text
//! pointer click
//!   -> vertex sampler        (impact point + jittered rings)
//!   -> triangulator adapter  (Delaunay service)
//!   -> fragment builder      (one clipped sub-image per triangle)
//!   -> choreographer         (per-fragment params -> one group timeline)
//!   -> session settles       (fragments dropped, image restored/advanced)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use splinter::{ImageBox, PointerClick, SessionState, ShatterConfig, ShatterSession};
//! use splinter_geometry::RingSpec;
//! use splinter_surface::PixelSurface;
//!
//! let config = ShatterConfig {
//!     rings: vec![RingSpec::new(10.0, 3)],
//!     ..ShatterConfig::default()
//! };
//! let image = PixelSurface::try_new(100, 100).unwrap();
//! let rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//!
//! let mut session = ShatterSession::new(config, vec![image], rng).unwrap();
//! session
//!     .handle_click(PointerClick::new(50.0, 50.0), ImageBox::at_origin(100.0, 100.0))
//!     .unwrap();
//! assert_eq!(session.state(), SessionState::Animating);
//!
//! while !session.update(0.016) {}
//! assert_eq!(session.state(), SessionState::Idle);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod choreography;
pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod snapshot;

pub use choreography::{choreograph, describe, AnimationDescriptor};
pub use config::{DirectionMode, ResetMode, ShatterConfig};
pub use error::{SessionError, SessionResult, SnapshotError, SnapshotResult};
pub use input::{relative_impact, ImageBox, PointerClick};
pub use session::{SessionState, SessionStats, ShatterSession};
pub use snapshot::{SceneView, SnapshotService, SoftwareCompositor};
