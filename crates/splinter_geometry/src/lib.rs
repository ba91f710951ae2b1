//! # SPLINTER Geometry
//!
//! Impact-point sampling and triangulation for the shatter pipeline.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: jitter comes from a caller-supplied `Rng`
//! 2. **Hard edges**: degenerate input is a defect, not a recoverable state
//! 3. **Pure geometry**: no surfaces, no timelines, no host types
//!
//! ## Core Components
//!
//! - `Vec2` / `Bounds`: points in source-image space
//! - `sample_vertices`: ring-based scatter around an impact location
//! - `triangulate`: adapter over the Delaunay service
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use splinter_geometry::{sample_vertices, triangulate, Bounds, RingSpec, Vec2};
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let rings = [RingSpec::new(10.0, 3)];
//! let vertices = sample_vertices(
//!     Vec2::new(50.0, 50.0),
//!     &rings,
//!     Bounds::new(100.0, 100.0),
//!     0.25,
//!     &mut rng,
//! );
//! let indices = triangulate(&vertices).unwrap();
//! assert_eq!(indices.len() % 3, 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod point;
pub mod sampler;
pub mod triangulate;

pub use error::{GeometryError, GeometryResult};
pub use point::{Bounds, Vec2};
pub use sampler::{sample_vertices, RingSpec};
pub use triangulate::{triangulate, IndexList};
