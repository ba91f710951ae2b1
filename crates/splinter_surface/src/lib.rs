//! # SPLINTER Surface
//!
//! Pixel surfaces and triangle-clipped fragment extraction.
//!
//! ## Design Principles
//!
//! 1. **Pure derivations**: bounding box and centroid are plain functions
//! 2. **Fallible allocation**: surface creation returns `Result`, no aborts
//! 3. **Exclusive ownership**: one fragment, one surface, no sharing
//!
//! ## Core Components
//!
//! - `Pixel` / `PixelSurface`: owned RGBA8 raster buffers
//! - `bounding_box` / `centroid`: triangle derivations
//! - `build_fragment`: clipped sub-image extraction

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fragment;
pub mod surface;

pub use error::{SurfaceError, SurfaceResult};
pub use fragment::{bounding_box, build_fragment, centroid, BoundingBox, Fragment};
pub use surface::{Pixel, PixelSurface};
