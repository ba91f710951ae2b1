//! # SPLINTER Timeline
//!
//! The animation-timeline service: tweens, easing, and nested group
//! timelines with a single completion callback.
//!
//! ## Design Principles
//!
//! 1. **Cooperative**: the host scheduler calls `advance(dt)`; no threads
//! 2. **One clock**: nested groups run on their parent's clock
//! 3. **Exactly-once completion**: the hook fires on the tick the group
//!    ends, empty groups included
//!
//! ## Core Components
//!
//! - `Easing`: interpolation curves
//! - `Tween` / `Property` / `TransformState`: per-target interpolation
//! - `Timeline`: grouped scheduling with start offsets and nesting

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod easing;
pub mod timeline;
pub mod tween;

pub use easing::Easing;
pub use timeline::{CompletionFn, Timeline};
pub use tween::{Property, Track, TransformState, Tween};
