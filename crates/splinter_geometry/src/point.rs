//! Points and bounds in source-image space.
//!
//! These are the canonical coordinate types shared by every stage of the
//! shatter pipeline. A `Vec2` has no identity beyond its value.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D point/vector in source-image space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vec2 {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Converts to an array.
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Length of the vector.
    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Component-wise clamp into `[0, bounds.width] x [0, bounds.height]`.
    #[must_use]
    pub fn clamp_to(self, bounds: Bounds) -> Self {
        Self::new(
            self.x.clamp(0.0, bounds.width),
            self.y.clamp(0.0, bounds.height),
        )
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Extent of the source image, in the same space as `Vec2`.
///
/// Valid coordinates are `[0, width]` on X and `[0, height]` on Y, both ends
/// inclusive. This matches the clamp contract of the vertex sampler.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Width of the image.
    pub width: f32,
    /// Height of the image.
    pub height: f32,
}

impl Bounds {
    /// Creates new bounds.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true if the point lies inside the bounds (inclusive edges).
    #[must_use]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}
