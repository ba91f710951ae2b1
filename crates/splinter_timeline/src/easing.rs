//! Easing curves for tween interpolation.

/// Easing function applied to normalized tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-in (accelerating).
    CubicIn,
    /// Cubic ease-out (decelerating).
    CubicOut,
    /// Cubic ease-in-out. The shatter transform curve.
    #[default]
    CubicInOut,
    /// Instant (no interpolation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a progress value in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }
}
