//! # Shatter Configuration
//!
//! Everything that varied between the observed deployment variants is
//! configuration here: ring layout, direction mode, jitter, timing scales,
//! and what happens after a cycle settles. Defaults are the production
//! constants.
//!
//! Loaded once at startup from TOML; every field is optional in the file.

use serde::{Deserialize, Serialize};

use splinter_geometry::RingSpec;

use crate::error::{SessionError, SessionResult};

/// Whether fragments fly outward or recede in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionMode {
    /// Fragments fly outward from the impact point and fade.
    #[default]
    Out,
    /// Fragments recede/sink in place.
    In,
}

/// What the session does with the image after a cycle settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetMode {
    /// Re-attach the same image and wait for the next click.
    #[default]
    Reattach,
    /// Advance to the next image in the roster.
    Advance,
    /// Capture a snapshot of the composited view and shatter that on the
    /// next click. Requires a snapshot service.
    Snapshot,
}

/// Tunable parameters of the shatter pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShatterConfig {
    /// Sample rings around the impact point, in order.
    pub rings: Vec<RingSpec>,
    /// Direction mode.
    pub direction: DirectionMode,
    /// Reset behavior after settling.
    pub reset: ResetMode,
    /// Per-axis jitter as a fraction of ring radius.
    pub jitter_factor: f32,
    /// Fixed padding added to each axial centroid delta, so a fragment at
    /// the impact point still gets a well-defined distance.
    pub distance_padding: f32,
    /// Delay per unit distance, seconds.
    pub delay_scale: f32,
    /// Bounds of the uniform delay-jitter multiplier.
    pub delay_jitter: (f32, f32),
    /// Bounds of the uniform base tween duration, seconds.
    pub duration_range: (f32, f32),
    /// Constant added to the base duration.
    pub duration_extra: f32,
    /// Extra padding on the transform tween only.
    pub duration_padding: f32,
    /// Opacity tween duration, as a fraction of the fragment's duration.
    pub opacity_duration_fraction: f32,
    /// Opacity tween start offset, as a fraction of the fragment's duration.
    pub opacity_delay_fraction: f32,
    /// Lead-in before the transform tween starts, seconds.
    pub lead_in: f32,
    /// Rotation-about-X magnitude, degrees (signed by the Y delta).
    pub rotation_x_magnitude: f32,
    /// Rotation-about-Y magnitude, degrees (signed by the negated X delta).
    pub rotation_y_magnitude: f32,
    /// Depth sink target for `in` mode (also its stacking key).
    pub recede_depth: f32,
}

impl Default for ShatterConfig {
    fn default() -> Self {
        Self {
            // One dense near ring plus oversized cover rings so corner
            // clicks still triangulate the whole image.
            rings: vec![
                RingSpec::new(600.0, 52),
                RingSpec::new(100.0, 104),
                RingSpec::new(1200.0, 21),
            ],
            direction: DirectionMode::Out,
            reset: ResetMode::Reattach,
            jitter_factor: 0.25,
            distance_padding: 2.0,
            delay_scale: 0.003,
            delay_jitter: (0.01, 0.1),
            duration_range: (0.5, 1.1),
            duration_extra: 0.2,
            duration_padding: 0.2,
            opacity_duration_fraction: 0.95,
            opacity_delay_fraction: 0.75,
            lead_in: 0.1,
            rotation_x_magnitude: 30.0,
            rotation_y_magnitude: 90.0,
            recede_depth: -500.0,
        }
    }
}

impl ShatterConfig {
    /// Parses a config from a TOML document, then validates it.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidConfig`] on parse or validation failure.
    pub fn from_toml(text: &str) -> SessionResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| SessionError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Ring configuration must guarantee the triangulator at least three
    /// ring points on top of the center; everything else is range checks.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> SessionResult<()> {
        for ring in &self.rings {
            ring.validate()
                .map_err(|e| SessionError::InvalidConfig(e.to_string()))?;
        }
        let ring_points: usize = self.rings.iter().map(|r| r.count).sum();
        if ring_points < 3 {
            return Err(SessionError::InvalidConfig(format!(
                "rings must supply at least 3 points, got {ring_points}"
            )));
        }
        if self.jitter_factor < 0.0 {
            return Err(SessionError::InvalidConfig(
                "jitter_factor must be >= 0".into(),
            ));
        }
        for (name, (lo, hi)) in [
            ("delay_jitter", self.delay_jitter),
            ("duration_range", self.duration_range),
        ] {
            if lo > hi || lo < 0.0 {
                return Err(SessionError::InvalidConfig(format!(
                    "{name} bounds out of order: ({lo}, {hi})"
                )));
            }
        }
        if self.duration_range.1 + self.duration_extra <= 0.0 {
            return Err(SessionError::InvalidConfig(
                "fragment duration must be positive".into(),
            ));
        }
        if self.delay_scale < 0.0 || self.distance_padding <= 0.0 {
            return Err(SessionError::InvalidConfig(
                "delay_scale must be >= 0 and distance_padding > 0".into(),
            ));
        }
        Ok(())
    }

    /// A zero-variance copy: no positional jitter, delay jitter and
    /// duration collapsed to their midpoints. Deterministic test runs.
    #[must_use]
    pub fn zero_variance(mut self) -> Self {
        self.jitter_factor = 0.0;
        let dj = (self.delay_jitter.0 + self.delay_jitter.1) / 2.0;
        self.delay_jitter = (dj, dj);
        let dr = (self.duration_range.0 + self.duration_range.1) / 2.0;
        self.duration_range = (dr, dr);
        self
    }
}
