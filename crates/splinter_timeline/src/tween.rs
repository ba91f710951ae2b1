//! Per-target property tweens.
//!
//! A tween interpolates one or more transform channels of a single target
//! toward fixed end values over a duration. Start values are captured from
//! the live target the first time the tween becomes active, matching the
//! "animate from wherever you are" convention of host animation libraries.

use crate::easing::Easing;

/// Animatable transform channels of one fragment surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// Horizontal offset from the rest position.
    TranslateX,
    /// Vertical offset from the rest position.
    TranslateY,
    /// Depth offset (positive pops toward the viewer, negative recedes).
    Depth,
    /// Rotation about the X axis, degrees.
    RotationX,
    /// Rotation about the Y axis, degrees.
    RotationY,
    /// Opacity in `[0, 1]`.
    Opacity,
}

/// Live transform state of one animation target.
///
/// Owned by the caller in a slice parallel to the fragment collection;
/// mutated only by the timeline that targets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Horizontal offset.
    pub translate_x: f32,
    /// Vertical offset.
    pub translate_y: f32,
    /// Depth offset.
    pub depth: f32,
    /// Rotation about X, degrees.
    pub rotation_x: f32,
    /// Rotation about Y, degrees.
    pub rotation_y: f32,
    /// Opacity.
    pub opacity: f32,
}

impl TransformState {
    /// The rest transform: no offset, no rotation, fully opaque.
    pub const REST: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        depth: 0.0,
        rotation_x: 0.0,
        rotation_y: 0.0,
        opacity: 1.0,
    };

    /// Reads one channel.
    #[must_use]
    pub const fn get(&self, property: Property) -> f32 {
        match property {
            Property::TranslateX => self.translate_x,
            Property::TranslateY => self.translate_y,
            Property::Depth => self.depth,
            Property::RotationX => self.rotation_x,
            Property::RotationY => self.rotation_y,
            Property::Opacity => self.opacity,
        }
    }

    /// Writes one channel.
    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::TranslateX => self.translate_x = value,
            Property::TranslateY => self.translate_y = value,
            Property::Depth => self.depth = value,
            Property::RotationX => self.rotation_x = value,
            Property::RotationY => self.rotation_y = value,
            Property::Opacity => self.opacity = value,
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::REST
    }
}

/// One interpolated channel of a tween.
#[derive(Debug, Clone, Copy)]
pub struct Track {
    /// Channel to interpolate.
    pub property: Property,
    /// End value.
    pub to: f32,
    /// Start value, captured when the tween first becomes active.
    pub(crate) from: Option<f32>,
}

impl Track {
    /// Creates a track toward `to`.
    #[must_use]
    pub const fn to(property: Property, to: f32) -> Self {
        Self {
            property,
            to,
            from: None,
        }
    }
}

/// A timed interpolation of one target's channels.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Index of the target in the caller's transform slice.
    pub target: usize,
    /// Channels to interpolate.
    pub tracks: Vec<Track>,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing curve.
    pub easing: Easing,
}

impl Tween {
    /// Creates a tween for `target` lasting `duration` seconds.
    #[must_use]
    pub fn new(target: usize, duration: f32, easing: Easing) -> Self {
        Self {
            target,
            tracks: Vec::new(),
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Adds an interpolated channel. Builder-style.
    #[must_use]
    pub fn with(mut self, property: Property, to: f32) -> Self {
        self.tracks.push(Track::to(property, to));
        self
    }

    /// Samples the tween at `local_time` seconds past its start, writing
    /// interpolated values into the target state.
    pub(crate) fn sample(&mut self, local_time: f32, targets: &mut [TransformState]) {
        if local_time < 0.0 {
            return;
        }
        let Some(state) = targets.get_mut(self.target) else {
            return;
        };

        let progress = if self.duration > 0.0 {
            (local_time / self.duration).min(1.0)
        } else {
            1.0
        };
        let eased = self.easing.apply(progress);

        for track in &mut self.tracks {
            let from = *track.from.get_or_insert_with(|| state.get(track.property));
            state.set(track.property, from + (track.to - from) * eased);
        }
    }
}
