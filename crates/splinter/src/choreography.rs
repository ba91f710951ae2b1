//! # Shatter Choreographer
//!
//! Computes per-fragment animation parameters from geometry and schedules
//! the whole fragment collection as one group timeline. Fragments nearer
//! the impact point leave earlier; each gets a depth push, signed
//! rotations, and a late opacity fade, all inside its own child timeline.

use rand::Rng;

use splinter_geometry::Vec2;
use splinter_surface::Fragment;
use splinter_timeline::{Easing, Property, Timeline, TransformState, Tween};

use crate::config::{DirectionMode, ShatterConfig};

/// Per-fragment animation parameters. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDescriptor {
    /// Padded distance from the fragment centroid to the impact point.
    pub distance: f32,
    /// Start offset of the fragment's child timeline within the group.
    pub delay: f32,
    /// Base tween duration (opacity fractions derive from this).
    pub duration: f32,
    /// Rotation about X, degrees.
    pub rotation_x: f32,
    /// Rotation about Y, degrees.
    pub rotation_y: f32,
    /// Stacking/depth key. Doubles as the depth tween target.
    pub stacking: f32,
    /// Outward positional offset, `out` mode only.
    pub offset: Option<Vec2>,
}

/// Sign with a true zero case, unlike `f32::signum`.
fn sign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Derives the animation parameters for one fragment.
///
/// `traversal` is the fragment's position in triangle-traversal order and
/// `index_count` the length of the index list; `out` mode stacks earlier
/// triangles above later ones. The distance padding keeps a fragment
/// sitting exactly on the impact point well-defined: no zero distance, no
/// zero-duration tween.
pub fn describe<R: Rng + ?Sized>(
    centroid: Vec2,
    impact: Vec2,
    traversal: usize,
    index_count: usize,
    config: &ShatterConfig,
    rng: &mut R,
) -> AnimationDescriptor {
    let dx = centroid.x - impact.x + config.distance_padding;
    let dy = centroid.y - impact.y + config.distance_padding;
    let distance = dx.hypot(dy);

    let rotation_x = config.rotation_x_magnitude * sign(dy);
    let rotation_y = config.rotation_y_magnitude * -sign(dx);

    let (jlo, jhi) = config.delay_jitter;
    let delay = distance * config.delay_scale * rng.gen_range(jlo..=jhi);

    let (dlo, dhi) = config.duration_range;
    let duration = rng.gen_range(dlo..=dhi) + config.duration_extra;

    let (stacking, offset) = match config.direction {
        DirectionMode::In => (config.recede_depth, None),
        DirectionMode::Out => {
            #[allow(clippy::cast_precision_loss)]
            let key = index_count.saturating_sub(3 * traversal) as f32;
            (key, Some(Vec2::new(dx, dy)))
        }
    };

    AnimationDescriptor {
        distance,
        delay,
        duration,
        rotation_x,
        rotation_y,
        stacking,
        offset,
    }
}

/// Schedules the whole fragment collection as one group timeline.
///
/// Returns the group plus one rest transform per fragment, in the same
/// order. Every fragment's child timeline is inserted at its computed
/// delay; the group's duration is the maximum of delay + child duration.
/// The caller attaches the completion hook before driving the group.
///
/// All centroids exist before any schedule is computed - building is fully
/// done by the time this runs.
pub fn choreograph<R: Rng + ?Sized>(
    fragments: &[Fragment],
    index_count: usize,
    impact: Vec2,
    config: &ShatterConfig,
    rng: &mut R,
) -> (Timeline, Vec<TransformState>) {
    let mut group = Timeline::new();
    let transforms = vec![TransformState::REST; fragments.len()];

    for (i, fragment) in fragments.iter().enumerate() {
        let desc = describe(fragment.centroid, impact, i, index_count, config, rng);

        let mut transform_tween = Tween::new(
            i,
            desc.duration + config.duration_padding,
            Easing::CubicInOut,
        )
        .with(Property::Depth, desc.stacking)
        .with(Property::RotationX, desc.rotation_x)
        .with(Property::RotationY, desc.rotation_y);
        if let Some(offset) = desc.offset {
            transform_tween = transform_tween
                .with(Property::TranslateX, offset.x)
                .with(Property::TranslateY, offset.y);
        }

        let opacity_tween = Tween::new(
            i,
            desc.duration * config.opacity_duration_fraction,
            Easing::CubicOut,
        )
        .with(Property::Opacity, 0.0);

        let mut child = Timeline::new();
        child.add_tween(transform_tween, config.lead_in);
        child.add_tween(opacity_tween, desc.duration * config.opacity_delay_fraction);

        group.add_group(child, desc.delay);
    }

    tracing::debug!(
        fragments = fragments.len(),
        duration = group.duration(),
        "choreographed shatter group"
    );

    (group, transforms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    #[test]
    fn test_delay_monotonic_in_distance_without_jitter() {
        let config = ShatterConfig::default().zero_variance();
        let impact = Vec2::new(50.0, 50.0);

        let mut last_delay = -1.0f32;
        for step in 1..10 {
            #[allow(clippy::cast_precision_loss)]
            let centroid = Vec2::new(50.0 + 10.0 * step as f32, 50.0);
            let desc = describe(centroid, impact, 0, 30, &config, &mut rng());
            assert!(
                desc.delay > last_delay,
                "delay must grow with distance: {} !> {last_delay}",
                desc.delay
            );
            last_delay = desc.delay;
        }
    }

    #[test]
    fn test_fragment_at_impact_point_is_well_defined() {
        let config = ShatterConfig::default();
        let impact = Vec2::new(50.0, 50.0);

        let desc = describe(impact, impact, 0, 3, &config, &mut rng());

        // Padding yields a strictly positive distance and positive-signed
        // rotations; nothing degenerates to zero.
        assert!(desc.distance > 0.0);
        assert_eq!(desc.rotation_x, config.rotation_x_magnitude);
        assert_eq!(desc.rotation_y, -config.rotation_y_magnitude);
        assert!(desc.duration > 0.0);
    }

    #[test]
    fn test_rotation_signs_follow_axial_deltas() {
        let config = ShatterConfig::default();
        let impact = Vec2::new(100.0, 100.0);

        // Fragment up-left of the impact: dy < 0, dx < 0.
        let desc = describe(Vec2::new(50.0, 50.0), impact, 0, 3, &config, &mut rng());
        assert_eq!(desc.rotation_x, -config.rotation_x_magnitude);
        assert_eq!(desc.rotation_y, config.rotation_y_magnitude);
    }

    #[test]
    fn test_direction_mode_stacking_and_offset() {
        let out = ShatterConfig::default();
        let desc = describe(Vec2::new(60.0, 50.0), Vec2::new(50.0, 50.0), 2, 30, &out, &mut rng());
        assert_eq!(desc.stacking, 24.0); // 30 - 3*2
        assert!(desc.offset.is_some());

        let in_mode = ShatterConfig {
            direction: DirectionMode::In,
            ..ShatterConfig::default()
        };
        let desc = describe(
            Vec2::new(60.0, 50.0),
            Vec2::new(50.0, 50.0),
            2,
            30,
            &in_mode,
            &mut rng(),
        );
        assert_eq!(desc.stacking, in_mode.recede_depth);
        assert_eq!(desc.offset, None);
    }

    #[test]
    fn test_delay_bounded_by_geometry() {
        // Delay is bounded by the largest possible padded distance times
        // the scale and the jitter ceiling (spec'd so no timeout is needed
        // on the group).
        let config = ShatterConfig::default();
        let impact = Vec2::new(0.0, 0.0);
        let far = Vec2::new(485.0, 485.0);

        let desc = describe(far, impact, 0, 3, &config, &mut rng());
        let bound = (485.0f32 + config.distance_padding) * std::f32::consts::SQRT_2
            * config.delay_scale
            * config.delay_jitter.1;
        assert!(desc.delay <= bound + 1e-4);
    }

    #[test]
    fn test_empty_collection_yields_empty_group() {
        let config = ShatterConfig::default();
        let fragments: Vec<Fragment> = Vec::new();
        let (mut group, mut transforms) =
            choreograph(&fragments, 0, Vec2::new(1.0, 1.0), &config, &mut rng());

        assert!(group.is_empty());
        assert!(transforms.is_empty());
        assert_eq!(group.duration(), 0.0);

        // The completion hook still fires exactly once.
        let fired = std::rc::Rc::new(std::cell::Cell::new(0u32));
        let hook = {
            let fired = std::rc::Rc::clone(&fired);
            Box::new(move || fired.set(fired.get() + 1))
        };
        group.set_on_complete(hook);
        assert!(group.advance(0.0, &mut transforms));
        assert!(group.advance(1.0, &mut transforms));
        assert_eq!(fired.get(), 1);
    }
}
