//! # Vertex Sampler
//!
//! Produces the point set a shatter cycle is triangulated from: the impact
//! point itself, plus one circle of jittered points per configured ring.
//!
//! ## Determinism
//!
//! Jitter is drawn from the caller-supplied `Rng`. With a seeded generator
//! the output is reproducible; with `jitter_factor = 0.0` it is exact.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};
use crate::point::{Bounds, Vec2};

/// One circle of sample points around the impact location.
///
/// Ring values are deployment configuration, not computed. Oversized rings
/// (radius well past the image extent) are deliberate: they guarantee the
/// triangulation covers the whole image even for corner clicks, because
/// their points clamp onto the image edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    /// Radius of the ring, in source-image pixels.
    pub radius: f32,
    /// Number of points sampled on the ring.
    pub count: usize,
}

impl RingSpec {
    /// Creates a new ring spec.
    #[must_use]
    pub const fn new(radius: f32, count: usize) -> Self {
        Self { radius, count }
    }

    /// Validates the spec: `count >= 1` and `radius >= 0`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRing`] when either constraint fails.
    pub fn validate(self) -> GeometryResult<()> {
        if self.count < 1 || self.radius < 0.0 || !self.radius.is_finite() {
            return Err(GeometryError::InvalidRing {
                radius: self.radius,
                count: self.count,
            });
        }
        Ok(())
    }
}

/// Samples the vertex set for one shatter cycle.
///
/// The returned set always starts with `impact` (exactly, no jitter), then
/// holds `count` points per ring in ring order. Every coordinate, including
/// the impact point, is clamped into `[0, width] x [0, height]` after jitter
/// is applied.
///
/// `jitter_factor` scales the per-axis uniform jitter to
/// `[-radius * factor, +radius * factor]`. The production value is `0.25`.
pub fn sample_vertices<R: Rng + ?Sized>(
    impact: Vec2,
    rings: &[RingSpec],
    bounds: Bounds,
    jitter_factor: f32,
    rng: &mut R,
) -> Vec<Vec2> {
    let total: usize = 1 + rings.iter().map(|r| r.count).sum::<usize>();
    let mut vertices = Vec::with_capacity(total);

    vertices.push(impact);

    for ring in rings {
        let variance = ring.radius * jitter_factor;
        for i in 0..ring.count {
            #[allow(clippy::cast_precision_loss)]
            let angle = (i as f32 / ring.count as f32) * std::f32::consts::TAU;
            let x = angle.cos() * ring.radius + impact.x + jitter(variance, rng);
            let y = angle.sin() * ring.radius + impact.y + jitter(variance, rng);
            vertices.push(Vec2::new(x, y));
        }
    }

    for v in &mut vertices {
        *v = v.clamp_to(bounds);
    }

    vertices
}

/// Draws one uniform jitter sample in `[-variance, +variance]`.
fn jitter<R: Rng + ?Sized>(variance: f32, rng: &mut R) -> f32 {
    if variance <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-variance..=variance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_first_vertex_is_exact_impact_point() {
        let rings = [RingSpec::new(50.0, 8), RingSpec::new(600.0, 21)];
        let bounds = Bounds::new(485.0, 485.0);
        let impact = Vec2::new(123.5, 77.25);

        let vertices = sample_vertices(impact, &rings, bounds, 0.25, &mut rng());

        assert_eq!(vertices[0], impact);
        assert_eq!(vertices.len(), 1 + 8 + 21);
    }

    #[test]
    fn test_all_vertices_clamped_into_bounds() {
        let rings = [RingSpec::new(1200.0, 52)];
        let bounds = Bounds::new(485.0, 485.0);

        // Corner click: most ring points land far outside and must clamp.
        let vertices = sample_vertices(Vec2::new(2.0, 3.0), &rings, bounds, 0.25, &mut rng());

        for v in &vertices {
            assert!(bounds.contains(*v), "vertex out of bounds: {v:?}");
        }
    }

    #[test]
    fn test_zero_jitter_ring_positions_are_exact() {
        // Single ring r=100 c=4 at the origin of a large image: the four
        // ideal positions are (100,0), (0,100), (-100,0), (0,-100); the two
        // negative ones clamp to the image edge.
        let rings = [RingSpec::new(100.0, 4)];
        let bounds = Bounds::new(10_000.0, 10_000.0);

        let vertices = sample_vertices(Vec2::ZERO, &rings, bounds, 0.0, &mut rng());

        assert_eq!(vertices.len(), 5);
        let eps = 1e-3;
        assert!(vertices[1].distance(Vec2::new(100.0, 0.0)) < eps);
        assert!(vertices[2].distance(Vec2::new(0.0, 100.0)) < eps);
        // cos(pi) * 100 = -100 -> clamped to 0
        assert!(vertices[3].distance(Vec2::new(0.0, 0.0)) < eps);
        // sin(3pi/2) * 100 = -100 -> clamped to 0
        assert!(vertices[4].distance(Vec2::new(0.0, 0.0)) < eps);
    }

    #[test]
    fn test_jitter_stays_within_variance() {
        let rings = [RingSpec::new(100.0, 64)];
        let bounds = Bounds::new(10_000.0, 10_000.0);
        let impact = Vec2::new(5_000.0, 5_000.0);
        let factor = 0.25;

        let vertices = sample_vertices(impact, &rings, bounds, factor, &mut rng());

        for (i, v) in vertices.iter().enumerate().skip(1) {
            let idx = i - 1;
            #[allow(clippy::cast_precision_loss)]
            let angle = (idx as f32 / 64.0) * std::f32::consts::TAU;
            let ideal = Vec2::new(
                angle.cos() * 100.0 + impact.x,
                angle.sin() * 100.0 + impact.y,
            );
            let variance = 100.0 * factor + 1e-3;
            assert!((v.x - ideal.x).abs() <= variance);
            assert!((v.y - ideal.y).abs() <= variance);
        }
    }

    #[test]
    fn test_ring_validation() {
        assert!(RingSpec::new(100.0, 4).validate().is_ok());
        assert!(RingSpec::new(0.0, 1).validate().is_ok());
        assert!(RingSpec::new(-1.0, 4).validate().is_err());
        assert!(RingSpec::new(100.0, 0).validate().is_err());
    }
}
