//! # Fragment Builder
//!
//! Converts one triangle of the vertex set into an isolated, image-clipped
//! visual fragment: a bounding box, a centroid, and an exclusively-owned
//! surface holding the portion of the source image under the triangle.
//!
//! The derivations (`bounding_box`, `centroid`) are pure functions; only
//! [`build_fragment`] allocates and draws.

use splinter_geometry::Vec2;

use crate::error::SurfaceResult;
use crate::surface::PixelSurface;

/// Axis-aligned bounding box of one triangle, in source-image space.
///
/// Uses the 1-pixel-inclusive convention (`w = x_max - x_min + 1`) so an
/// axis-aligned edge never produces a zero-area box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Left edge (minimum X of the triangle).
    pub x: f32,
    /// Top edge (minimum Y of the triangle).
    pub y: f32,
    /// Inclusive width.
    pub w: f32,
    /// Inclusive height.
    pub h: f32,
}

impl BoundingBox {
    /// Surface width needed to hold the box, in whole pixels.
    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.w.ceil().max(1.0) as u32
    }

    /// Surface height needed to hold the box, in whole pixels.
    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.h.ceil().max(1.0) as u32
    }
}

/// Computes the inclusive bounding box of a triangle.
#[must_use]
pub fn bounding_box(v0: Vec2, v1: Vec2, v2: Vec2) -> BoundingBox {
    let x_min = v0.x.min(v1.x).min(v2.x);
    let x_max = v0.x.max(v1.x).max(v2.x);
    let y_min = v0.y.min(v1.y).min(v2.y);
    let y_max = v0.y.max(v1.y).max(v2.y);

    BoundingBox {
        x: x_min,
        y: y_min,
        w: x_max - x_min + 1.0,
        h: y_max - y_min + 1.0,
    }
}

/// Computes the centroid (arithmetic mean) of a triangle.
///
/// Used only for animation parameters, never for clipping.
#[must_use]
pub fn centroid(v0: Vec2, v1: Vec2, v2: Vec2) -> Vec2 {
    Vec2::new(
        (v0.x + v1.x + v2.x) / 3.0,
        (v0.y + v1.y + v2.y) / 3.0,
    )
}

/// One triangular, independently animatable slice of the source image.
///
/// Lifecycle: created during fragment building for one shatter cycle, owned
/// by the session for the duration of the animation, dropped when the
/// session settles.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// The triangle's vertices, in source-image space.
    pub vertices: [Vec2; 3],
    /// Bounding box; its top-left is the placement metadata for compositing.
    pub bounds: BoundingBox,
    /// Arithmetic mean of the three vertices.
    pub centroid: Vec2,
    /// Clipped sub-image, sized to the bounding box.
    pub surface: PixelSurface,
}

/// Builds one fragment from a triangle and the current source image.
///
/// The surface is sized to the bounding box and pre-populated by drawing
/// the source image translated by `(-bounds.x, -bounds.y)`, clipped to the
/// triangle: a pixel is copied when its center lies inside the triangle.
///
/// # Errors
///
/// Propagates [`crate::SurfaceError`] when the backing surface cannot be
/// allocated. Callers must treat that as fatal for the whole cycle.
pub fn build_fragment(
    v0: Vec2,
    v1: Vec2,
    v2: Vec2,
    source: &PixelSurface,
) -> SurfaceResult<Fragment> {
    let bounds = bounding_box(v0, v1, v2);
    let center = centroid(v0, v1, v2);

    let mut surface = PixelSurface::try_new(bounds.pixel_width(), bounds.pixel_height())?;
    clip_draw(&mut surface, bounds, v0, v1, v2, source);

    tracing::trace!(
        w = surface.width(),
        h = surface.height(),
        "fragment built"
    );

    Ok(Fragment {
        vertices: [v0, v1, v2],
        bounds,
        centroid: center,
        surface,
    })
}

/// Draws the source image through the triangle clip onto `surface`.
fn clip_draw(
    surface: &mut PixelSurface,
    bounds: BoundingBox,
    v0: Vec2,
    v1: Vec2,
    v2: Vec2,
    source: &PixelSurface,
) {
    // Orientation sign so the edge tests accept either winding.
    let area = edge(v0, v1, v2);
    if area == 0.0 {
        // Degenerate triangle: nothing under the clip, surface stays clear.
        return;
    }
    let sign = area.signum();

    for py in 0..surface.height() {
        for px in 0..surface.width() {
            // Pixel center in source-image space (inverse of the
            // translate-by-(-x,-y) draw).
            #[allow(clippy::cast_precision_loss)]
            let p = Vec2::new(
                bounds.x + px as f32 + 0.5,
                bounds.y + py as f32 + 0.5,
            );

            let inside = edge(v0, v1, p) * sign >= 0.0
                && edge(v1, v2, p) * sign >= 0.0
                && edge(v2, v0, p) * sign >= 0.0;
            if !inside {
                continue;
            }

            let sx = p.x.floor();
            let sy = p.y.floor();
            if sx < 0.0 || sy < 0.0 {
                continue;
            }
            if let Some(pixel) = source.get(sx as u32, sy as u32) {
                surface.set(px, py, pixel);
            }
        }
    }
}

/// Signed edge function: positive when `p` is left of `a -> b`.
#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}
