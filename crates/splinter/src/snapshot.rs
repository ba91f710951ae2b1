//! Visual snapshot service seam.
//!
//! Some deployments re-shatter the most recently composited view instead of
//! the original static image. Capturing that view is an external concern
//! (real hosts fetch every referenced image source, then rasterize the
//! container); the session only needs the contract: scene in, image payload
//! out, may fail.

use splinter_geometry::Bounds;
use splinter_surface::{Fragment, Pixel, PixelSurface};

use crate::error::{SnapshotError, SnapshotResult};

/// Read-only view of the visual state handed to a snapshot capture.
#[derive(Debug)]
pub struct SceneView<'a> {
    /// Extent of the container being rasterized.
    pub bounds: Bounds,
    /// Background fill behind everything else.
    pub background: Pixel,
    /// The whole displayed image, when attached.
    pub image: Option<&'a PixelSurface>,
    /// Live fragments, at their bounding-box placements.
    pub fragments: &'a [Fragment],
}

/// External snapshot capture: rasterizes the current visual state into a
/// new source image.
///
/// Asynchronous in real hosts (network fetch of image sources precedes the
/// rasterization); the session calls it at a single suspension point and
/// does not start sampling until it returns.
pub trait SnapshotService {
    /// Captures the scene into an owned image payload.
    ///
    /// # Errors
    ///
    /// [`SnapshotError`] when a referenced source cannot be fetched or the
    /// scene cannot be rasterized. The session treats this as a no-op click.
    fn capture(&mut self, scene: &SceneView<'_>) -> SnapshotResult<PixelSurface>;
}

/// Software compositor: flattens the scene by painting background, image,
/// then fragments in order. The bundled capture path for headless hosts
/// and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareCompositor;

impl SnapshotService for SoftwareCompositor {
    fn capture(&mut self, scene: &SceneView<'_>) -> SnapshotResult<PixelSurface> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (w, h) = (
            scene.bounds.width.ceil().max(1.0) as u32,
            scene.bounds.height.ceil().max(1.0) as u32,
        );

        let mut out = PixelSurface::try_new(w, h)
            .map_err(|e| SnapshotError::Rasterize(e.to_string()))?;
        out.fill(scene.background);

        if let Some(image) = scene.image {
            blit(&mut out, image, 0, 0);
        }

        for fragment in scene.fragments {
            #[allow(clippy::cast_possible_truncation)]
            blit(
                &mut out,
                &fragment.surface,
                fragment.bounds.x.floor() as i64,
                fragment.bounds.y.floor() as i64,
            );
        }

        Ok(out)
    }
}

/// Copies `src` onto `dst` at an offset, skipping transparent pixels.
fn blit(dst: &mut PixelSurface, src: &PixelSurface, at_x: i64, at_y: i64) {
    for sy in 0..src.height() {
        for sx in 0..src.width() {
            let dx = at_x + i64::from(sx);
            let dy = at_y + i64::from(sy);
            if dx < 0 || dy < 0 {
                continue;
            }
            if let Some(pixel) = src.get(sx, sy) {
                if !pixel.is_clear() {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    dst.set(dx as u32, dy as u32, pixel);
                }
            }
        }
    }
}
