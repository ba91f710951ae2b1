//! Pointer input mapping.
//!
//! The sole external trigger for a shatter cycle is a single click/tap.
//! Host coordinates arrive relative to the page; the sampler wants them
//! relative to the displayed image's on-screen box.

use splinter_geometry::Vec2;

/// A click/tap in host (page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerClick {
    /// Host-space X.
    pub x: f32,
    /// Host-space Y.
    pub y: f32,
}

impl PointerClick {
    /// Creates a new click event.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// On-screen box of the displayed image, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageBox {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Displayed width.
    pub width: f32,
    /// Displayed height.
    pub height: f32,
}

impl ImageBox {
    /// Creates a new image box.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A box anchored at the host origin, for headless hosts that already
    /// deliver image-relative coordinates.
    #[must_use]
    pub const fn at_origin(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Converts a host-space click into an image-relative impact point.
///
/// Returns `None` when the click falls outside the image box; such clicks
/// never start a cycle.
#[must_use]
pub fn relative_impact(click: PointerClick, image_box: ImageBox) -> Option<Vec2> {
    let x = click.x - image_box.left;
    let y = click.y - image_box.top;
    if x < 0.0 || y < 0.0 || x > image_box.width || y > image_box.height {
        return None;
    }
    Some(Vec2::new(x, y))
}
