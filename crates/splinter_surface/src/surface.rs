//! Owned RGBA8 raster buffers.
//!
//! A `PixelSurface` is the exclusively-owned backing store for one fragment
//! (or for the whole source image). Hosts composite these buffers; nothing
//! in this crate talks to a display.

use bytemuck::{Pod, Zeroable};

use crate::error::{SurfaceError, SurfaceResult};

/// One packed RGBA8 pixel.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable, PartialEq, Eq)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Fully transparent black.
    pub const CLEAR: Self = Self(0);

    /// Creates a pixel from RGBA components.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24))
    }

    /// Red component.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Alpha component.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    /// Returns true if the pixel is fully transparent.
    #[inline]
    #[must_use]
    pub const fn is_clear(self) -> bool {
        self.a() == 0
    }
}

/// An owned raster buffer of packed RGBA8 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelSurface {
    /// Allocates a cleared surface.
    ///
    /// Allocation goes through `try_reserve` so that backing-store
    /// exhaustion surfaces as an error instead of an abort.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::ZeroSized`] for a zero dimension,
    /// [`SurfaceError::Allocation`] when the buffer cannot be reserved.
    pub fn try_new(width: u32, height: u32) -> SurfaceResult<Self> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::ZeroSized { width, height });
        }

        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| SurfaceError::Allocation { width, height })?;
        pixels.resize(len, Pixel::CLEAR);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reads one pixel, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Writes one pixel. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = pixel;
        }
    }

    /// Fills the whole surface with one pixel value.
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Raw pixel slice, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Raw byte view for host compositors (RGBA8, row-major).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels with non-zero alpha. Test and diagnostics helper.
    #[must_use]
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_clear()).count()
    }
}
