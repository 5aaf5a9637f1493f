//! PixelBuffer - The shared image container
//!
//! # Pixel layout
//!
//! - 8 bits per channel, four channels (R, G, B, A) interleaved
//! - Row-major: channel `c` of pixel (x, y) lives at byte
//!   `4 * (y * width + x) + c`
//! - Invariant: `data.len() == width * height * 4`, enforced at
//!   construction and maintained because the data is never exposed mutably
//!
//! # Ownership model
//!
//! Buffers are value-like. Every filter in this workspace takes a shared
//! reference to its source and returns a freshly allocated output buffer of
//! the same dimensions; no operation mutates its input.

use crate::error::{Error, Result};

/// Pixel memory layout.
///
/// Only 32-bit interleaved RGBA is supported; the enum exists so the
/// call boundary names the layout explicitly and can be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// 8 bits per channel, R G B A interleaved
    #[default]
    Rgba32,
}

impl PixelFormat {
    /// Bytes occupied by one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba32 => 4,
        }
    }
}

/// Owned interleaved RGBA image buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled (transparent black) buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyInput { width, height });
        }
        let format = PixelFormat::Rgba32;
        let len = width as usize * height as usize * format.bytes_per_pixel();
        Ok(Self {
            width,
            height,
            format,
            data: vec![0; len],
        })
    }

    /// Wrap raw pixel data handed over by a caller (e.g. a viewer).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for zero-sized dimensions and
    /// [`Error::InvalidBuffer`] if `data.len() != width * height * 4`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyInput { width, height });
        }
        let format = PixelFormat::Rgba32;
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(Error::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel memory layout.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw interleaved pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw pixel data.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        4 * (y as usize * self.width as usize + x as usize)
    }

    /// Get the RGBA values at (x, y).
    ///
    /// Bounds are checked in debug builds; release builds rely on the
    /// length invariant.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Get the red channel at (x, y).
    #[inline]
    pub fn red(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[self.offset(x, y)]
    }

    /// Get the red channel at a flat pixel index (row-major).
    #[inline]
    pub fn red_at_index(&self, index: usize) -> u8 {
        debug_assert!(index < self.pixel_count());
        self.data[4 * index]
    }

    /// Set the RGBA values at (x, y).
    #[inline]
    pub fn set_rgba(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        debug_assert!(x < self.width && y < self.height);
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&pixel);
    }

    /// Get the RGBA values at signed coordinates with clamp-to-edge
    /// border handling.
    #[inline]
    pub fn rgba_clamped(&self, x: i32, y: i32) -> [u8; 4] {
        let (cx, cy) = crate::border::clamp_to_edge(x, y, self.width, self.height);
        self.rgba(cx, cy)
    }
}
