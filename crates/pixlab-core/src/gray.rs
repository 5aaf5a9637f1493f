//! Grayscale conversion
//!
//! Luma-weighted RGB reduction using the BT.601 coefficients. Unlike the
//! neighborhood filters, this is a pure per-pixel map: alpha is carried
//! through from the source unchanged.

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// BT.601 luma weights for R, G, B.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Convert an RGBA image to grayscale.
///
/// Each output pixel holds `0.299 R + 0.587 G + 0.114 B` (truncated) in its
/// R, G and B channels; alpha is preserved.
pub fn to_grayscale(src: &PixelBuffer) -> Result<PixelBuffer> {
    let mut out = PixelBuffer::new(src.width(), src.height())?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let [r, g, b, a] = src.rgba(x, y);
            let gray = luma(r, g, b);
            out.set_rgba(x, y, [gray, gray, gray, a]);
        }
    }
    Ok(out)
}

/// Weighted luma value of a single RGB triple, truncated to u8.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0, 0, 0), 0);
        // Weights sum to 1.0; truncation may lose at most one level
        assert!(luma(255, 255, 255) >= 254);
    }

    #[test]
    fn test_green_dominates() {
        assert!(luma(0, 200, 0) > luma(200, 0, 0));
        assert!(luma(200, 0, 0) > luma(0, 0, 200));
    }

    #[test]
    fn test_grayscale_channels_equal_alpha_preserved() {
        let mut src = PixelBuffer::new(2, 2).unwrap();
        src.set_rgba(0, 0, [200, 100, 50, 77]);
        src.set_rgba(1, 1, [10, 10, 10, 255]);

        let gray = to_grayscale(&src).unwrap();
        let [r, g, b, a] = gray.rgba(0, 0);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 77);
        assert_eq!(gray.rgba(1, 1), [10, 10, 10, 255]);
    }

    #[test]
    fn test_grayscale_does_not_mutate_source() {
        let mut src = PixelBuffer::new(1, 1).unwrap();
        src.set_rgba(0, 0, [200, 100, 50, 255]);
        let copy = src.clone();
        let _ = to_grayscale(&src).unwrap();
        assert_eq!(src, copy);
    }
}
