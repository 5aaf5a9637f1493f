//! Generic convolution driver
//!
//! Implements the shared outer pixel loop used by every kernel-based filter
//! in this crate. The per-pixel computation is a strategy function, so the
//! standard weighted-sum convolution, the directional gradients and any
//! future kernel-based filter share one iteration scaffold.
//!
//! Border handling is always clamp-to-edge.

use crate::{FilterResult, Kernel};
use pixlab_core::PixelBuffer;

/// Run a per-pixel strategy over the whole image, producing a new buffer.
///
/// The strategy receives the source buffer, the output coordinate and the
/// kernel, and returns the finished RGBA pixel. The source is never
/// mutated.
pub fn filter_with<F>(src: &PixelBuffer, kernel: &Kernel, pixel_fn: F) -> FilterResult<PixelBuffer>
where
    F: Fn(&PixelBuffer, u32, u32, &Kernel) -> [u8; 4],
{
    let mut out = PixelBuffer::new(src.width(), src.height())?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            out.set_rgba(x, y, pixel_fn(src, x, y, kernel));
        }
    }
    Ok(out)
}

/// Standard weighted-sum convolution of a single pixel.
///
/// Each color channel is the sum over all taps of
/// `weight / normalizer * source`, with clamp-to-edge sampling. The final
/// value is `|sum|` truncated and capped at 255: negative sums are folded
/// by absolute value after accumulation, never clamped to zero midway.
/// Alpha is copied from the source pixel.
pub fn convolve_pixel(src: &PixelBuffer, x: u32, y: u32, kernel: &Kernel) -> [u8; 4] {
    let r = kernel.radius() as i32;
    let mut sum = [0i32; 3];

    for ky in -r..=r {
        for kx in -r..=r {
            let tap = src.rgba_clamped(x as i32 + kx, y as i32 + ky);
            let w = kernel.weight((kx + r) as u32, (ky + r) as u32);
            sum[0] += tap[0] as i32 * w;
            sum[1] += tap[1] as i32 * w;
            sum[2] += tap[2] as i32 * w;
        }
    }

    // Weights are integers, so the accumulation is exact; the normalizer
    // divides once at the end
    let n = kernel.normalizer();
    let alpha = src.rgba(x, y)[3];
    [
        fold_channel(sum[0] as f32 / n),
        fold_channel(sum[1] as f32 / n),
        fold_channel(sum[2] as f32 / n),
        alpha,
    ]
}

/// Truncate an accumulated channel sum into displayable range.
#[inline]
pub(crate) fn fold_channel(sum: f32) -> u8 {
    (sum.abs() as u32).min(255) as u8
}

/// Convolve an image with an arbitrary kernel.
pub fn convolve(src: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    filter_with(src, kernel, convolve_pixel)
}

/// Apply 3x3 mean (box) blur.
pub fn mean_blur(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    convolve(src, &Kernel::mean_3x3())
}

/// Apply 3x3 Gaussian blur.
pub fn gaussian_blur_3x3(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    convolve(src, &Kernel::gaussian_3x3())
}

/// Apply 5x5 Gaussian blur.
pub fn gaussian_blur_5x5(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    convolve(src, &Kernel::gaussian_5x5())
}
