//! Rank (order-statistic) filtering
//!
//! Unlike convolution there is no weighted-sum formulation: the filter
//! materializes the neighborhood sample set for every pixel, sorts it and
//! picks a rank. Only the median over a fixed 3x3 window is exposed.

use crate::FilterResult;
use pixlab_core::PixelBuffer;

/// Window half-width of the median filter.
const RADIUS: i32 = 1;
/// Number of samples in the 3x3 window.
const WINDOW: usize = 9;

/// Apply a 3x3 median filter.
///
/// The filter operates on the red channel (the source is expected to be
/// gray or red-representative) and writes the median identically into R, G
/// and B, producing a grayscale-looking output. Alpha is forced to 255.
/// Border handling is clamp-to-edge.
pub fn median_filter(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    let mut out = PixelBuffer::new(src.width(), src.height())?;
    let mut samples = [0u8; WINDOW];

    for y in 0..src.height() {
        for x in 0..src.width() {
            let mut n = 0;
            for ky in -RADIUS..=RADIUS {
                for kx in -RADIUS..=RADIUS {
                    samples[n] = src.rgba_clamped(x as i32 + kx, y as i32 + ky)[0];
                    n += 1;
                }
            }
            samples.sort_unstable();
            let median = samples[WINDOW / 2];
            out.set_rgba(x, y, [median, median, median, 255]);
        }
    }
    Ok(out)
}
