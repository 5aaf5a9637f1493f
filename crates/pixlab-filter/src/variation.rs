//! Variation filter (edge-preserving smoothing)
//!
//! A bilateral-style filter over a 5x5 window: every neighbor contributes
//! with weight `1 / |Rp - Rn|`, so similar pixels dominate the average and
//! dissimilar ones are down-weighted. In flat regions it approximates a box
//! blur; across an intensity discontinuity the far side contributes almost
//! nothing, which preserves the edge.
//!
//! Equal-valued neighbors would divide by zero, so their raw weight is
//! floored at 5.0. The floor is part of the filter's definition (it sets
//! the self-contribution of flat regions), not a numeric workaround.

use crate::FilterResult;
use pixlab_core::PixelBuffer;

/// Window half-width.
const RADIUS: i32 = 2;
/// Raw weight used when neighbor and center have equal intensity.
const EQUAL_WEIGHT: f32 = 5.0;

/// Apply the 5x5 variation filter.
///
/// Operates on the red channel (gray or red-representative source) and
/// writes the result identically into R, G and B; alpha is forced to 255.
/// Border handling is clamp-to-edge.
pub fn variation_filter(src: &PixelBuffer) -> FilterResult<PixelBuffer> {
    let mut out = PixelBuffer::new(src.width(), src.height())?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let center = src.red(x, y) as i32;

            let mut total_weight = 0.0f32;
            let mut weighted_sum = 0.0f32;

            for ky in -RADIUS..=RADIUS {
                for kx in -RADIUS..=RADIUS {
                    let neighbor =
                        src.rgba_clamped(x as i32 + kx, y as i32 + ky)[0] as i32;
                    let weight = if neighbor == center {
                        EQUAL_WEIGHT
                    } else {
                        (center - neighbor).abs() as f32
                    };
                    total_weight += 1.0 / weight;
                    weighted_sum += neighbor as f32 / weight;
                }
            }

            let value = (weighted_sum / total_weight) as u8;
            out.set_rgba(x, y, [value, value, value, 255]);
        }
    }
    Ok(out)
}
