//! Gradient (edge detection) filters
//!
//! Directional derivatives via the Sobel or Prewitt operator, plus the
//! combined gradient magnitude `sqrt(gx^2 + gy^2)`.
//!
//! The two operators differ only in the center weight of their kernels, so
//! the operator is a parameter rather than two sets of functions. The
//! directional filters are ordinary convolutions and go through the generic
//! driver; the magnitude filter applies both kernels simultaneously in one
//! pass because it needs both component sums per channel before folding.

use crate::convolve::{convolve, fold_channel};
use crate::{FilterResult, Kernel};
use pixlab_core::PixelBuffer;

/// Derivative operator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientOperator {
    /// Center weight 2
    #[default]
    Sobel,
    /// Center weight 1
    Prewitt,
}

impl GradientOperator {
    /// The kernel center weight `c`; component sums are divided by `c + 2`.
    #[inline]
    pub fn center_weight(self) -> i32 {
        match self {
            GradientOperator::Sobel => 2,
            GradientOperator::Prewitt => 1,
        }
    }
}

/// Horizontal (d/dx) derivative filter.
pub fn horizontal_gradient(
    src: &PixelBuffer,
    operator: GradientOperator,
) -> FilterResult<PixelBuffer> {
    convolve(src, &Kernel::directional_x(operator.center_weight()))
}

/// Vertical (d/dy) derivative filter.
pub fn vertical_gradient(
    src: &PixelBuffer,
    operator: GradientOperator,
) -> FilterResult<PixelBuffer> {
    convolve(src, &Kernel::directional_y(operator.center_weight()))
}

/// Combined gradient-magnitude filter.
///
/// Applies the X and Y derivative kernels in a single 3x3 pass and combines
/// them per channel as `sqrt(gx^2 + gy^2)`, truncated and capped at 255.
/// Each channel uses its own component sums. Alpha is forced to 255.
pub fn gradient_magnitude(
    src: &PixelBuffer,
    operator: GradientOperator,
) -> FilterResult<PixelBuffer> {
    let c = operator.center_weight();
    let kernel_x = Kernel::directional_x(c);
    let kernel_y = Kernel::directional_y(c);
    let divisor = (c + 2) as f32;

    let mut out = PixelBuffer::new(src.width(), src.height())?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let mut gx = [0i32; 3];
            let mut gy = [0i32; 3];

            for ky in -1..=1i32 {
                for kx in -1..=1i32 {
                    let tap = src.rgba_clamped(x as i32 + kx, y as i32 + ky);
                    let wx = kernel_x.weight((kx + 1) as u32, (ky + 1) as u32);
                    let wy = kernel_y.weight((kx + 1) as u32, (ky + 1) as u32);
                    for ch in 0..3 {
                        gx[ch] += tap[ch] as i32 * wx;
                        gy[ch] += tap[ch] as i32 * wy;
                    }
                }
            }

            let mut pixel = [255u8; 4];
            for ch in 0..3 {
                let fx = gx[ch] as f32 / divisor;
                let fy = gy[ch] as f32 / divisor;
                pixel[ch] = fold_channel((fx * fx + fy * fy).sqrt());
            }
            out.set_rgba(x, y, pixel);
        }
    }
    Ok(out)
}
