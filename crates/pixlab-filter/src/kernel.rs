//! Convolution kernels
//!
//! Square integer-weight kernels with a floating-point normalizer applied
//! as a divisor. All kernels have odd width `2 * radius + 1`.

use crate::{FilterError, FilterResult};

/// A square 2D convolution kernel.
///
/// Weights are stored row-major. The normalizer divides every weight when
/// the kernel is applied, keeping weighted sums in displayable range
/// (e.g. 9 for the 3x3 mean kernel).
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Half-width excluding the center tap
    radius: u32,
    /// Row-major weights, length `width * width`
    weights: Vec<i32>,
    /// Divisor applied to the weighted sum
    normalizer: f32,
}

impl Kernel {
    /// Create a kernel from raw weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the weight count does not
    /// match `(2 * radius + 1)^2` or the normalizer is zero.
    pub fn from_weights(radius: u32, weights: Vec<i32>, normalizer: f32) -> FilterResult<Self> {
        let width = (2 * radius + 1) as usize;
        if weights.len() != width * width {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for radius {radius}, got {}",
                width * width,
                weights.len()
            )));
        }
        if normalizer == 0.0 {
            return Err(FilterError::InvalidKernel(
                "normalizer must be nonzero".to_string(),
            ));
        }
        Ok(Self {
            radius,
            weights,
            normalizer,
        })
    }

    /// 3x3 mean (box) blur kernel, normalizer 9.
    pub fn mean_3x3() -> Self {
        Self {
            radius: 1,
            weights: vec![1; 9],
            normalizer: 9.0,
        }
    }

    /// 3x3 Gaussian kernel, normalizer 16.
    pub fn gaussian_3x3() -> Self {
        #[rustfmt::skip]
        let weights = vec![
            1, 2, 1,
            2, 4, 2,
            1, 2, 1,
        ];
        Self {
            radius: 1,
            weights,
            normalizer: 16.0,
        }
    }

    /// 5x5 Gaussian kernel (squared binomial weights), normalizer 246.
    pub fn gaussian_5x5() -> Self {
        #[rustfmt::skip]
        let weights = vec![
            1,  4,  6,  4, 1,
            4, 16, 24, 16, 4,
            6, 24, 36, 24, 6,
            4, 16, 24, 16, 4,
            1,  4,  6,  4, 1,
        ];
        Self {
            radius: 2,
            weights,
            normalizer: 246.0,
        }
    }

    /// Horizontal derivative kernel, normalizer `c + 2`.
    ///
    /// `c = 2` gives the Sobel operator, `c = 1` Prewitt.
    pub fn directional_x(c: i32) -> Self {
        #[rustfmt::skip]
        let weights = vec![
            -1, 0, 1,
            -c, 0, c,
            -1, 0, 1,
        ];
        Self {
            radius: 1,
            weights,
            normalizer: (c + 2) as f32,
        }
    }

    /// Vertical derivative kernel, normalizer `c + 2`.
    pub fn directional_y(c: i32) -> Self {
        #[rustfmt::skip]
        let weights = vec![
            -1, -c, -1,
             0,  0,  0,
             1,  c,  1,
        ];
        Self {
            radius: 1,
            weights,
            normalizer: (c + 2) as f32,
        }
    }

    /// Kernel radius (half-width excluding center).
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Full kernel width, `2 * radius + 1`.
    #[inline]
    pub fn width(&self) -> u32 {
        2 * self.radius + 1
    }

    /// The divisor applied to weighted sums.
    #[inline]
    pub fn normalizer(&self) -> f32 {
        self.normalizer
    }

    /// Weight at kernel-grid coordinates (kx, ky), both in `0..width`.
    #[inline]
    pub fn weight(&self, kx: u32, ky: u32) -> i32 {
        debug_assert!(kx < self.width() && ky < self.width());
        self.weights[(ky * self.width() + kx) as usize]
    }
}
