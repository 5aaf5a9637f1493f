//! pixlab-filter - Image filtering operations
//!
//! This crate provides the kernel-based and windowed filters:
//!
//! - Convolution with arbitrary integer kernels
//! - Blur operations (mean blur, 3x3 and 5x5 Gaussian blur)
//! - Gradient filters (Sobel, Prewitt; directional and combined magnitude)
//! - Rank filtering (3x3 median)
//! - Variation filtering (edge-preserving smoothing)

pub mod convolve;
mod error;
pub mod gradient;
pub mod kernel;
pub mod rank;
pub mod variation;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{convolve, filter_with, gaussian_blur_3x3, gaussian_blur_5x5, mean_blur};
pub use gradient::{
    GradientOperator, gradient_magnitude, horizontal_gradient, vertical_gradient,
};
pub use rank::median_filter;
pub use variation::variation_filter;
