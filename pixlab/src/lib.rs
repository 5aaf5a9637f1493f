//! Pixlab - Pixel-buffer image processing engine
//!
//! # Overview
//!
//! Pixlab operates on owned interleaved 8-bit RGBA buffers and provides:
//!
//! - Generic spatial convolution (mean blur, Gaussian blur)
//! - Gradient filters (Sobel, Prewitt; directional and combined magnitude)
//! - Rank filtering (median)
//! - Variation filtering (edge-preserving smoothing)
//! - Parallel intensity histograms (plain and cumulative)
//! - Grayscale conversion
//!
//! Every filter takes a shared reference to its source buffer and returns a
//! freshly allocated result of the same dimensions; nothing mutates its
//! input and no state survives between calls.
//!
//! # Example
//!
//! ```
//! use pixlab::{PixelBuffer, filter};
//!
//! let mut img = PixelBuffer::new(64, 48).unwrap();
//! img.set_rgba(10, 10, [255, 255, 255, 255]);
//!
//! let blurred = filter::mean_blur(&img).unwrap();
//! assert_eq!(blurred.width(), 64);
//! assert_eq!(blurred.height(), 48);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixlab_filter as filter;
pub use pixlab_histogram as histogram;
