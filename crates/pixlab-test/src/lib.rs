//! pixlab-test - Regression test framework for pixlab
//!
//! This crate provides a small regression test harness plus synthetic
//! image constructors used by the integration tests. Comparisons are
//! in-memory; failures are recorded and reported on [`RegParams::cleanup`].
//!
//! # Usage
//!
//! ```
//! use pixlab_test::{RegParams, uniform_image};
//!
//! let mut rp = RegParams::new("example");
//! let img = uniform_image(4, 4, [10, 20, 30, 255]).unwrap();
//! rp.compare_values(16.0, img.pixel_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use pixlab_core::{PixelBuffer, Result};

/// Create a buffer filled with a single RGBA value.
pub fn uniform_image(width: u32, height: u32, pixel: [u8; 4]) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            buf.set_rgba(x, y, pixel);
        }
    }
    Ok(buf)
}

/// Create an opaque gray buffer whose intensity is a function of (x, y).
///
/// The value is written identically into R, G and B.
pub fn gradient_image(
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> u8,
) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let v = f(x, y);
            buf.set_rgba(x, y, [v, v, v, 255]);
        }
    }
    Ok(buf)
}
