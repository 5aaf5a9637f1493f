//! Histogram regression test
//!
//! Exercises bin conservation across partitioning schemes and image sizes,
//! the cumulative variant, and the accumulate-into-caller contract.

use pixlab_core::{Error, PixelBuffer, to_grayscale};
use pixlab_histogram::{BINS, color_histogram, cumulative_histogram, gray_histogram};
use pixlab_test::{RegParams, gradient_image, uniform_image};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // --- Test 1: Conservation on sizes not divisible by the worker count ---
    for &(w, h) in &[(7u32, 7u32), (1, 1), (4, 4), (13, 5), (3, 11), (101, 1)] {
        let pixs = gradient_image(w, h, |x, y| ((x * 41 + y * 23) % 256) as u8).unwrap();
        let mut by_column = [0u32; BINS];
        let mut by_index = [0u32; BINS];
        color_histogram(&pixs, &mut by_column);
        gray_histogram(&pixs, &mut by_index);

        let total = (w * h) as f64;
        rp.compare_values(total, by_column.iter().sum::<u32>() as f64, 0.0);
        rp.compare_values(total, by_index.iter().sum::<u32>() as f64, 0.0);
        eprintln!("  {}x{}: {} pixels counted", w, h, w * h);
    }

    // --- Test 2: Zero-sized images are rejected at buffer construction ---
    let empty = PixelBuffer::new(0, 0);
    rp.compare_values(
        1.0,
        matches!(empty, Err(Error::EmptyInput { .. })) as u8 as f64,
        0.0,
    );

    // --- Test 3: Cumulative monotonicity and final bin ---
    let pixs = gradient_image(7, 7, |x, y| ((x + y) * 9 % 256) as u8).unwrap();
    let mut histogram = [0u32; BINS];
    gray_histogram(&pixs, &mut histogram);
    let cumulative = cumulative_histogram(&histogram);
    let mut monotone = true;
    for i in 1..BINS {
        monotone &= cumulative[i] >= cumulative[i - 1];
    }
    rp.compare_values(1.0, if monotone { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(49.0, cumulative[BINS - 1] as f64, 0.0);

    // --- Test 4: Caller array is accumulated into, not replaced ---
    let flat = uniform_image(5, 5, [17, 17, 17, 255]).unwrap();
    let mut histogram = [0u32; BINS];
    color_histogram(&flat, &mut histogram);
    color_histogram(&flat, &mut histogram);
    rp.compare_values(50.0, histogram[17] as f64, 0.0);

    // --- Test 5: Grayscale conversion then histogram counts luma values ---
    let color = uniform_image(6, 4, [255, 0, 0, 255]).unwrap();
    let gray = to_grayscale(&color).expect("grayscale");
    let mut histogram = [0u32; BINS];
    gray_histogram(&gray, &mut histogram);
    // trunc(0.299 * 255) = 76
    rp.compare_values(24.0, histogram[76] as f64, 0.0);

    assert!(rp.cleanup(), "histogram regression test failed");
}
