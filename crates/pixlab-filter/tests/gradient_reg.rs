//! Gradient filter regression test
//!
//! Exercises the directional and combined gradient filters on flat fields
//! and step edges, for both operators.

use pixlab_filter::{
    GradientOperator, gradient_magnitude, horizontal_gradient, vertical_gradient,
};
use pixlab_test::{RegParams, gradient_image, uniform_image};

#[test]
fn gradient_reg() {
    let mut rp = RegParams::new("gradient");

    // --- Test 1: Flat field maps to black for every variant ---
    let flat = uniform_image(9, 7, [144, 60, 10, 255]).unwrap();
    for op in [GradientOperator::Sobel, GradientOperator::Prewitt] {
        for result in [
            horizontal_gradient(&flat, op),
            vertical_gradient(&flat, op),
            gradient_magnitude(&flat, op),
        ] {
            let out = result.expect("flat gradient");
            rp.compare_values(9.0, out.width() as f64, 0.0);
            rp.compare_values(7.0, out.height() as f64, 0.0);
            let mut max = 0u8;
            for y in 0..7 {
                for x in 0..9 {
                    let [r, g, b, _] = out.rgba(x, y);
                    max = max.max(r).max(g).max(b);
                }
            }
            rp.compare_values(0.0, max as f64, 0.0);
        }
    }
    eprintln!("  flat fields are black");

    // --- Test 2: Vertical step edge ---
    // Columns left of the step see the full jump: the X kernel weights on
    // the bright side sum to c + 2, so the response equals the step height
    let step = gradient_image(10, 6, |x, _| if x < 5 { 0 } else { 200 }).unwrap();
    for op in [GradientOperator::Sobel, GradientOperator::Prewitt] {
        let h = horizontal_gradient(&step, op).expect("horizontal");
        let m = gradient_magnitude(&step, op).expect("magnitude");
        rp.compare_values(200.0, h.rgba(4, 3)[0] as f64, 0.0);
        rp.compare_values(200.0, m.rgba(4, 3)[0] as f64, 1.0);
        // Rows are uniform, so the vertical component is zero
        let v = vertical_gradient(&step, op).expect("vertical");
        rp.compare_values(0.0, v.rgba(4, 3)[0] as f64, 0.0);
    }
    eprintln!("  step edge detected");

    // --- Test 3: Horizontal step edge responds to the Y kernel only ---
    let step = gradient_image(6, 10, |_, y| if y < 5 { 0 } else { 200 }).unwrap();
    let h = horizontal_gradient(&step, GradientOperator::Sobel).expect("horizontal");
    let v = vertical_gradient(&step, GradientOperator::Sobel).expect("vertical");
    rp.compare_values(0.0, h.rgba(3, 4)[0] as f64, 0.0);
    rp.compare_values(200.0, v.rgba(3, 4)[0] as f64, 0.0);

    // --- Test 4: 1x1 degeneracy ---
    let single = uniform_image(1, 1, [99, 99, 99, 255]).unwrap();
    let m = gradient_magnitude(&single, GradientOperator::Sobel).expect("1x1 magnitude");
    rp.compare_values(0.0, m.rgba(0, 0)[0] as f64, 0.0);
    rp.compare_values(255.0, m.rgba(0, 0)[3] as f64, 0.0);

    assert!(rp.cleanup(), "gradient regression test failed");
}
