//! Cancellation example: recover catalog units from composite shapes.

use mensura::{Grams, Measurement, Meters, One, Seconds, Simplify};

fn main() {
    // (m·g) / m -> g
    let product = Meters::new(5.0) * Grams::new(2.0);
    let grams: Grams = product.div_left_factor(Meters::new(5.0)).simplify();
    assert!((grams.value() - 2.0).abs() < 1e-12);

    // (1/s) · s -> dimensionless
    let rate = 1.0 / Seconds::new(0.25);
    let ratio: Measurement<One> = (rate * Seconds::new(4.0)).simplify();
    assert!((ratio.value() - 16.0).abs() < 1e-12);

    // (m/s) · s -> m
    let speed = Meters::new(100.0) / Seconds::new(20.0);
    let distance: Meters = speed.times_denominator(Seconds::new(6.0)).simplify();
    assert!((distance.value() - 30.0).abs() < 1e-12);
}
