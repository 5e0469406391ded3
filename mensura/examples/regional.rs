//! Regional-system example: gate arithmetic to one measurement system.

use mensura::{Hours, Kilometers, Pounds, Stones};

fn main() {
    // Both operands are metric, so the metric gate compiles.
    let speed = Kilometers::new(120.0).div_metric(Hours::new(2.0));
    println!("{}", speed); // 60 (km/h)

    // Stone is UK imperial only; Pound is shared by both imperial systems.
    let total = Stones::new(2.0).times_uk_imperial(Pounds::new(3.0));
    assert!((total.value() - 6.0).abs() < 1e-12);

    // Mixing systems does not compile:
    // let _ = Kilometers::new(1.0).times_metric(Pounds::new(1.0));
}
