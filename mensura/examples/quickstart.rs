//! Composite-unit example: build an ad-hoc product unit and print it.

use mensura::{Grams, Meters};

fn main() {
    let product = Meters::new(5.0) * Grams::new(2.0);
    println!("{}", product); // 10 (m·g)
    assert!((product.value() - 10.0).abs() < 1e-12);

    let per_gram = Meters::new(5.0) / Grams::new(2.0);
    println!("{}", per_gram); // 2.5 (m/g)
}
