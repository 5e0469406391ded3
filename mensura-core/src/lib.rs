//! Core type system for strongly typed physical measurements with composite units.
//!
//! `mensura-core` provides a zero-cost unit-algebra model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`].
//! - A value tagged with a unit is a [`Measurement<U>`], backed by an `f64`.
//! - Conversion is an explicit, type-checked scaling via [`Measurement::to`].
//! - Multiplying or dividing measurements derives composite ("undefined") unit types mechanically:
//!   [`Multiplied`], [`Divided`] and [`Reciprocal`], with catalog units lifted through
//!   [`Extended`].
//! - Composite results cancel back down through the named rules in [`algebra`] and the
//!   [`Simplify`] trait.
//! - Units declare regional-system membership ([`UsedInMetric`], [`UsedInUKImperial`],
//!   [`UsedInUSCustomary`]), and the gated operators in [`regional`] enforce it at compile time.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need direct access to
//! these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of quantities (length vs time vs mass, …), including products,
//!   quotients and reciprocals of them.
//! - Zero runtime overhead for unit tags (phantom types only).
//! - Mechanical derivation of result unit types for `*` and `/`, so mixed defined/composite
//!   operands need no per-combination declarations.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Measurement` is `f64`).
//! - General-purpose symbolic simplification of arbitrary unit expressions.
//! - Automatic tracking of exponent dimensions (`m^2`, `s^-1`, …); only the expression forms
//!   represented by the provided shapes are modeled.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use mensura_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose and cancel composite units:
//!
//! ```rust
//! use mensura_core::length::Meters;
//! use mensura_core::mass::Grams;
//! use mensura_core::Simplify;
//!
//! let product = Meters::new(5.0) * Grams::new(2.0);    // 10 (m·g)
//! let grams: Grams = product.div_left_factor(Meters::new(5.0)).simplify();
//! assert!((grams.value() - 2.0).abs() < 1e-12);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `mensura-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! mensura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via
//! `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Measurement<U>`; serialization is the raw `f64` value
//!   only.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core
//! operations. Conversions and arithmetic are pure `f64` computations; they do not panic on
//! their own, but they follow IEEE-754 behavior (dividing by a zero magnitude yields `±inf` or
//! `NaN`, which propagate according to the underlying operation). Unit mismatches are compile
//! errors by construction.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod algebra;
mod macros;
mod measurement;
mod quantity;
pub mod regional;
mod system;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use measurement::{by_dividing, by_multiplying, Measurement};
pub use quantity::{
    Dimensionless, InverseQuantity, ProductQuantity, Quantity, QuotientQuantity,
};
pub use system::{
    UsedInImperial, UsedInMetric, UsedInMetricAndImperial, UsedInMetricAndUKImperial,
    UsedInMetricAndUSCustomary, UsedInUKImperial, UsedInUSCustomary,
};
pub use unit::{
    divided, multiplied, reciprocal, DefinedUnit, Divided, Extended, Multiplied, One, Reciprocal,
    Simplify, UndefinedUnit, Unit,
};

#[cfg(feature = "serde")]
pub use measurement::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by quantity)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by quantity).
///
/// These are defined in `mensura-core` so they can implement formatting and helper traits
/// without running into Rust's orphan rules.
pub mod units;

pub use units::dimensionless;
pub use units::length;
pub use units::mass;
pub use units::speed;
pub use units::time;
pub use units::volume;

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_derive::Unit;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test quantity and units for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────
    #[derive(Debug)]
    pub enum TestQuant {}
    impl Quantity for TestQuant {}

    #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
    #[unit(symbol = "tu", quantity = TestQuant, ratio = 1.0, systems(metric))]
    pub struct TestUnit;

    #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
    #[unit(symbol = "dtu", quantity = TestQuant, ratio = 2.0)]
    pub struct DoubleTestUnit;

    // A leaf unit opting straight into undefined algebra, without the catalog wrapper.
    #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
    pub struct RawTestUnit;
    impl Unit for RawTestUnit {
        const RATIO: f64 = 1.0;
        type Quant = TestQuant;
        const SYMBOL: &'static str = "rtu";
        type Wrapped = RawTestUnit;
    }
    impl UndefinedUnit for RawTestUnit {}

    type Tu = Measurement<TestUnit>;
    type Dtu = Measurement<DoubleTestUnit>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Measurement core behavior
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn measurement_new_and_value() {
        let q = Tu::new(42.0);
        assert_eq!(q.value(), 42.0);
    }

    #[test]
    fn measurement_nan_constant() {
        assert!(Tu::NAN.value().is_nan());
    }

    #[test]
    fn measurement_abs() {
        assert_eq!(Tu::new(-5.0).abs().value(), 5.0);
        assert_eq!(Tu::new(5.0).abs().value(), 5.0);
        assert_eq!(Tu::new(0.0).abs().value(), 0.0);
    }

    #[test]
    fn measurement_from_f64() {
        let q: Tu = 123.456.into();
        assert_eq!(q.value(), 123.456);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion via `to`
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn conversion_to_same_unit() {
        let q = Tu::new(10.0);
        assert_eq!(q.to::<TestUnit>().value(), 10.0);
    }

    #[test]
    fn conversion_to_different_unit() {
        // 1 DoubleTestUnit = 2 TestUnit (in canonical terms), so 10 tu -> 5 dtu.
        let q = Tu::new(10.0);
        let converted = q.to::<DoubleTestUnit>();
        assert!((converted.value() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn conversion_through_composite_shapes() {
        // Shape ratios compose, so structurally equal composites convert too.
        let v: Measurement<Divided<Extended<TestUnit>, Extended<TestUnit>>> = Measurement::new(8.0);
        let w = v.to::<Divided<Extended<DoubleTestUnit>, Extended<TestUnit>>>();
        assert!((w.value() - 4.0).abs() < 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Const helper methods: add/sub/mul/div/min
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn const_add_sub() {
        let a = Tu::new(3.0);
        let b = Tu::new(7.0);
        assert_eq!(a.add(b).value(), 10.0);
        assert_eq!(b.sub(a).value(), 4.0);
    }

    #[test]
    fn const_mul_div() {
        let a = Tu::new(4.0);
        let b = Tu::new(5.0);
        assert_eq!(Measurement::mul(&a, b).value(), 20.0);
        assert_eq!(Measurement::div(&b, a).value(), 1.25);
    }

    #[test]
    fn const_min() {
        let a = Tu::new(5.0);
        let b = Tu::new(3.0);
        assert_eq!(a.min(b).value(), 3.0);
        assert_eq!(b.min(a).value(), 3.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operator traits
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn operator_add_sub() {
        let a = Tu::new(3.0);
        let b = Tu::new(7.0);
        assert_eq!((a + b).value(), 10.0);
        assert_eq!((b - a).value(), 4.0);
    }

    #[test]
    fn operator_scalar_mul_div() {
        let q = Tu::new(5.0);
        assert_eq!((q * 3.0).value(), 15.0);
        assert_eq!((3.0 * q).value(), 15.0);
        assert_eq!((q / 5.0).value(), 1.0);
    }

    #[test]
    fn operator_neg_rem() {
        let q = Tu::new(10.0);
        assert_eq!((-q).value(), -10.0);
        assert_eq!((q % 3.0).value(), 1.0);
    }

    #[test]
    fn assignment_operators() {
        let mut q = Tu::new(5.0);
        q += Tu::new(3.0);
        assert_eq!(q.value(), 8.0);
        q -= Tu::new(4.0);
        assert_eq!(q.value(), 4.0);
        q /= Tu::new(2.0);
        assert_eq!(q.value(), 2.0);
    }

    #[test]
    fn partial_eq_f64() {
        let q = Tu::new(5.0);
        assert!(q == 5.0);
        assert!(!(q == 4.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Composition via * and /
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn multiplication_wraps_both_operands() {
        let p: Measurement<Multiplied<Extended<TestUnit>, Extended<DoubleTestUnit>>> =
            Tu::new(5.0) * Dtu::new(2.0);
        assert!((p.value() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn division_wraps_both_operands() {
        let q: Measurement<Divided<Extended<TestUnit>, Extended<DoubleTestUnit>>> =
            Tu::new(100.0) / Dtu::new(20.0);
        assert!((q.value() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn undefined_leaf_skips_the_wrapper() {
        // RawTestUnit is already undefined, so it appears unwrapped in the result shape.
        let q: Measurement<Divided<RawTestUnit, Extended<TestUnit>>> =
            Measurement::<RawTestUnit>::new(9.0) / Tu::new(3.0);
        assert!((q.value() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn scalar_over_measurement_is_reciprocal() {
        let r: Measurement<Reciprocal<Extended<TestUnit>>> = 1.0 / Tu::new(4.0);
        assert!((r.value() - 0.25).abs() < 1e-12);
        let r2 = Tu::new(4.0).reciprocal();
        assert!((r2.value() - r.value()).abs() < 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Combinator-based construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn by_multiplying_with_explicit_unit() {
        let unit = multiplied(
            TestUnit.wrapped(),
            DoubleTestUnit.wrapped(),
        );
        let p = by_multiplying(Tu::new(5.0), Dtu::new(2.0), unit);
        assert!((p.value() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn by_dividing_with_explicit_unit() {
        let unit = divided(TestUnit.wrapped(), DoubleTestUnit.wrapped());
        let q = by_dividing(Tu::new(10.0), Dtu::new(4.0), unit);
        assert!((q.value() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn times_using_matches_operator() {
        let a = Tu::new(5.0);
        let b = Dtu::new(2.0);
        let via_combinator = a.times_using(b, multiplied, Measurement::of);
        let via_operator = a * b;
        assert!((via_combinator.value() - via_operator.value()).abs() < 1e-12);
        // Same unit type as the operator result.
        let _: Measurement<Multiplied<Extended<TestUnit>, Extended<DoubleTestUnit>>> =
            via_combinator;
    }

    #[test]
    fn div_using_matches_operator() {
        let a = Tu::new(5.0);
        let b = Dtu::new(2.0);
        let via_combinator = a.div_using(b, divided, Measurement::of);
        assert!((via_combinator.value() - (a / b).value()).abs() < 1e-12);
    }

    #[test]
    fn reciprocal_combinator_builds_unit() {
        let unit = reciprocal(TestUnit.wrapped());
        let r = by_dividing(Measurement::<One>::new(1.0), Tu::new(4.0), unit);
        assert!((r.value() - 0.25).abs() < 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Simplify trait
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn simplify_same_unit_quotient_to_one() {
        let ratio = Tu::new(6.0) / Tu::new(4.0);
        let one: Measurement<One> = ratio.simplify();
        assert!((one.value() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn simplify_nested_quotient() {
        let q: Measurement<
            Divided<Extended<TestUnit>, Divided<Extended<TestUnit>, Extended<DoubleTestUnit>>>,
        > = Measurement::new(7.5);
        let simplified: Measurement<Extended<DoubleTestUnit>> = q.simplify();
        assert!((simplified.value() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn simplify_double_reciprocal() {
        let r: Measurement<Reciprocal<Reciprocal<Extended<TestUnit>>>> = Measurement::new(3.0);
        let back: Measurement<Extended<TestUnit>> = r.simplify();
        assert!((back.value() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn simplify_unwraps_extended() {
        let wrapped: Measurement<Extended<TestUnit>> = Measurement::new(2.0);
        let q: Tu = wrapped.simplify();
        assert!((q.value() - 2.0).abs() < 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_simple_measurement() {
        let q = Tu::new(42.5);
        assert_eq!(format!("{}", q), "42.5 tu");
    }

    #[test]
    fn display_product() {
        let p = Tu::new(5.0) * Dtu::new(2.0);
        assert_eq!(format!("{}", p), "10 (tu·dtu)");
    }

    #[test]
    fn display_quotient() {
        let q = Tu::new(5.0) / Dtu::new(2.0);
        assert_eq!(format!("{}", q), "2.5 (tu/dtu)");
    }

    #[test]
    fn display_nested_composite() {
        let nested = (Tu::new(6.0) * Dtu::new(2.0)) / Tu::new(3.0);
        assert_eq!(format!("{}", nested), "4 ((tu·dtu)/tu)");
    }

    #[test]
    fn display_reciprocal() {
        let r = 1.0 / Tu::new(4.0);
        assert_eq!(format!("{}", r), "0.25 (1/tu)");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Edge cases
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn edge_case_division_by_zero_magnitude() {
        let q = Tu::new(1.0) / Dtu::new(0.0);
        assert!(q.value().is_infinite());
        let nan = Tu::new(0.0) / Dtu::new(0.0);
        assert!(nan.value().is_nan());
    }

    #[test]
    fn edge_case_infinity() {
        let inf = Tu::new(f64::INFINITY);
        let neg_inf = Tu::new(f64::NEG_INFINITY);
        assert!(inf.value().is_infinite());
        assert_eq!(inf.value().signum(), 1.0);
        assert_eq!(neg_inf.value().signum(), -1.0);
    }

    #[test]
    fn edge_case_large_values() {
        let large = Tu::new(1e100);
        let small = Tu::new(1e-100);
        assert_eq!(large.value(), 1e100);
        assert_eq!(small.value(), 1e-100);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_measurement() {
            let q = Tu::new(42.5);
            let json = serde_json::to_string(&q).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn deserialize_measurement() {
            let q: Tu = serde_json::from_str("42.5").unwrap();
            assert_eq!(q.value(), 42.5);
        }

        #[test]
        fn serialize_composite_is_raw_value() {
            let p = Tu::new(5.0) * Dtu::new(2.0);
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, "10.0");
        }

        #[test]
        fn serde_roundtrip() {
            let original = Tu::new(123.456);
            let json = serde_json::to_string(&original).unwrap();
            let restored: Tu = serde_json::from_str(&json).unwrap();
            assert!((restored.value() - original.value()).abs() < 1e-12);
        }

        #[derive(Serialize, Deserialize, Debug)]
        struct TestStruct {
            #[serde(with = "crate::serde_with_unit")]
            distance: Tu,
        }

        #[test]
        fn serde_with_unit_serialize() {
            let data = TestStruct {
                distance: Tu::new(42.5),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert!(json.contains("\"value\""));
            assert!(json.contains("\"unit\""));
            assert!(json.contains("42.5"));
            assert!(json.contains("\"tu\""));
        }

        #[test]
        fn serde_with_unit_deserialize() {
            let json = r#"{"distance":{"value":42.5,"unit":"tu"}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.distance.value(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_no_unit_field() {
            // Should work without unit field for backwards compatibility
            let json = r#"{"distance":{"value":42.5}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.distance.value(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_wrong_unit() {
            let json = r#"{"distance":{"value":42.5,"unit":"wrong"}}"#;
            let result: Result<TestStruct, _> = serde_json::from_str(json);
            assert!(result.is_err());
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("unit mismatch") || err_msg.contains("expected"));
        }

        #[test]
        fn serde_with_unit_deserialize_missing_value() {
            let json = r#"{"distance":{"unit":"tu"}}"#;
            let result: Result<TestStruct, _> = serde_json::from_str(json);
            assert!(result.is_err());
            let err_msg = result.unwrap_err().to_string();
            assert!(err_msg.contains("missing field") || err_msg.contains("value"));
        }

        #[test]
        fn serde_with_unit_roundtrip() {
            let original = TestStruct {
                distance: Tu::new(123.456),
            };
            let json = serde_json::to_string(&original).unwrap();
            let restored: TestStruct = serde_json::from_str(&json).unwrap();
            assert!((restored.distance.value() - original.distance.value()).abs() < 1e-12);
        }
    }
}
