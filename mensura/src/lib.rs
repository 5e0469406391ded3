//! Strongly typed physical measurements with compile-time unit algebra.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from
//! `mensura-core` plus a small set of predefined units (length, time, mass, volume).
//!
//! The core idea is: a value is always a `Measurement<U>`, where `U` is a zero-sized type
//! describing the unit. Multiplying or dividing two measurements derives the result's unit type
//! mechanically, so `metres * grams` is a first-class value of unit `(m·g)` even though no such
//! catalog unit exists. This keeps units at compile time with no runtime overhead beyond an
//! `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible quantities (you can't add metres to seconds).
//! - Derives product, quotient and reciprocal unit types for `*` and `/` without
//!   per-combination declarations.
//! - Cancels shared factors of composite units through named rules (`div_left_factor`,
//!   `times_denominator`, …) and the [`Simplify`] trait.
//! - Restricts arithmetic to a regional measurement system on request (`times_metric`,
//!   `div_uk_imperial`, …), checked at compile time.
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`).
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra or automatic normalization of arbitrary expressions; only
//!   the modeled shapes (`Extended`, `Multiplied`, `Divided`, `Reciprocal`) exist.
//! - Exact arithmetic: measurements are backed by `f64`.
//! - Runtime dimension checking; everything is resolved at compile time.
//!
//! # Quick start
//!
//! Compose an ad-hoc unit and cancel it back down:
//!
//! ```rust
//! use mensura::{Grams, Meters, Simplify};
//!
//! let product = Meters::new(5.0) * Grams::new(2.0);     // 10 (m·g)
//! let grams: Grams = product.div_left_factor(Meters::new(5.0)).simplify();
//! assert!((grams.value() - 2.0).abs() < 1e-12);
//! ```
//!
//! Reciprocals round-trip through multiplication:
//!
//! ```rust
//! use mensura::{Measurement, One, Seconds, Simplify};
//!
//! let rate = 1.0 / Seconds::new(0.25);                  // 4 (1/s)
//! let ratio: Measurement<One> = (rate * Seconds::new(4.0)).simplify();
//! assert!((ratio.value() - 16.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Different unit types never add:
//!
//! ```compile_fail
//! use mensura::{Kilometers, Seconds};
//!
//! let d = Kilometers::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add different unit types
//! ```
//!
//! System-gated arithmetic rejects units outside the system:
//!
//! ```compile_fail
//! use mensura::{Meters, UKPints};
//!
//! // UKPint is not a metric unit, so the metric-gated product does not compile.
//! let _ = Meters::new(2.0).times_metric(UKPints::new(1.0));
//! ```
//!
//! # Modules
//!
//! Units are grouped by quantity under modules (also re-exported at the crate root for
//! convenience):
//!
//! - `mensura::length` (metres, kilometres, inches, miles, …)
//! - `mensura::time` (seconds, minutes, hours, …)
//! - `mensura::mass` (grams, pounds, stones, short tons, …)
//! - `mensura::volume` (litres, UK and US gallons and pints)
//! - `mensura::speed` (`Length / Time` aliases)
//! - `mensura::dimensionless` (helpers around [`One`])
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `mensura-core`.
//! - `serde`: enables `serde` support for `Measurement<U>`; serialization is the raw `f64` value
//!   only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! mensura = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core
//! operations. Conversions and arithmetic are pure `f64` computations; they do not panic on
//! their own, but they follow IEEE-754 behavior (dividing by a zero magnitude yields `±inf` or
//! `NaN`, which propagate according to the underlying operation).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until
//! `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to define catalog unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Extended`, so it is intended for use
/// inside `mensura-core` (or crates exposing the same crate-root API). Most users should not
/// need this.
pub use mensura_derive::Unit;

pub use mensura_core::units::dimensionless;
pub use mensura_core::units::length;
pub use mensura_core::units::mass;
pub use mensura_core::units::speed;
pub use mensura_core::units::time;
pub use mensura_core::units::volume;

pub use mensura_core::units::dimensionless::*;
pub use mensura_core::units::length::*;
pub use mensura_core::units::mass::*;
pub use mensura_core::units::speed::*;
pub use mensura_core::units::time::*;
pub use mensura_core::units::volume::*;
