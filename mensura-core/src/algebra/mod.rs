//! Cancellation rules for composite measurements.
//!
//! The `*` and `/` operators always build a bigger composite shape; the methods in this module are
//! the algebraic shortcuts that cancel shared factors instead. Each rule is a named inherent
//! method on the shape it applies to (operator impls for these would overlap under Rust's
//! coherence rules), grouped by receiver shape: products (`div_left_factor`, …), quotients
//! (`times_denominator`, …), reciprocals, and plain catalog receivers (`div_quotient`, …).
//!
//! All rules operate on raw magnitudes: the operand is taken at face value, without converting it
//! to the cancelled component's scale first. Callers mixing scales (`(m·g)/km`) should
//! [`to`](crate::Measurement::to)-convert the operand beforehand. Division by a zero magnitude
//! follows IEEE-754 and yields `±inf` or `NaN`.

mod defined;
mod divided;
mod multiplied;
mod reciprocal;
