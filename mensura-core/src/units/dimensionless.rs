//! Dimensionless helpers.
//!
//! This module contains small adapters for working with dimensionless values.
//!
//! The provided conversion from a length measurement to a [`One`] measurement is *lossy*: it
//! drops the unit type without performing any normalization. The numeric value is preserved
//! as-is.
//!
//! ```rust
//! use mensura_core::length::Kilometers;
//! use mensura_core::{Measurement, One};
//!
//! let km = Kilometers::new(3.0);
//! let u: Measurement<One> = km.into();
//! assert_eq!(u.value(), 3.0);
//! ```

use crate::units::length::LengthUnit;
use crate::{Measurement, One};

impl<U: LengthUnit> From<Measurement<U>> for Measurement<One> {
    fn from(length: Measurement<U>) -> Self {
        Self::new(length.value())
    }
}

impl Measurement<One> {
    /// Sine, treating the value as radians.
    #[inline]
    pub fn sin(&self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.value().sin()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sin(self.value())
        }
    }

    /// Cosine, treating the value as radians.
    #[inline]
    pub fn cos(&self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.value().cos()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::cos(self.value())
        }
    }

    /// Tangent, treating the value as radians.
    #[inline]
    pub fn tan(&self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.value().tan()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::tan(self.value())
        }
    }

    /// Arc sine of the value, in radians.
    #[inline]
    pub fn asin(&self) -> f64 {
        #[cfg(feature = "std")]
        {
            self.value().asin()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::asin(self.value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::Meters;
    use crate::Unit;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn one_new_and_value() {
        let u: Measurement<One> = Measurement::new(42.0);
        assert_eq!(u.value(), 42.0);
    }

    #[test]
    fn one_from_f64() {
        let u: Measurement<One> = 1.23456.into();
        assert_abs_diff_eq!(u.value(), 1.23456, epsilon = 1e-12);
    }

    #[test]
    fn display_has_no_suffix() {
        let u: Measurement<One> = Measurement::new(123.456);
        assert_eq!(format!("{}", u), "123.456");
    }

    #[test]
    fn from_length() {
        let m = Meters::new(42.0);
        let u: Measurement<One> = m.into();
        assert_eq!(u.value(), 42.0);
    }

    #[test]
    fn one_ratio_and_symbol() {
        assert_eq!(One::RATIO, 1.0);
        assert_eq!(One::SYMBOL, "");
    }

    #[test]
    fn asin_of_half() {
        let u: Measurement<One> = Measurement::new(0.5);
        assert_abs_diff_eq!(u.asin(), core::f64::consts::FRAC_PI_6, epsilon = 1e-12);
    }

    #[test]
    fn sin_cos_identity() {
        let u: Measurement<One> = Measurement::new(0.75);
        assert_abs_diff_eq!(u.sin().powi(2) + u.cos().powi(2), 1.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_from_length_preserves_value(v in -1e6..1e6f64) {
            let m = Meters::new(v);
            let u: Measurement<One> = m.into();
            prop_assert!((u.value() - v).abs() < 1e-12);
        }
    }
}
