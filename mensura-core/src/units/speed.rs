//! Speed unit aliases (`Length / Time`).
//!
//! This module defines speeds as *pure type aliases* over [`Divided`] using length and time units
//! already defined elsewhere in the crate. No standalone speed units are introduced: every speed
//! is represented as `Length / Time` at the type level, so the quotient a division produces and a
//! `Speed` annotation are the same type.
//!
//! ## Examples
//!
//! ```rust
//! use mensura_core::length::{Kilometer, Kilometers};
//! use mensura_core::time::{Second, Seconds};
//! use mensura_core::speed::Speed;
//!
//! let d = Kilometers::new(42.0);
//! let t = Seconds::new(2.0);
//! let v: Speed<Kilometer, Second> = d / t;
//! assert!((v.value() - 21.0).abs() < 1e-12);
//! ```

use crate::units::length::{Length, LengthUnit};
use crate::units::time::{Time, TimeUnit};
use crate::{DefinedUnit, Divided, Extended, Measurement, QuotientQuantity, Unit};

/// Quantity alias for speeds (`Length / Time`).
pub type SpeedQuantity = QuotientQuantity<Length, Time>;

/// Marker trait for any unit whose quantity is [`SpeedQuantity`].
pub trait SpeedUnit: Unit<Quant = SpeedQuantity> {}
impl<T: Unit<Quant = SpeedQuantity>> SpeedUnit for T {}

/// A speed measurement parameterized by length and time units.
///
/// Because shape ratios compose, speeds convert between parameterizations with the ordinary
/// [`to`](Measurement::to):
///
/// ```rust
/// use mensura_core::length::{Kilometer, Meter};
/// use mensura_core::time::{Hour, Second};
/// use mensura_core::speed::{Speed, SpeedOf};
///
/// let v: Speed<Meter, Second> = Speed::new(10.0);
/// let kmh: Speed<Kilometer, Hour> = v.to::<SpeedOf<Kilometer, Hour>>();
/// assert!((kmh.value() - 36.0).abs() < 1e-9);
/// ```
pub type Speed<L, T> = Measurement<SpeedOf<L, T>>;

/// The unit type of a [`Speed`] (`Length / Time` in undefined-algebra shape).
pub type SpeedOf<L, T> = Divided<Extended<L>, Extended<T>>;

/// Metres per second.
pub type MetersPerSecond = Speed<crate::length::Meter, crate::time::Second>;
/// Kilometres per hour.
pub type KilometersPerHour = Speed<crate::length::Kilometer, crate::time::Hour>;
/// Miles per hour.
pub type MilesPerHour = Speed<crate::length::Mile, crate::time::Hour>;

/// Distance covered at this speed over the given duration.
///
/// A thin, readable wrapper over [`times_denominator`](Measurement::times_denominator) for the
/// common kinematics case; the duration is converted to the speed's own time unit first.
pub fn distance_after<L, T, P>(speed: Speed<L, T>, duration: Measurement<P>) -> Measurement<L>
where
    L: DefinedUnit + LengthUnit,
    T: DefinedUnit + TimeUnit,
    P: Unit<Quant = Time>,
{
    use crate::Simplify;
    speed.times_denominator(duration.to::<T>()).simplify()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometer, Kilometers, Meter, Meters, Mile, Miles};
    use crate::units::time::{Hour, Hours, Minutes, Second, Seconds};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn division_produces_the_alias_type() {
        let v: Speed<Meter, Second> = Meters::new(10.0) / Seconds::new(2.0);
        assert_abs_diff_eq!(v.value(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn m_per_s_to_km_per_h() {
        let v: Speed<Meter, Second> = Speed::new(1.0);
        let kmh = v.to::<SpeedOf<Kilometer, Hour>>();
        assert_relative_eq!(kmh.value(), 3.6, max_relative = 1e-12);
    }

    #[test]
    fn mph_to_km_per_h() {
        let v: MilesPerHour = Miles::new(60.0) / Hours::new(1.0);
        let kmh = v.to::<SpeedOf<Kilometer, Hour>>();
        assert_relative_eq!(kmh.value(), 96.560_64, max_relative = 1e-12);
    }

    #[test]
    fn distance_after_converts_the_duration() {
        let v: KilometersPerHour = Kilometers::new(90.0) / Hours::new(1.0);
        let d: Kilometers = distance_after(v, Minutes::new(40.0));
        assert_relative_eq!(d.value(), 60.0, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_speed_times_duration_inverts_division(d in 1e-3..1e6f64, t in 1e-3..1e6f64) {
            let v = Meters::new(d) / Seconds::new(t);
            let back = v.times_denominator(Seconds::new(t));
            prop_assert!((back.value() - d).abs() < 1e-9 * d.abs().max(1.0));
        }
    }
}
