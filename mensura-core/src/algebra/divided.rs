//! Cancellation rules whose receiver is a quotient measurement.

use crate::measurement::Measurement;
use crate::unit::{Divided, Multiplied, Reciprocal, UndefinedUnit, Unit};

impl<A: UndefinedUnit, B: UndefinedUnit> Measurement<Divided<A, B>> {
    /// Divides by a quotient sharing this one's numerator: `(A/B) / (A/C) → C/B`.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::mass::Grams;
    /// use mensura_core::time::Seconds;
    ///
    /// let speed = Meters::new(12.0) / Seconds::new(1.0);
    /// let per_gram = Meters::new(4.0) / Grams::new(1.0);
    /// let grams_per_second = speed.div_sharing_numerator(per_gram);
    /// assert_eq!(grams_per_second.value(), 3.0);
    /// ```
    #[inline]
    pub fn div_sharing_numerator<C: UndefinedUnit>(
        self,
        rhs: Measurement<Divided<A, C>>,
    ) -> Measurement<Divided<C, B>> {
        Measurement::new(self.value() / rhs.value())
    }

    /// Divides by a quotient sharing this one's denominator: `(A/B) / (C/B) → A/C`.
    #[inline]
    pub fn div_sharing_denominator<C: UndefinedUnit>(
        self,
        rhs: Measurement<Divided<C, B>>,
    ) -> Measurement<Divided<A, C>> {
        Measurement::new(self.value() / rhs.value())
    }

    /// Divides by a reciprocal, folding its unit into the numerator:
    /// `(A/B) / (1/C) → (A·C)/B`.
    #[inline]
    pub fn div_reciprocal<C: UndefinedUnit>(
        self,
        rhs: Measurement<Reciprocal<C>>,
    ) -> Measurement<Divided<Multiplied<A, C>, B>> {
        Measurement::new(self.value() / rhs.value())
    }

    /// Multiplies by the denominator unit, cancelling it: `(A/B) · B → A`.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::time::Seconds;
    ///
    /// let speed = Meters::new(3.0) / Seconds::new(1.0);
    /// let distance = speed.times_denominator(Seconds::new(10.0));
    /// assert_eq!(distance.value(), 30.0);
    /// ```
    #[inline]
    pub fn times_denominator<P>(self, rhs: Measurement<P>) -> Measurement<A>
    where
        P: Unit<Wrapped = B>,
    {
        Measurement::new(self.value() * rhs.value())
    }
}

impl<A: UndefinedUnit, B: UndefinedUnit, C: UndefinedUnit> Measurement<Divided<Multiplied<A, B>, C>> {
    /// Divides out the left factor of the numerator: `((A·B)/C) / A → B/C`.
    #[inline]
    pub fn div_numerator_left<P>(self, rhs: Measurement<P>) -> Measurement<Divided<B, C>>
    where
        P: Unit<Wrapped = A>,
    {
        Measurement::new(self.value() / rhs.value())
    }

    /// Divides out the right factor of the numerator: `((A·B)/C) / B → A/C`.
    #[inline]
    pub fn div_numerator_right<P>(self, rhs: Measurement<P>) -> Measurement<Divided<A, C>>
    where
        P: Unit<Wrapped = B>,
    {
        Measurement::new(self.value() / rhs.value())
    }
}

impl<P: Unit> Measurement<P> {
    /// Multiplies by a quotient whose denominator this measurement cancels: `B · (A/B) → A`.
    ///
    /// Commutation mirror of [`times_denominator`](Measurement::times_denominator).
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::time::Seconds;
    ///
    /// let speed = Meters::new(3.0) / Seconds::new(1.0);
    /// let distance = Seconds::new(10.0).times_quotient(speed);
    /// assert_eq!(distance.value(), 30.0);
    /// ```
    #[inline]
    pub fn times_quotient<A, B>(self, rhs: Measurement<Divided<A, B>>) -> Measurement<A>
    where
        A: UndefinedUnit,
        B: UndefinedUnit,
        P: Unit<Wrapped = B>,
    {
        rhs.times_denominator(self)
    }
}
