//! Cancellation rules whose receiver is a reciprocal measurement.

use crate::measurement::Measurement;
use crate::unit::{Divided, Multiplied, Reciprocal, UndefinedUnit};

impl<A: UndefinedUnit> Measurement<Reciprocal<A>> {
    /// Multiplies two reciprocals: `1/A · 1/B → 1/(A·B)`.
    #[inline]
    pub fn times_reciprocal<B: UndefinedUnit>(
        self,
        rhs: Measurement<Reciprocal<B>>,
    ) -> Measurement<Reciprocal<Multiplied<A, B>>> {
        Measurement::new(self.value() * rhs.value())
    }

    /// Divides two reciprocals, flipping the divisor: `(1/A) / (1/B) → B/A`.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::time::Seconds;
    ///
    /// let per_metre = 1.0 / Meters::new(2.0);
    /// let per_second = 1.0 / Seconds::new(4.0);
    /// let speed = per_metre.div_reciprocal(per_second);
    /// assert_eq!(speed.value(), 2.0);
    /// ```
    #[inline]
    pub fn div_reciprocal<B: UndefinedUnit>(
        self,
        rhs: Measurement<Reciprocal<B>>,
    ) -> Measurement<Divided<B, A>> {
        Measurement::new(self.value() / rhs.value())
    }

    /// Divides by the reciprocal of a product sharing this unit: `(1/A) / (1/(A·B)) → B`.
    #[inline]
    pub fn div_reciprocal_of_product<B: UndefinedUnit>(
        self,
        rhs: Measurement<Reciprocal<Multiplied<A, B>>>,
    ) -> Measurement<B> {
        Measurement::new(self.value() / rhs.value())
    }

    /// Divides by a quotient whose denominator shares this unit:
    /// `(1/A) / (B/(A·C)) → C/B`.
    #[inline]
    pub fn div_quotient_sharing_factor<B: UndefinedUnit, C: UndefinedUnit>(
        self,
        rhs: Measurement<Divided<B, Multiplied<A, C>>>,
    ) -> Measurement<Divided<C, B>> {
        Measurement::new(self.value() / rhs.value())
    }
}

impl<A: UndefinedUnit, C: UndefinedUnit> Measurement<Reciprocal<Multiplied<A, C>>> {
    /// Multiplies by a product sharing this reciprocal's left factor:
    /// `1/(A·C) · (A·B) → B/C`.
    ///
    /// Commutation mirror of
    /// [`times_reciprocal_sharing_left`](Measurement::times_reciprocal_sharing_left).
    #[inline]
    pub fn times_product_sharing_left<B: UndefinedUnit>(
        self,
        rhs: Measurement<Multiplied<A, B>>,
    ) -> Measurement<Divided<B, C>> {
        rhs.times_reciprocal_sharing_left(self)
    }
}
