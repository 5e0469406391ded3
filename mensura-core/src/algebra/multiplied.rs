//! Cancellation rules whose receiver is a product measurement.

use crate::measurement::Measurement;
use crate::unit::{Divided, Multiplied, One, Reciprocal, UndefinedUnit, Unit};

impl<A: UndefinedUnit, B: UndefinedUnit> Measurement<Multiplied<A, B>> {
    /// Divides out the left factor: `(A·B) / A → B`.
    ///
    /// The divisor may be a catalog unit or an already-wrapped one; it only has to wrap to the
    /// left factor.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::mass::Grams;
    ///
    /// let product = Meters::new(6.0) * Grams::new(2.0);
    /// let grams = product.div_left_factor(Meters::new(3.0));
    /// assert_eq!(grams.value(), 4.0);
    /// ```
    #[inline]
    pub fn div_left_factor<P>(self, rhs: Measurement<P>) -> Measurement<B>
    where
        P: Unit<Wrapped = A>,
    {
        Measurement::new(self.value() / rhs.value())
    }

    /// Divides out the right factor: `(A·B) / B → A`.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::mass::Grams;
    ///
    /// let product = Meters::new(10.0) * Grams::new(1.0);
    /// let metres = product.div_right_factor(Grams::new(5.0));
    /// assert_eq!(metres.value(), 2.0);
    /// ```
    #[inline]
    pub fn div_right_factor<P>(self, rhs: Measurement<P>) -> Measurement<A>
    where
        P: Unit<Wrapped = B>,
    {
        Measurement::new(self.value() / rhs.value())
    }

    /// Multiplies by a reciprocal sharing this product's left factor:
    /// `(A·B) · 1/(A·C) → B/C`.
    #[inline]
    pub fn times_reciprocal_sharing_left<C: UndefinedUnit>(
        self,
        rhs: Measurement<Reciprocal<Multiplied<A, C>>>,
    ) -> Measurement<Divided<B, C>> {
        Measurement::new(self.value() * rhs.value())
    }

    /// Multiplies by a reciprocal sharing this product's right factor:
    /// `(A·B) · 1/(B·C) → A/C`.
    #[inline]
    pub fn times_reciprocal_sharing_right<C: UndefinedUnit>(
        self,
        rhs: Measurement<Reciprocal<Multiplied<B, C>>>,
    ) -> Measurement<Divided<A, C>> {
        Measurement::new(self.value() * rhs.value())
    }

    /// Multiplies by the reciprocal of the swapped product, cancelling everything:
    /// `(A·B) · 1/(B·A) → One`.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::time::Seconds;
    ///
    /// let ab = Meters::new(6.0) * Seconds::new(2.0);
    /// let inv_ba = 1.0 / (Seconds::new(1.0) * Meters::new(4.0));
    /// let ratio = ab.times_swapped_reciprocal(inv_ba);
    /// assert_eq!(ratio.value(), 3.0);
    /// ```
    #[inline]
    pub fn times_swapped_reciprocal(
        self,
        rhs: Measurement<Reciprocal<Multiplied<B, A>>>,
    ) -> Measurement<One> {
        Measurement::new(self.value() * rhs.value())
    }
}

#[cfg(test)]
mod tests {
    use crate::length::{Meter, Meters};
    use crate::mass::Grams;
    use crate::time::Seconds;
    use crate::unit::Extended;
    use crate::{Measurement, Simplify};
    use approx::assert_relative_eq;

    #[test]
    fn left_factor_cancels() {
        let product = Meters::new(12.0) * Grams::new(2.0);
        let grams = product.div_left_factor(Meters::new(4.0));
        assert_relative_eq!(grams.value(), 6.0);
    }

    #[test]
    fn right_factor_cancels() {
        let product = Meters::new(10.0) * Grams::new(3.0);
        let metres = product.div_right_factor(Grams::new(5.0));
        assert_relative_eq!(metres.value(), 6.0);
        let back: Meters = metres.simplify();
        assert_relative_eq!(back.value(), 6.0);
    }

    #[test]
    fn wrapped_divisor_accepted() {
        // A divisor that is already Extended-wrapped cancels the same factor.
        let product = Meters::new(9.0) * Grams::new(1.0);
        let wrapped: Measurement<Extended<Meter>> = Measurement::new(3.0);
        let grams = product.div_left_factor(wrapped);
        assert_relative_eq!(grams.value(), 3.0);
    }

    #[test]
    fn reciprocal_sharing_left_leaves_quotient() {
        let ab = Meters::new(8.0) * Grams::new(1.0);
        let inv_ac = 1.0 / (Meters::new(2.0) * Seconds::new(1.0));
        let per_second = ab.times_reciprocal_sharing_left(inv_ac);
        assert_relative_eq!(per_second.value(), 4.0);
    }

    #[test]
    fn reciprocal_sharing_right_leaves_quotient() {
        let ab = Meters::new(3.0) * Grams::new(4.0);
        let inv_bc = 1.0 / (Grams::new(2.0) * Seconds::new(1.0));
        let per_second = ab.times_reciprocal_sharing_right(inv_bc);
        assert_relative_eq!(per_second.value(), 6.0);
    }

    #[test]
    fn swapped_reciprocal_cancels_fully() {
        let ab = Meters::new(5.0) * Seconds::new(4.0);
        let inv_ba = 1.0 / (Seconds::new(2.0) * Meters::new(5.0));
        let ratio = ab.times_swapped_reciprocal(inv_ba);
        assert_relative_eq!(ratio.value(), 2.0);
    }
}
