//! Cancellation rules whose receiver is a plain catalog measurement.

use crate::measurement::Measurement;
use crate::unit::{DefinedUnit, Divided, Extended, Multiplied, Reciprocal, UndefinedUnit};

impl<Q: DefinedUnit> Measurement<Q> {
    /// Divides by a quotient, flipping it into this measurement: `Q / (U/V) → (Q·V)/U`.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::mass::Grams;
    /// use mensura_core::time::Seconds;
    ///
    /// let flow = Grams::new(4.0) / Seconds::new(1.0);
    /// let ms_per_g = Meters::new(8.0).div_quotient(flow);
    /// assert_eq!(ms_per_g.value(), 2.0);
    /// ```
    #[inline]
    pub fn div_quotient<U, V>(
        self,
        rhs: Measurement<Divided<U, V>>,
    ) -> Measurement<Divided<Multiplied<Extended<Q>, V>, U>>
    where
        U: UndefinedUnit,
        V: UndefinedUnit,
    {
        Measurement::new(self.value() / rhs.value())
    }

    /// Multiplies by a reciprocal whose right factor matches this unit:
    /// `Q · 1/(A·Q) → 1/A`.
    #[inline]
    pub fn times_matching_reciprocal_right<A: UndefinedUnit>(
        self,
        rhs: Measurement<Reciprocal<Multiplied<A, Extended<Q>>>>,
    ) -> Measurement<Reciprocal<A>> {
        Measurement::new(self.value() * rhs.value())
    }

    /// Multiplies by a reciprocal whose left factor matches this unit:
    /// `Q · 1/(Q·B) → 1/B`.
    #[inline]
    pub fn times_matching_reciprocal_left<B: UndefinedUnit>(
        self,
        rhs: Measurement<Reciprocal<Multiplied<Extended<Q>, B>>>,
    ) -> Measurement<Reciprocal<B>> {
        Measurement::new(self.value() * rhs.value())
    }
}

#[cfg(test)]
mod tests {
    use crate::length::Meters;
    use crate::mass::Grams;
    use crate::time::Seconds;
    use approx::assert_relative_eq;

    #[test]
    fn dividing_by_quotient_flips_it() {
        let flow = Grams::new(4.0) / Seconds::new(2.0);
        let ms_per_g = Meters::new(8.0).div_quotient(flow);
        assert_relative_eq!(ms_per_g.value(), 4.0);
    }

    #[test]
    fn matching_right_factor_cancels() {
        let inv = 1.0 / (Grams::new(2.0) * Meters::new(4.0));
        let per_gram = Meters::new(8.0).times_matching_reciprocal_right(inv);
        assert_relative_eq!(per_gram.value(), 1.0);
    }

    #[test]
    fn matching_left_factor_cancels() {
        let inv = 1.0 / (Meters::new(4.0) * Grams::new(2.0));
        let per_gram = Meters::new(8.0).times_matching_reciprocal_left(inv);
        assert_relative_eq!(per_gram.value(), 1.0);
    }
}
