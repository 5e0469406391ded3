//! Conversion-ladder macro for catalog units.

/// Implements bidirectional [`From`] conversions between every pair of the listed units.
///
/// Each catalog module invokes this once with all units of its quantity, so `.into()` works
/// between any two of them without naming [`to`](crate::Measurement::to) explicitly. The listed
/// units must share a [`Quant`](crate::Unit::Quant). Expansion pairs the head unit with each tail
/// unit, then recurses on the tail, yielding one impl pair per unit combination.
///
/// ```rust
/// use mensura_core::time::{Hours, Minutes};
///
/// let min: Minutes = Hours::new(1.5).into();
/// assert!((min.value() - 90.0).abs() < 1e-9);
/// ```
#[macro_export]
macro_rules! impl_unit_conversions {
    (@pair $a:ty, $b:ty) => {
        impl ::core::convert::From<$crate::Measurement<$a>> for $crate::Measurement<$b> {
            fn from(value: $crate::Measurement<$a>) -> Self {
                value.to::<$b>()
            }
        }

        impl ::core::convert::From<$crate::Measurement<$b>> for $crate::Measurement<$a> {
            fn from(value: $crate::Measurement<$b>) -> Self {
                value.to::<$a>()
            }
        }
    };

    // A single remaining unit has nothing left to pair with.
    () => {};
    ($last:ty $(,)?) => {};

    ($head:ty, $($tail:ty),+ $(,)?) => {
        $($crate::impl_unit_conversions!(@pair $head, $tail);)+
        $crate::impl_unit_conversions!($($tail),+);
    };
}

#[cfg(test)]
mod tests {
    use crate::{Measurement, Quantity, UndefinedUnit, Unit};

    #[derive(Debug)]
    enum Paces {}
    impl Quantity for Paces {}

    macro_rules! pace_unit {
        ($name:ident, $symbol:literal, $ratio:expr) => {
            #[derive(Clone, Copy, Debug, Default, PartialEq)]
            struct $name;
            impl Unit for $name {
                const RATIO: f64 = $ratio;
                type Quant = Paces;
                const SYMBOL: &'static str = $symbol;
                type Wrapped = $name;
            }
            impl UndefinedUnit for $name {}
        };
    }

    pace_unit!(Single, "p1", 1.0);
    pace_unit!(Double, "p2", 2.0);
    pace_unit!(Quad, "p4", 4.0);

    crate::impl_unit_conversions!(Single, Double, Quad);

    #[test]
    fn head_converts_to_each_tail_unit() {
        let d: Measurement<Double> = Measurement::<Single>::new(8.0).into();
        assert_eq!(d.value(), 4.0);
        let q: Measurement<Quad> = Measurement::<Single>::new(8.0).into();
        assert_eq!(q.value(), 2.0);
    }

    #[test]
    fn tail_pairs_convert_both_directions() {
        // The recursion must also pair units that are both in the tail.
        let q: Measurement<Quad> = Measurement::<Double>::new(6.0).into();
        assert_eq!(q.value(), 3.0);
        let d: Measurement<Double> = Measurement::<Quad>::new(3.0).into();
        assert_eq!(d.value(), 6.0);
    }
}
