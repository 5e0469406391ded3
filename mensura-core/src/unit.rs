//! Unit types, the defined/undefined split, and composite unit shapes.

use crate::quantity::{Dimensionless, InverseQuantity, ProductQuantity, Quantity, QuotientQuantity};
use crate::system::{UsedInMetric, UsedInUKImperial, UsedInUSCustomary};
use crate::Measurement;
use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the conversion factor from this unit to the *canonical scaling unit* of the same
///   quantity. Example: if metres are canonical (`Meter::RATIO == 1.0`), then kilometres use
///   `Kilometer::RATIO == 1000.0` because `1 km = 1000 m`. Composite shapes compose their
///   components' ratios, so conversion between structurally equal composites works unchanged.
///
/// * `SYMBOL` is the printable string for leaf units (e.g. `"m"` or `"km"`). Composite shapes leave
///   it empty and render recursively through [`Unit::fmt_symbol`].
///
/// * `Quant` ties the unit to its underlying [`Quantity`] tag.
///
/// * `Wrapped` is the undefined-algebra view of the unit: [`Extended<Self>`] for catalog
///   ([`DefinedUnit`]) units, `Self` for units that are already [`UndefinedUnit`]. The arithmetic
///   operators use it to wrap operands mechanically, so catalog and composite values combine
///   uniformly.
///
/// # Invariants
///
/// - Implementations must be zero-sized marker types (this crate's built-in units are unit structs
///   with no fields); unit *instances* are only ever obtained through `Default`.
/// - `RATIO` should be finite and non-zero.
pub trait Unit: Copy + Default + PartialEq + Debug + 'static {
    /// Unit-to-canonical conversion factor.
    const RATIO: f64;

    /// Physical quantity to which this unit belongs.
    type Quant: Quantity;

    /// Printable symbol for leaf units; empty for composite shapes.
    const SYMBOL: &'static str;

    /// The undefined-algebra form of this unit.
    type Wrapped: UndefinedUnit;

    /// Returns this unit wrapped for undefined-quantity algebra.
    ///
    /// For a [`DefinedUnit`] this is `Extended<Self>`; units that are already composite return
    /// themselves.
    #[inline]
    fn wrapped(self) -> Self::Wrapped {
        Self::Wrapped::default()
    }

    /// Writes the unit symbol, recursing into composite shapes.
    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::SYMBOL)
    }

    /// Writes the display suffix after a magnitude (a space plus the symbol, or nothing for
    /// symbol-less units such as [`One`]).
    fn fmt_suffix(f: &mut Formatter<'_>) -> Result {
        if Self::SYMBOL.is_empty() {
            Ok(())
        } else {
            write!(f, " {}", Self::SYMBOL)
        }
    }
}

/// Marker for catalog ("defined") units: metre, second, gram, …
///
/// Implemented by `#[derive(Unit)]`. Defined units participate in undefined-unit algebra through
/// their [`Extended`] wrapper; the supertrait bound makes that wiring visible to generic code.
pub trait DefinedUnit: Unit<Wrapped = Extended<Self>> {}

/// Marker for units usable in undefined-quantity algebra: the composite shapes plus user-defined
/// leaf units.
///
/// A custom leaf unit opts in by implementing [`Unit`] with `Wrapped = Self` and then this trait:
///
/// ```rust
/// use mensura_core::{Dimensionless, Measurement, Unit, UndefinedUnit};
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct Widget;
/// impl Unit for Widget {
///     const RATIO: f64 = 1.0;
///     type Quant = Dimensionless;
///     const SYMBOL: &'static str = "wd";
///     type Wrapped = Widget;
/// }
/// impl UndefinedUnit for Widget {}
///
/// let rate = Measurement::<Widget>::new(6.0) / mensura_core::time::Seconds::new(2.0);
/// assert_eq!(rate.value(), 3.0);
/// ```
pub trait UndefinedUnit: Unit {}

// ─────────────────────────────────────────────────────────────────────────────
// Composite unit shapes
// ─────────────────────────────────────────────────────────────────────────────

/// A catalog unit wrapped so it can participate in undefined-quantity algebra.
///
/// `Extended<Q>` has the same quantity, ratio and symbol as `Q`; it only changes the unit's
/// *shape* so the composite combinators accept it. [`Simplify`] unwraps it back into the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Extended<Q: DefinedUnit>(PhantomData<Q>);

impl<Q: DefinedUnit> Unit for Extended<Q> {
    const RATIO: f64 = Q::RATIO;
    type Quant = Q::Quant;
    const SYMBOL: &'static str = Q::SYMBOL;
    type Wrapped = Self;
}

impl<Q: DefinedUnit> UndefinedUnit for Extended<Q> {}

/// Unit representing the product of two other units (`L · R`).
///
/// Carries both the quantity information and the scaling ratio of its components. It is generic
/// over any pair of undefined-shape units, which allows implementing arithmetic generically for
/// all pairs without bespoke per-combination declarations.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Multiplied<L: UndefinedUnit, R: UndefinedUnit>(PhantomData<(L, R)>);

impl<L: UndefinedUnit, R: UndefinedUnit> Unit for Multiplied<L, R> {
    const RATIO: f64 = L::RATIO * R::RATIO;
    type Quant = ProductQuantity<L::Quant, R::Quant>;
    const SYMBOL: &'static str = "";
    type Wrapped = Self;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str("(")?;
        L::fmt_symbol(f)?;
        f.write_str("·")?;
        R::fmt_symbol(f)?;
        f.write_str(")")
    }

    fn fmt_suffix(f: &mut Formatter<'_>) -> Result {
        f.write_str(" ")?;
        Self::fmt_symbol(f)
    }
}

impl<L: UndefinedUnit, R: UndefinedUnit> UndefinedUnit for Multiplied<L, R> {}

/// Unit representing the division of two other units (`N / D`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Divided<N: UndefinedUnit, D: UndefinedUnit>(PhantomData<(N, D)>);

impl<N: UndefinedUnit, D: UndefinedUnit> Unit for Divided<N, D> {
    const RATIO: f64 = N::RATIO / D::RATIO;
    type Quant = QuotientQuantity<N::Quant, D::Quant>;
    const SYMBOL: &'static str = "";
    type Wrapped = Self;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str("(")?;
        N::fmt_symbol(f)?;
        f.write_str("/")?;
        D::fmt_symbol(f)?;
        f.write_str(")")
    }

    fn fmt_suffix(f: &mut Formatter<'_>) -> Result {
        f.write_str(" ")?;
        Self::fmt_symbol(f)
    }
}

impl<N: UndefinedUnit, D: UndefinedUnit> UndefinedUnit for Divided<N, D> {}

/// Unit representing the multiplicative inverse of another unit (`1 / U`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Reciprocal<U: UndefinedUnit>(PhantomData<U>);

impl<U: UndefinedUnit> Unit for Reciprocal<U> {
    const RATIO: f64 = 1.0 / U::RATIO;
    type Quant = InverseQuantity<U::Quant>;
    const SYMBOL: &'static str = "";
    type Wrapped = Self;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str("(1/")?;
        U::fmt_symbol(f)?;
        f.write_str(")")
    }

    fn fmt_suffix(f: &mut Formatter<'_>) -> Result {
        f.write_str(" ")?;
        Self::fmt_symbol(f)
    }
}

impl<U: UndefinedUnit> UndefinedUnit for Reciprocal<U> {}

/// The dimensionless catalog unit ("one").
///
/// `One` is the unit of pure ratios: it is what full cancellation produces (e.g.
/// `(A·B) × 1/(B·A)`, or [`Simplify`] on a same-unit quotient). Unlike a bare `f64`, a
/// `Measurement<One>` is still a measurement, so it flows through the same operators.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct One;

impl Unit for One {
    const RATIO: f64 = 1.0;
    type Quant = Dimensionless;
    const SYMBOL: &'static str = "";
    type Wrapped = Extended<One>;
}

impl DefinedUnit for One {}
impl UsedInMetric for One {}
impl UsedInUKImperial for One {}
impl UsedInUSCustomary for One {}

// Regional-system markers propagate structurally: a composite belongs to a
// system iff all of its components do.
macro_rules! propagate_system_marker {
    ($($marker:ident),+ $(,)?) => {
        $(
            impl<Q: DefinedUnit + $marker> $marker for Extended<Q> {}
            impl<L: UndefinedUnit + $marker, R: UndefinedUnit + $marker> $marker for Multiplied<L, R> {}
            impl<N: UndefinedUnit + $marker, D: UndefinedUnit + $marker> $marker for Divided<N, D> {}
            impl<U: UndefinedUnit + $marker> $marker for Reciprocal<U> {}
        )+
    };
}

propagate_system_marker!(UsedInMetric, UsedInUKImperial, UsedInUSCustomary);

// ─────────────────────────────────────────────────────────────────────────────
// Unit combinators
// ─────────────────────────────────────────────────────────────────────────────

/// Combines two unit instances into their product unit.
///
/// This is the value-level counterpart of [`Multiplied`]; together with [`divided`] and
/// [`reciprocal`] it forms the combinator vocabulary accepted by
/// [`Measurement::times_using`](crate::Measurement::times_using).
#[inline]
pub fn multiplied<L: UndefinedUnit, R: UndefinedUnit>(_left: L, _right: R) -> Multiplied<L, R> {
    Multiplied::default()
}

/// Combines two unit instances into their quotient unit.
#[inline]
pub fn divided<N: UndefinedUnit, D: UndefinedUnit>(_numerator: N, _denominator: D) -> Divided<N, D> {
    Divided::default()
}

/// Inverts a unit instance.
#[inline]
pub fn reciprocal<U: UndefinedUnit>(_unit: U) -> Reciprocal<U> {
    Reciprocal::default()
}

// ─────────────────────────────────────────────────────────────────────────────
// Simplify
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for simplifying composite unit types.
///
/// This reduces unit expressions whose structure already implies a cancellation, such as
/// `Divided<U, U>` to [`One`] or `Reciprocal<Reciprocal<U>>` to `U`. Simplification never changes
/// the magnitude.
pub trait Simplify {
    /// The simplified unit type.
    type Out: Unit;
    /// Convert this measurement to its simplified unit.
    fn simplify(self) -> Measurement<Self::Out>;
}

impl<U: UndefinedUnit> Simplify for Measurement<Divided<U, U>> {
    type Out = One;
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::{Measurement, One, Simplify};
    ///
    /// let ratio = Meters::new(1.0) / Meters::new(2.0);
    /// let one: Measurement<One> = ratio.simplify();
    /// assert!((one.value() - 0.5).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Measurement<One> {
        Measurement::new(self.value())
    }
}

impl<N: UndefinedUnit, D: UndefinedUnit> Simplify for Measurement<Divided<N, Divided<N, D>>> {
    type Out = D;
    fn simplify(self) -> Measurement<D> {
        Measurement::new(self.value())
    }
}

impl<U: UndefinedUnit> Simplify for Measurement<Reciprocal<Reciprocal<U>>> {
    type Out = U;
    fn simplify(self) -> Measurement<U> {
        Measurement::new(self.value())
    }
}

impl<U: UndefinedUnit> Simplify for Measurement<Multiplied<U, Reciprocal<U>>> {
    type Out = One;
    fn simplify(self) -> Measurement<One> {
        Measurement::new(self.value())
    }
}

impl<U: UndefinedUnit> Simplify for Measurement<Multiplied<Reciprocal<U>, U>> {
    type Out = One;
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::{Measurement, One, Simplify};
    ///
    /// let per_metre = 1.0 / Meters::new(4.0);
    /// let one: Measurement<One> = (per_metre * Meters::new(8.0)).simplify();
    /// assert!((one.value() - 2.0).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Measurement<One> {
        Measurement::new(self.value())
    }
}

impl<Q: DefinedUnit> Simplify for Measurement<Extended<Q>> {
    type Out = Q;
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::mass::Grams;
    /// use mensura_core::Simplify;
    ///
    /// let product = Meters::new(6.0) * Grams::new(2.0);
    /// let metres: Meters = product.div_right_factor(Grams::new(3.0)).simplify();
    /// assert!((metres.value() - 4.0).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Measurement<Q> {
        Measurement::new(self.value())
    }
}
