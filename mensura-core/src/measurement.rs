//! Measurement type and its implementations.

use crate::unit::{Divided, Multiplied, Reciprocal, Unit};
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A measurement with a specific unit.
///
/// `Measurement<U>` wraps an `f64` magnitude together with phantom type information about its unit
/// `U`. This enables compile-time dimensional analysis while maintaining zero runtime cost.
///
/// Multiplying or dividing two measurements derives the result's unit type from the operand unit
/// types: operands are wrapped into their undefined-algebra form ([`Unit::Wrapped`]) and combined
/// into a [`Multiplied`] or [`Divided`] composite. Cancellation rules for already-composite
/// operands live in the [`algebra`](crate::algebra) module and on [`Simplify`](crate::Simplify).
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::Meters;
/// use mensura_core::time::Seconds;
///
/// let d = Meters::new(100.0);
/// let t = Seconds::new(20.0);
/// let v = d / t;
/// assert_eq!(v.value(), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Measurement<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Measurement<U> {
    /// A constant representing NaN for this measurement type.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a new measurement with the given magnitude.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Creates a measurement from a magnitude and an explicit unit instance.
    ///
    /// This is the result factory expected by [`times_using`](Self::times_using) and
    /// [`div_using`](Self::div_using); it is otherwise equivalent to [`new`](Self::new).
    #[inline]
    pub const fn of(value: f64, _unit: U) -> Self {
        Self::new(value)
    }

    /// Returns the raw magnitude.
    ///
    /// ```rust
    /// use mensura_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns an instance of this measurement's unit.
    ///
    /// Units are zero-sized, so this has no runtime content; it exists so combinator-based code
    /// can pass unit instances around.
    #[inline]
    pub fn unit(self) -> U {
        U::default()
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use mensura_core::mass::Grams;
    /// let m = Grams::new(-10.0);
    /// assert_eq!(m.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Converts this measurement to another unit of the same quantity.
    ///
    /// Works through composite shapes as well, because shape ratios compose from their
    /// components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mensura_core::length::{Kilometers, Meter, Meters};
    ///
    /// let km = Kilometers::new(1.0);
    /// let m: Meters = km.to::<Meter>();
    /// assert_eq!(m.value(), 1000.0);
    /// ```
    #[inline]
    pub const fn to<T: Unit<Quant = U::Quant>>(self) -> Measurement<T> {
        Measurement::<T>::new(self.0 * (U::RATIO / T::RATIO))
    }

    /// Returns the minimum of this measurement and another.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// let a = Meters::new(3.0);
    /// let b = Meters::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub const fn min(&self, other: Measurement<U>) -> Measurement<U> {
        Measurement::<U>::new(self.value().min(other.value()))
    }

    /// Const addition of two measurements.
    #[inline]
    pub const fn add(&self, other: Measurement<U>) -> Measurement<U> {
        Measurement::<U>::new(self.value() + other.value())
    }

    /// Const subtraction of two measurements.
    #[inline]
    pub const fn sub(&self, other: Measurement<U>) -> Measurement<U> {
        Measurement::<U>::new(self.value() - other.value())
    }

    /// Const same-unit multiplication of the magnitudes.
    ///
    /// Unlike the `*` operator this does not track the squared unit; it is a scalar helper for
    /// const contexts.
    #[inline]
    pub const fn mul(&self, other: Measurement<U>) -> Measurement<U> {
        Measurement::<U>::new(self.value() * other.value())
    }

    /// Const same-unit division of the magnitudes.
    #[inline]
    pub const fn div(&self, other: Measurement<U>) -> Measurement<U> {
        Measurement::<U>::new(self.value() / other.value())
    }

    /// The multiplicative inverse of this measurement.
    ///
    /// Equivalent to `1.0 / self`; the magnitude is inverted per IEEE-754 (so a zero magnitude
    /// yields infinity) and the unit becomes [`Reciprocal`].
    ///
    /// ```rust
    /// use mensura_core::time::Seconds;
    /// let rate = Seconds::new(4.0).reciprocal();
    /// assert_eq!(rate.value(), 0.25);
    /// ```
    #[inline]
    pub fn reciprocal(self) -> Measurement<Reciprocal<U::Wrapped>> {
        Measurement::new(1.0 / self.0)
    }

    /// Multiplication with caller-supplied unit combinator and result factory.
    ///
    /// This is the fully generic form of `*`: `combine` receives the two operand units in their
    /// undefined-algebra form and computes the result unit, and `wrap` builds the result value.
    /// It exists for user-defined unit shapes and value types; catalog code normally uses the
    /// operators.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// use mensura_core::mass::Grams;
    /// use mensura_core::{multiplied, Measurement};
    ///
    /// let product = Meters::new(5.0).times_using(Grams::new(2.0), multiplied, Measurement::of);
    /// assert_eq!(product.value(), 10.0);
    /// ```
    #[inline]
    pub fn times_using<R, T, M>(
        self,
        rhs: Measurement<R>,
        combine: impl FnOnce(U::Wrapped, R::Wrapped) -> T,
        wrap: impl FnOnce(f64, T) -> M,
    ) -> M
    where
        R: Unit,
        T: Unit,
    {
        wrap(
            self.value() * rhs.value(),
            combine(self.unit().wrapped(), rhs.unit().wrapped()),
        )
    }

    /// Division with caller-supplied unit combinator and result factory.
    ///
    /// Symmetric to [`times_using`](Self::times_using); the magnitude division follows IEEE-754,
    /// so a zero divisor yields an infinite or NaN magnitude.
    #[inline]
    pub fn div_using<R, T, M>(
        self,
        rhs: Measurement<R>,
        combine: impl FnOnce(U::Wrapped, R::Wrapped) -> T,
        wrap: impl FnOnce(f64, T) -> M,
    ) -> M
    where
        R: Unit,
        T: Unit,
    {
        wrap(
            self.value() / rhs.value(),
            combine(self.unit().wrapped(), rhs.unit().wrapped()),
        )
    }
}

/// Constructs a measurement of `unit` whose magnitude is the product of the operands' magnitudes.
///
/// The building block behind every `times` rule: the unit is supplied by the caller (usually the
/// output of a unit combinator), the arithmetic is a single `f64` multiply.
#[inline]
pub fn by_multiplying<L: Unit, R: Unit, T: Unit>(
    left: Measurement<L>,
    right: Measurement<R>,
    _unit: T,
) -> Measurement<T> {
    Measurement::new(left.value() * right.value())
}

/// Constructs a measurement of `unit` whose magnitude is the quotient of the operands' magnitudes.
///
/// Division by a zero magnitude follows IEEE-754 (`±inf`/`NaN`); no separate error path exists.
#[inline]
pub fn by_dividing<L: Unit, R: Unit, T: Unit>(
    left: Measurement<L>,
    right: Measurement<R>,
    _unit: T,
) -> Measurement<T> {
    Measurement::new(left.value() / right.value())
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Measurement<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Measurement<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Measurement<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Measurement<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Mul<f64> for Measurement<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Measurement<U>> for f64 {
    type Output = Measurement<U>;
    #[inline]
    fn mul(self, rhs: Measurement<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Measurement<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

/// `scalar / measurement` inverts the unit: `2.0 / (4.0 s)` is `0.5 (1/s)`.
impl<U: Unit> Div<Measurement<U>> for f64 {
    type Output = Measurement<Reciprocal<U::Wrapped>>;
    #[inline]
    fn div(self, rhs: Measurement<U>) -> Self::Output {
        Measurement::new(self / rhs.0)
    }
}

impl<U: Unit> DivAssign for Measurement<U> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.0 /= rhs.0;
    }
}

impl<U: Unit> Rem<f64> for Measurement<U> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: f64) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<U: Unit> PartialEq<f64> for Measurement<U> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<U: Unit> Neg for Measurement<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> From<f64> for Measurement<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Product of two measurements: operand units are wrapped for undefined algebra and combined into
/// a [`Multiplied`] composite. Covers all four defined/undefined operand pairings through
/// [`Unit::Wrapped`].
///
/// ```rust
/// use mensura_core::length::Meters;
/// use mensura_core::mass::Grams;
///
/// let p = Meters::new(5.0) * Grams::new(2.0);
/// assert_eq!(p.value(), 10.0);
/// ```
impl<L: Unit, R: Unit> Mul<Measurement<R>> for Measurement<L> {
    type Output = Measurement<Multiplied<L::Wrapped, R::Wrapped>>;
    #[inline]
    fn mul(self, rhs: Measurement<R>) -> Self::Output {
        Measurement::new(self.0 * rhs.0)
    }
}

/// Quotient of two measurements, forming a [`Divided`] composite.
///
/// The magnitude division follows IEEE-754: dividing by a zero magnitude yields `±inf` or `NaN`.
impl<N: Unit, D: Unit> Div<Measurement<D>> for Measurement<N> {
    type Output = Measurement<Divided<N::Wrapped, D::Wrapped>>;
    #[inline]
    fn div(self, rhs: Measurement<D>) -> Self::Output {
        Measurement::new(self.0 / rhs.0)
    }
}

impl<U: Unit> core::fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)?;
        U::fmt_suffix(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ratio helpers for same-unit quotients
// ─────────────────────────────────────────────────────────────────────────────

impl<U: crate::UndefinedUnit> Measurement<Divided<U, U>> {
    /// Arc sine of a same-unit ratio.
    ///
    /// ```rust
    /// use mensura_core::length::Meters;
    /// let ratio = Meters::new(1.0) / Meters::new(2.0);
    /// let angle_rad = ratio.asin();
    /// assert!((angle_rad - core::f64::consts::FRAC_PI_6).abs() < 1e-12);
    /// ```
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

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Measurement<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Measurement<U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Measurement::new(value))
    }
}

/// Serde helper module for serializing measurements with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit symbols in serialized
/// data. Composite shapes have an empty `SYMBOL`, so this helper is intended for leaf catalog
/// units.
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "mensura_core::serde_with_unit")]
///     max_distance: Meters,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Meters,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Measurement<U>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<U, S>(measurement: &Measurement<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Measurement", 2)?;
        state.serialize_field("value", &measurement.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Measurement<U>` from a struct with `value` and optionally `unit` fields.
    ///
    /// The `unit` field is validated against `U::SYMBOL` if present, but not required, for
    /// backwards compatibility with the compact form.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Measurement<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct MeasurementVisitor<U>(core::marker::PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for MeasurementVisitor<U> {
            type Value = Measurement<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Measurement with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Measurement<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                // Validate unit if provided (optional for backwards compatibility)
                if let Some(ref unit_str) = unit {
                    if unit_str != U::SYMBOL {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            U::SYMBOL,
                            unit_str
                        )));
                    }
                }

                Ok(Measurement::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Measurement",
            &["value", "unit"],
            MeasurementVisitor(core::marker::PhantomData),
        )
    }
}
