//! Length units.
//!
//! The canonical scaling unit for this quantity is [`Meter`] (`Meter::RATIO == 1.0`). All other
//! length units are expressed as exact ratios to metres.
//!
//! The metric ladder belongs to the metric system; inch, foot, yard and mile follow the current
//! international definitions (the international inch is exactly `0.0254 m`) and belong to both
//! imperial systems.
//!
//! ```rust
//! use mensura_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.5);
//! let m = km.to::<Meter>();
//! assert_eq!(m.value(), 1500.0);
//! ```

use crate::{Measurement, Quantity, Unit};
use mensura_derive::Unit;

/// Quantity tag for length.
pub enum Length {}
impl Quantity for Length {}

/// Marker trait for any [`Unit`] whose quantity is [`Length`].
pub trait LengthUnit: Unit<Quant = Length> {}
impl<T: Unit<Quant = Length>> LengthUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Metric units
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", quantity = Length, ratio = 1.0, systems(metric))]
pub struct Meter;
/// A measurement in metres.
pub type Meters = Measurement<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", quantity = Length, ratio = 1_000.0, systems(metric))]
pub struct Kilometer;
/// A measurement in kilometres.
pub type Kilometers = Measurement<Kilometer>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", quantity = Length, ratio = 1e-2, systems(metric))]
pub struct Centimeter;
/// A measurement in centimetres.
pub type Centimeters = Measurement<Centimeter>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", quantity = Length, ratio = 1e-3, systems(metric))]
pub struct Millimeter;
/// A measurement in millimetres.
pub type Millimeters = Measurement<Millimeter>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Imperial units (shared by UK imperial and US customary)
// ─────────────────────────────────────────────────────────────────────────────

/// Inch (`0.0254 m` exactly).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", quantity = Length, ratio = 254.0 / 10_000.0, systems(uk_imperial, us_customary))]
pub struct Inch;
/// A measurement in inches.
pub type Inches = Measurement<Inch>;
/// One inch.
pub const INCH: Inches = Inches::new(1.0);

/// Foot (`0.3048 m` exactly).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", quantity = Length, ratio = 3048.0 / 10_000.0, systems(uk_imperial, us_customary))]
pub struct Foot;
/// A measurement in feet.
pub type Feet = Measurement<Foot>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// Yard (`0.9144 m` exactly).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", quantity = Length, ratio = 9144.0 / 10_000.0, systems(uk_imperial, us_customary))]
pub struct Yard;
/// A measurement in yards.
pub type Yards = Measurement<Yard>;
/// One yard.
pub const YD: Yards = Yards::new(1.0);

/// (Statute) mile (`1609.344 m` exactly).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", quantity = Length, ratio = 1_609_344.0 / 1_000.0, systems(uk_imperial, us_customary))]
pub struct Mile;
/// A measurement in miles.
pub type Miles = Measurement<Mile>;
/// One mile.
pub const MI: Miles = Miles::new(1.0);

// Generate all bidirectional From implementations between length units.
crate::impl_unit_conversions!(Meter, Centimeter, Millimeter, Kilometer, Inch, Foot, Yard, Mile);
