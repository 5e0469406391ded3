//! Mass units.
//!
//! The canonical scaling unit for this quantity is [`Gram`]. The module exercises asymmetric
//! regional membership: pound and ounce are shared by both imperial systems, the stone is UK
//! imperial only, and the short ton is US customary only.

use crate::{Measurement, Quantity, Unit};
use mensura_derive::Unit;

/// Quantity tag for mass.
pub enum Mass {}
impl Quantity for Mass {}

/// Marker trait for any [`Unit`] whose quantity is [`Mass`].
pub trait MassUnit: Unit<Quant = Mass> {}
impl<T: Unit<Quant = Mass>> MassUnit for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Metric units
// ─────────────────────────────────────────────────────────────────────────────

/// Gram.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", quantity = Mass, ratio = 1.0, systems(metric))]
pub struct Gram;
/// A measurement in grams.
pub type Grams = Measurement<Gram>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Kilogram (`1000 g`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", quantity = Mass, ratio = 1_000.0, systems(metric))]
pub struct Kilogram;
/// A measurement in kilograms.
pub type Kilograms = Measurement<Kilogram>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Tonne (`1e6 g`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", quantity = Mass, ratio = 1e6, systems(metric))]
pub struct Tonne;
/// A measurement in tonnes.
pub type Tonnes = Measurement<Tonne>;
/// One tonne.
pub const T: Tonnes = Tonnes::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Imperial units
// ─────────────────────────────────────────────────────────────────────────────

/// (Avoirdupois) pound (`453.59237 g` exactly).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", quantity = Mass, ratio = 453.592_37, systems(uk_imperial, us_customary))]
pub struct Pound;
/// A measurement in pounds.
pub type Pounds = Measurement<Pound>;
/// One pound.
pub const LB: Pounds = Pounds::new(1.0);

/// Ounce (`1/16 lb` exactly).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", quantity = Mass, ratio = 453.592_37 / 16.0, systems(uk_imperial, us_customary))]
pub struct Ounce;
/// A measurement in ounces.
pub type Ounces = Measurement<Ounce>;
/// One ounce.
pub const OZ: Ounces = Ounces::new(1.0);

/// Stone (`14 lb` exactly). UK imperial only.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "st", quantity = Mass, ratio = 14.0 * 453.592_37, systems(uk_imperial))]
pub struct Stone;
/// A measurement in stones.
pub type Stones = Measurement<Stone>;
/// One stone.
pub const ST: Stones = Stones::new(1.0);

/// Short ton (`2000 lb` exactly). US customary only.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "tn", quantity = Mass, ratio = 2_000.0 * 453.592_37, systems(us_customary))]
pub struct ShortTon;
/// A measurement in short tons.
pub type ShortTons = Measurement<ShortTon>;
/// One short ton.
pub const TN: ShortTons = ShortTons::new(1.0);

crate::impl_unit_conversions!(Gram, Kilogram, Tonne, Pound, Ounce, Stone, ShortTon);
