//! Volume units.
//!
//! The canonical scaling unit for this quantity is [`Liter`]. Gallons and pints deliberately
//! exist twice: the UK imperial gallon (`4.54609 L` exactly) and the US liquid gallon
//! (`3.785411784 L` exactly) are different units that never convert to each other by accident
//! of sharing a name, and each belongs only to its own regional system.

use crate::{Measurement, Quantity, Unit};
use mensura_derive::Unit;

/// Quantity tag for volume.
pub enum Volume {}
impl Quantity for Volume {}

/// Marker trait for any [`Unit`] whose quantity is [`Volume`].
pub trait VolumeUnit: Unit<Quant = Volume> {}
impl<T: Unit<Quant = Volume>> VolumeUnit for T {}

/// Litre.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "L", quantity = Volume, ratio = 1.0, systems(metric))]
pub struct Liter;
/// A measurement in litres.
pub type Liters = Measurement<Liter>;
/// One litre.
pub const LITER: Liters = Liters::new(1.0);

/// Millilitre (`1e-3 L`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mL", quantity = Volume, ratio = 1e-3, systems(metric))]
pub struct Milliliter;
/// A measurement in millilitres.
pub type Milliliters = Measurement<Milliliter>;
/// One millilitre.
pub const ML: Milliliters = Milliliters::new(1.0);

/// UK imperial gallon (`4.54609 L` exactly).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gal (imp)", quantity = Volume, ratio = 4.546_09, systems(uk_imperial))]
pub struct UKGallon;
/// A measurement in UK imperial gallons.
pub type UKGallons = Measurement<UKGallon>;
/// One UK imperial gallon.
pub const UK_GAL: UKGallons = UKGallons::new(1.0);

/// UK imperial pint (`1/8` UK gallon).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pt (imp)", quantity = Volume, ratio = 4.546_09 / 8.0, systems(uk_imperial))]
pub struct UKPint;
/// A measurement in UK imperial pints.
pub type UKPints = Measurement<UKPint>;
/// One UK imperial pint.
pub const UK_PINT: UKPints = UKPints::new(1.0);

/// US liquid gallon (`3.785411784 L` exactly).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gal (US)", quantity = Volume, ratio = 3.785_411_784, systems(us_customary))]
pub struct USGallon;
/// A measurement in US liquid gallons.
pub type USGallons = Measurement<USGallon>;
/// One US liquid gallon.
pub const US_GAL: USGallons = USGallons::new(1.0);

/// US liquid pint (`1/8` US gallon).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pt (US)", quantity = Volume, ratio = 3.785_411_784 / 8.0, systems(us_customary))]
pub struct USPint;
/// A measurement in US liquid pints.
pub type USPints = Measurement<USPint>;
/// One US liquid pint.
pub const US_PINT: USPints = USPints::new(1.0);

crate::impl_unit_conversions!(Liter, Milliliter, UKGallon, UKPint, USGallon, USPint);
