//! Time units.
//!
//! The canonical scaling unit for this quantity is [`Second`]. Time units are shared by every
//! regional measurement system, which makes them the usual second operand of the system-gated
//! arithmetic in `regional.rs`.

use crate::{Measurement, Quantity, Unit};
use mensura_derive::Unit;

/// Quantity tag for time.
pub enum Time {}
impl Quantity for Time {}

/// Marker trait for any [`Unit`] whose quantity is [`Time`].
pub trait TimeUnit: Unit<Quant = Time> {}
impl<T: Unit<Quant = Time>> TimeUnit for T {}

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", quantity = Time, ratio = 1.0, systems(metric, uk_imperial, us_customary))]
pub struct Second;
/// A measurement in seconds.
pub type Seconds = Measurement<Second>;
/// One second.
pub const S: Seconds = Seconds::new(1.0);

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", quantity = Time, ratio = 1e-3, systems(metric, uk_imperial, us_customary))]
pub struct Millisecond;
/// A measurement in milliseconds.
pub type Milliseconds = Measurement<Millisecond>;
/// One millisecond.
pub const MS: Milliseconds = Milliseconds::new(1.0);

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", quantity = Time, ratio = 60.0, systems(metric, uk_imperial, us_customary))]
pub struct Minute;
/// A measurement in minutes.
pub type Minutes = Measurement<Minute>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", quantity = Time, ratio = 3_600.0, systems(metric, uk_imperial, us_customary))]
pub struct Hour;
/// A measurement in hours.
pub type Hours = Measurement<Hour>;
/// One hour.
pub const H: Hours = Hours::new(1.0);

crate::impl_unit_conversions!(Second, Millisecond, Minute, Hour);
