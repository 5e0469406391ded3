//! Regional measurement-system markers.
//!
//! Every unit type can declare which regional systems it participates in by
//! implementing zero or more of the three base markers ([`UsedInMetric`],
//! [`UsedInUKImperial`], [`UsedInUSCustomary`]); the `#[derive(Unit)]` macro
//! emits these from its `systems(...)` attribute.
//!
//! The remaining four combinations users care about are expressed as derived
//! traits with blanket impls, so a unit never implements them directly:
//!
//! - [`UsedInImperial`]: UK imperial **and** US customary (the shared "imperial" core).
//! - [`UsedInMetricAndImperial`]: all three systems.
//! - [`UsedInMetricAndUKImperial`], [`UsedInMetricAndUSCustomary`]: the two
//!   metric/imperial hybrids.
//!
//! Markers propagate through composite unit shapes (see `unit.rs`), so a
//! product of two metric units is itself metric and stays eligible for the
//! metric-gated operators in `regional.rs`.

/// Marker for units that belong to the metric system.
pub trait UsedInMetric {}

/// Marker for units that belong to the UK imperial system.
pub trait UsedInUKImperial {}

/// Marker for units that belong to the US customary system.
pub trait UsedInUSCustomary {}

/// Units shared by both imperial systems (UK imperial and US customary).
pub trait UsedInImperial: UsedInUKImperial + UsedInUSCustomary {}
impl<T: UsedInUKImperial + UsedInUSCustomary> UsedInImperial for T {}

/// Units usable everywhere: metric, UK imperial, and US customary.
pub trait UsedInMetricAndImperial: UsedInMetric + UsedInUKImperial + UsedInUSCustomary {}
impl<T: UsedInMetric + UsedInUKImperial + UsedInUSCustomary> UsedInMetricAndImperial for T {}

/// Units shared by the metric and UK imperial systems.
pub trait UsedInMetricAndUKImperial: UsedInMetric + UsedInUKImperial {}
impl<T: UsedInMetric + UsedInUKImperial> UsedInMetricAndUKImperial for T {}

/// Units shared by the metric and US customary systems.
pub trait UsedInMetricAndUSCustomary: UsedInMetric + UsedInUSCustomary {}
impl<T: UsedInMetric + UsedInUSCustomary> UsedInMetricAndUSCustomary for T {}
