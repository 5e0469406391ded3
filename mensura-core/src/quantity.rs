//! Physical-quantity tags and their combinators.

use core::marker::PhantomData;

/// Marker trait for **physical quantities** (Length, Time, Mass …).
///
/// A *quantity* is the category that distinguishes a metre from a second.
/// Defined catalog quantities are modeled as empty enums:
///
/// ```rust
/// use mensura_core::Quantity;
/// #[derive(Debug)]
/// pub enum Length {}
/// impl Quantity for Length {}
/// ```
///
/// Composite ("undefined") quantities are assembled from other quantities via
/// [`ProductQuantity`], [`QuotientQuantity`] and [`InverseQuantity`]; they carry
/// no runtime data.
pub trait Quantity: 'static {}

/// Quantity formed by multiplying two [`Quantity`] tags.
///
/// This is the tag behind product units such as `Length · Mass`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductQuantity<L: Quantity, R: Quantity>(PhantomData<(L, R)>);
impl<L: Quantity, R: Quantity> Quantity for ProductQuantity<L, R> {}

/// Quantity formed by dividing one [`Quantity`] by another.
///
/// This is the tag behind derived units such as `Length / Time` for speeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuotientQuantity<N: Quantity, D: Quantity>(PhantomData<(N, D)>);
impl<N: Quantity, D: Quantity> Quantity for QuotientQuantity<N, D> {}

/// Quantity formed by inverting a [`Quantity`] (`1 / Q`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InverseQuantity<Q: Quantity>(PhantomData<Q>);
impl<Q: Quantity> Quantity for InverseQuantity<Q> {}

/// Quantity tag for dimensionless values.
pub enum Dimensionless {}
impl Quantity for Dimensionless {}
