//! Predefined unit catalog.
//!
//! Each module defines one physical quantity, its catalog units (via `#[derive(Unit)]`), type
//! aliases, unit constants and the bidirectional `From` conversion ladder. Regional-system
//! membership is declared per unit with the derive's `systems(...)` attribute.

pub mod dimensionless;
pub mod length;
pub mod mass;
pub mod speed;
pub mod time;
pub mod volume;
