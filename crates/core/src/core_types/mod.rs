//! Core types and utilities

pub mod geo;
pub mod units;
pub mod weather;

pub use geo::{FloodCell, GeoPoint};
pub use units::*;
pub use weather::*;
