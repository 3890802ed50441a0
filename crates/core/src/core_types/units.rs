//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the quantities that flow through
//! the flood predictor so that a wind speed can never be passed where a
//! humidity is expected, or a cell size in meters mixed with a spread in
//! kilometers.
//!
//! # Design Philosophy
//! - All types wrap `f64` (geographic coordinates need the precision anyway)
//! - `Deref` to the raw value for arithmetic-heavy code
//! - Total ordering via `Ord` (NaN handled as greater than all values)
//! - Transparent serde representation (serializes as a bare number)
//!
//! # Usage
//! ```
//! use flood_sim_core::core_types::units::{Degrees, Kilometers, Meters};
//!
//! let cell = Meters::new(100.0);
//! let km: Kilometers = cell.into();
//! assert!((*km - 0.1).abs() < 1e-12);
//!
//! let a = Degrees::new(350.0);
//! let b = Degrees::new(10.0);
//! assert!((*a.angular_distance(b) - 20.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Mul};

/// Generates the shared trait surface of a scalar unit newtype.
macro_rules! scalar_unit {
    ($name:ident, $suffix:literal) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                $name(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> f64 {
                value.0
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if let Some(precision) = f.precision() {
                    write!(f, "{:.*}{}", precision, self.0, $suffix)
                } else {
                    write!(f, "{}{}", self.0, $suffix)
                }
            }
        }
    };
}

// ============================================================================
// WEATHER QUANTITIES
// ============================================================================

/// Air temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Celsius {
    /// Create a new Celsius temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }
}

scalar_unit!(Celsius, "°C");

/// Relative humidity as a percentage (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(f64);

impl Percent {
    /// Create a new percentage. Range checks happen where the value is consumed.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Percent(value)
    }

    /// Whether the value lies in `[0, 100]`
    #[must_use]
    pub fn is_valid(self) -> bool {
        (0.0..=100.0).contains(&self.0)
    }
}

scalar_unit!(Percent, "%");

/// Speed in meters per second (the metric units weather services report)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl MetersPerSecond {
    /// Create a new speed
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }
}

scalar_unit!(MetersPerSecond, " m/s");

// ============================================================================
// ANGLES
// ============================================================================

/// Compass angle in degrees (0 = North, 90 = East)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Degrees {
    /// Due north
    pub const NORTH: Degrees = Degrees(0.0);

    /// Create a new angle (not normalized)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Wrap into `[0, 360)`
    #[must_use]
    pub fn normalized(self) -> Self {
        let wrapped = self.0.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if wrapped >= 360.0 {
            Degrees(0.0)
        } else {
            Degrees(wrapped)
        }
    }

    /// The opposite compass direction
    #[must_use]
    pub fn reversed(self) -> Self {
        Degrees(self.0 + 180.0).normalized()
    }

    /// Smallest angle between two bearings, in `[0, 180]`
    #[must_use]
    pub fn angular_distance(self, other: Degrees) -> Degrees {
        Degrees(((self.0 - other.0 + 180.0).rem_euclid(360.0) - 180.0).abs())
    }
}

scalar_unit!(Degrees, "°");

// ============================================================================
// DISTANCES
// ============================================================================

/// Distance in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Meters(f64);

impl Meters {
    /// Create a new distance
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }
}

scalar_unit!(Meters, " m");

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl Kilometers {
    /// Create a new distance
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }
}

scalar_unit!(Kilometers, " km");

impl From<Meters> for Kilometers {
    fn from(value: Meters) -> Self {
        Kilometers(value.0 / 1000.0)
    }
}
