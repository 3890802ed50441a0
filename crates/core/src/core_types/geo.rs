//! Geographic points

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
///
/// Serializes as `{"lat": .., "lng": ..}`, the shape map layers consume.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Geographic projection of one flooded grid cell
pub type FloodCell = GeoPoint;
