//! Prediction output consumed by the map UI
//!
//! ```json
//! {
//!   "flood_location": {"lat": 24.712, "lng": 46.681, "name": "..."},
//!   "weather": {"wind_speed": 3.0, "wind_direction": 0, "temperature": 35.0, "humidity": 30},
//!   "predictions": {
//!     "10min": {"zones": [{"lat": .., "lng": ..}], "boundary": {..}, "zone_count": 1}
//!   }
//! }
//! ```
//!
//! `weather_degraded: true` is appended only when the weather service could
//! not be reached and default values were simulated.

use crate::boundary::BoundaryEllipse;
use crate::core_types::{FloodCell, GeoPoint, WeatherSummary};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Key of a horizon in the `predictions` map, e.g. `"30min"`
#[must_use]
pub fn horizon_label(minutes: u32) -> String {
    format!("{minutes}min")
}

/// Where the flood starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloodLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FloodLocation {
    #[must_use]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Result for one horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HorizonPrediction {
    #[serde(skip)]
    pub minutes: u32,
    /// Flooded cells, south-west to north-east in row-major order
    pub zones: Vec<FloodCell>,
    pub boundary: BoundaryEllipse,
    pub zone_count: usize,
    /// Whether this horizon simulated the fallback weather
    #[serde(skip)]
    pub weather_degraded: bool,
}

/// Per-horizon results in request order, serialized as a label-keyed map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HorizonPredictions(pub Vec<HorizonPrediction>);

impl HorizonPredictions {
    /// Result for `minutes`, if it was requested
    #[must_use]
    pub fn horizon(&self, minutes: u32) -> Option<&HorizonPrediction> {
        self.0.iter().find(|p| p.minutes == minutes)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HorizonPrediction> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for HorizonPredictions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for prediction in &self.0 {
            map.serialize_entry(&horizon_label(prediction.minutes), prediction)?;
        }
        map.end()
    }
}

/// Full answer to one prediction request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub flood_location: FloodLocation,
    pub weather: WeatherSummary,
    pub predictions: HorizonPredictions,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub weather_degraded: bool,
}
