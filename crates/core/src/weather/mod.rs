//! Weather providers
//!
//! The spread simulator needs one [`WeatherSample`] per horizon. Providers
//! implement [`WeatherSource::fetch`], which may fail; callers use the
//! provided [`WeatherSource::get_weather`], which never fails and instead
//! tags the result as degraded when it had to substitute
//! [`WeatherSample::FALLBACK`].
//!
//! There are no retries: a single failed attempt yields the fallback.

mod error;
pub mod openweather;

pub use error::WeatherError;
#[cfg(feature = "openweather")]
pub use openweather::OpenWeatherClient;
pub use openweather::OpenWeatherConfig;

use crate::core_types::{GeoPoint, WeatherSample};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Outcome of a weather lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeatherReading {
    /// Observation returned by the provider
    Live { sample: WeatherSample },
    /// Provider failed; `sample` is [`WeatherSample::FALLBACK`]
    Degraded { sample: WeatherSample, reason: String },
}

impl WeatherReading {
    /// Sample to simulate with, whichever way it was obtained
    #[must_use]
    pub fn sample(&self) -> WeatherSample {
        match self {
            Self::Live { sample } | Self::Degraded { sample, .. } => *sample,
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// A source of weather observations keyed by location
///
/// Implementations must bound their own latency (the HTTP client uses a
/// 5 second timeout) so that a prediction never blocks indefinitely.
pub trait WeatherSource: Send + Sync {
    /// Attempt a single observation.
    ///
    /// # Errors
    ///
    /// Any transport, status or payload problem, as a [`WeatherError`].
    fn fetch(&self, location: GeoPoint) -> Result<WeatherSample, WeatherError>;

    /// Observation for `location`, falling back to [`WeatherSample::FALLBACK`]
    /// on any failure.
    fn get_weather(&self, location: GeoPoint) -> WeatherReading {
        match self.fetch(location) {
            Ok(sample) => WeatherReading::Live { sample },
            Err(e) => {
                warn!(
                    "Weather lookup failed at ({:.4}, {:.4}): {e}. Using default weather values",
                    location.lat, location.lng
                );
                WeatherReading::Degraded {
                    sample: WeatherSample::FALLBACK,
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl<S: WeatherSource + ?Sized> WeatherSource for Box<S> {
    fn fetch(&self, location: GeoPoint) -> Result<WeatherSample, WeatherError> {
        (**self).fetch(location)
    }
}

impl<S: WeatherSource + ?Sized> WeatherSource for &S {
    fn fetch(&self, location: GeoPoint) -> Result<WeatherSample, WeatherError> {
        (**self).fetch(location)
    }
}

/// Provider that always returns the same sample
///
/// Used for offline runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWeather(pub WeatherSample);

impl WeatherSource for FixedWeather {
    fn fetch(&self, _location: GeoPoint) -> Result<WeatherSample, WeatherError> {
        Ok(self.0)
    }
}
