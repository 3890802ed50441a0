//! Weather observations consumed by the spread simulator

use super::units::{Celsius, Degrees, MetersPerSecond, Percent};
use crate::weather::WeatherError;
use serde::{Deserialize, Serialize};

/// One weather observation at the flood origin
///
/// Obtained fresh for every simulation horizon and never mutated afterwards.
/// Use [`WeatherSample::new`] to build one from raw readings; it enforces the
/// value ranges the simulator relies on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Wind speed, always >= 0
    pub wind_speed: MetersPerSecond,
    /// Wind direction in `[0, 360)`
    pub wind_direction: Degrees,
    /// Air temperature
    pub temperature: Celsius,
    /// Relative humidity in `[0, 100]`
    pub humidity: Percent,
}

impl WeatherSample {
    /// Sample substituted whenever the weather service cannot be used:
    /// light breeze from the north, hot and dry.
    pub const FALLBACK: WeatherSample = WeatherSample {
        wind_speed: MetersPerSecond::new(3.0),
        wind_direction: Degrees::NORTH,
        temperature: Celsius::new(35.0),
        humidity: Percent::new(30.0),
    };

    /// Validate raw readings into a sample.
    ///
    /// The wind direction is wrapped into `[0, 360)`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::OutOfRange`] for a non-finite value, a negative
    /// wind speed or a humidity outside `[0, 100]`.
    pub fn new(
        wind_speed: f64,
        wind_direction: f64,
        temperature: f64,
        humidity: f64,
    ) -> Result<Self, WeatherError> {
        let check = |field: &'static str, value: f64, ok: bool| {
            if value.is_finite() && ok {
                Ok(())
            } else {
                Err(WeatherError::OutOfRange { field, value })
            }
        };
        check("wind_speed", wind_speed, wind_speed >= 0.0)?;
        check("wind_direction", wind_direction, true)?;
        check("temperature", temperature, true)?;
        check("humidity", humidity, Percent::new(humidity).is_valid())?;

        Ok(Self {
            wind_speed: MetersPerSecond::new(wind_speed),
            wind_direction: Degrees::new(wind_direction).normalized(),
            temperature: Celsius::new(temperature),
            humidity: Percent::new(humidity),
        })
    }

    /// Rounded view for display next to the map
    #[must_use]
    pub fn summary(&self) -> WeatherSummary {
        WeatherSummary::from(self)
    }
}

impl Default for WeatherSample {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Display form of a [`WeatherSample`]
///
/// Wind speed and temperature keep one decimal; wind direction and humidity
/// are truncated to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub wind_speed: f64,
    pub wind_direction: i32,
    pub temperature: f64,
    pub humidity: i32,
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl From<&WeatherSample> for WeatherSummary {
    fn from(sample: &WeatherSample) -> Self {
        Self {
            wind_speed: round_one_decimal(*sample.wind_speed),
            wind_direction: sample.wind_direction.trunc() as i32,
            temperature: round_one_decimal(*sample.temperature),
            humidity: sample.humidity.trunc() as i32,
        }
    }
}
