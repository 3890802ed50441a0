//! Client for the `OpenWeatherMap` current-weather API
//!
//! Requests `GET {base_url}?lat=..&lon=..&appid=..&units=metric` with a
//! bounded timeout. Payload parsing is kept separate from transport so it can
//! be exercised without the network.

use super::WeatherError;
use crate::core_types::WeatherSample;
use serde::Deserialize;
use std::time::Duration;

/// Public current-weather endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for [`OpenWeatherClient`]
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `OPENWEATHER_API_KEY` (required) and `OPENWEATHER_BASE_URL`
    /// (optional) from the environment.
    ///
    /// # Errors
    ///
    /// [`WeatherError::MissingApiKey`] when the key is unset or blank.
    pub fn from_env() -> Result<Self, WeatherError> {
        let api_key = std::env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(WeatherError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("OPENWEATHER_BASE_URL") {
            config.base_url = url;
        }
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    wind: Option<Wind>,
    main: Option<Main>,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: Option<f64>,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Main {
    temp: Option<f64>,
    humidity: Option<f64>,
}

/// Parse a current-weather response body.
///
/// Every one of `wind.speed`, `wind.deg`, `main.temp` and `main.humidity`
/// must be present; a partial payload is treated as a failed lookup.
///
/// # Errors
///
/// [`WeatherError::Malformed`] for invalid JSON, [`WeatherError::MissingField`]
/// for an absent reading and [`WeatherError::OutOfRange`] for an invalid one.
pub fn parse_current_weather(body: &str) -> Result<WeatherSample, WeatherError> {
    let payload: CurrentWeather = serde_json::from_str(body)?;

    let wind = payload.wind.ok_or(WeatherError::MissingField("wind"))?;
    let main = payload.main.ok_or(WeatherError::MissingField("main"))?;

    WeatherSample::new(
        wind.speed.ok_or(WeatherError::MissingField("wind.speed"))?,
        wind.deg.ok_or(WeatherError::MissingField("wind.deg"))?,
        main.temp.ok_or(WeatherError::MissingField("main.temp"))?,
        main.humidity.ok_or(WeatherError::MissingField("main.humidity"))?,
    )
}

#[cfg(feature = "openweather")]
pub use client::OpenWeatherClient;

#[cfg(feature = "openweather")]
mod client {
    use super::{parse_current_weather, OpenWeatherConfig};
    use crate::core_types::{GeoPoint, WeatherSample};
    use crate::weather::{WeatherError, WeatherSource};
    use tracing::debug;

    /// Blocking HTTP weather provider
    pub struct OpenWeatherClient {
        config: OpenWeatherConfig,
        agent: ureq::Agent,
    }

    impl OpenWeatherClient {
        #[must_use]
        pub fn new(config: OpenWeatherConfig) -> Self {
            let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
            Self { config, agent }
        }

        #[must_use]
        pub fn config(&self) -> &OpenWeatherConfig {
            &self.config
        }
    }

    impl WeatherSource for OpenWeatherClient {
        fn fetch(&self, location: GeoPoint) -> Result<WeatherSample, WeatherError> {
            if self.config.api_key.trim().is_empty() {
                return Err(WeatherError::MissingApiKey);
            }

            debug!(
                "Requesting weather for ({:.4}, {:.4}) from {}",
                location.lat, location.lng, self.config.base_url
            );
            let response = self
                .agent
                .get(&self.config.base_url)
                .query("lat", &location.lat.to_string())
                .query("lon", &location.lng.to_string())
                .query("appid", &self.config.api_key)
                .query("units", "metric")
                .call();

            match response {
                Ok(response) => {
                    let body = response
                        .into_string()
                        .map_err(|e| WeatherError::Transport(e.to_string()))?;
                    parse_current_weather(&body)
                }
                Err(ureq::Error::Status(status, _)) => Err(WeatherError::Status { status }),
                Err(e) => Err(WeatherError::Transport(e.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIYADH_PAYLOAD: &str = r#"{
        "coord": {"lon": 46.681, "lat": 24.712},
        "weather": [{"id": 800, "main": "Clear"}],
        "main": {"temp": 41.3, "feels_like": 39.0, "pressure": 1004, "humidity": 9},
        "wind": {"speed": 5.66, "deg": 330, "gust": 8.1},
        "name": "Riyadh"
    }"#;

    #[test]
    fn test_parse_full_payload() {
        let sample = parse_current_weather(RIYADH_PAYLOAD).unwrap();
        assert_eq!(*sample.wind_speed, 5.66);
        assert_eq!(*sample.wind_direction, 330.0);
        assert_eq!(*sample.temperature, 41.3);
        assert_eq!(*sample.humidity, 9.0);
    }

    #[test]
    fn test_parse_missing_field() {
        let body = r#"{"main": {"temp": 20.0, "humidity": 50}, "wind": {"speed": 2.0}}"#;
        assert!(matches!(
            parse_current_weather(body),
            Err(WeatherError::MissingField("wind.deg"))
        ));

        let body = r#"{"wind": {"speed": 2.0, "deg": 10}}"#;
        assert!(matches!(
            parse_current_weather(body),
            Err(WeatherError::MissingField("main"))
        ));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_current_weather("<html>502 Bad Gateway</html>"),
            Err(WeatherError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_out_of_range() {
        let body = r#"{"main": {"temp": 20.0, "humidity": 140}, "wind": {"speed": 2.0, "deg": 10}}"#;
        assert!(matches!(
            parse_current_weather(body),
            Err(WeatherError::OutOfRange { field: "humidity", .. })
        ));
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenWeatherConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[cfg(feature = "openweather")]
    #[test]
    fn test_blank_key_fails_without_request() {
        use crate::core_types::GeoPoint;
        use crate::weather::WeatherSource;

        let client = OpenWeatherClient::new(OpenWeatherConfig::new("  "));
        let reading = client.get_weather(GeoPoint::new(24.712, 46.681));
        assert!(reading.is_degraded());
        assert_eq!(reading.sample(), WeatherSample::FALLBACK);
    }
}
