use thiserror::Error;

/// Reasons a weather observation could not be obtained
///
/// These never reach prediction callers: [`super::WeatherSource::get_weather`]
/// turns every one of them into a degraded reading carrying the fallback sample.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather API key is not configured (set OPENWEATHER_API_KEY)")]
    MissingApiKey,

    #[error("weather request failed: {0}")]
    Transport(String),

    #[error("weather service responded with HTTP {status}")]
    Status { status: u16 },

    #[error("malformed weather payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("weather payload is missing `{0}`")]
    MissingField(&'static str),

    #[error("weather value `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
