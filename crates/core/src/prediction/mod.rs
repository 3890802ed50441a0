//! Multi-horizon flood prediction
//!
//! For every requested horizon the orchestrator obtains a weather sample,
//! runs the spread simulator, projects the flooded cells onto the map and
//! summarizes them as an ellipse. Horizons share no mutable state and are
//! evaluated in parallel; results keep the requested order.
//!
//! # Example
//!
//! ```
//! use flood_sim_core::prediction::{PredictionOrchestrator, PredictorConfig};
//! use flood_sim_core::weather::FixedWeather;
//! use flood_sim_core::WeatherSample;
//!
//! let config = PredictorConfig {
//!     horizons: vec![0, 10],
//!     seed: Some(7),
//!     ..PredictorConfig::default()
//! };
//! let orchestrator =
//!     PredictionOrchestrator::new(config, FixedWeather(WeatherSample::FALLBACK)).unwrap();
//! let report = orchestrator.predict();
//! assert_eq!(report.predictions.horizon(0).unwrap().zone_count, 1);
//! ```

pub mod report;

pub use report::{
    horizon_label, FloodLocation, HorizonPrediction, HorizonPredictions, PredictionReport,
};

use crate::boundary::BoundaryEstimator;
use crate::core_types::{GeoPoint, WeatherSample};
use crate::grid::CoordinateProjector;
use crate::solver::{ConfigError, SimulationConfig, SpreadSimulator};
use crate::weather::{WeatherReading, WeatherSource};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// When weather is fetched during a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherPolicy {
    /// One fetch for the summary plus one fresh fetch per horizon
    #[default]
    PerHorizon,
    /// One fetch reused by the summary and every horizon
    Shared,
}

/// Settings of a prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Flood origin, projected onto the grid center
    pub origin: GeoPoint,
    /// Display name of the origin
    pub location_name: Option<String>,
    /// Horizons in minutes, in output order
    pub horizons: Vec<u32>,
    pub weather_policy: WeatherPolicy,
    /// Base seed; every horizon starts its own RNG from it
    pub seed: Option<u64>,
    pub simulation: SimulationConfig,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            origin: GeoPoint::new(24.7120, 46.6810),
            location_name: None,
            horizons: vec![10, 30, 60],
            weather_policy: WeatherPolicy::PerHorizon,
            seed: None,
            simulation: SimulationConfig::default(),
        }
    }
}

impl PredictorConfig {
    /// Check the request can be served.
    ///
    /// # Errors
    ///
    /// Simulation settings errors, an origin outside the valid lat/lng ranges,
    /// or a horizon listed twice (labels would collide).
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;

        let GeoPoint { lat, lng } = self.origin;
        if !((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)) {
            return Err(ConfigError::InvalidOrigin { lat, lng });
        }

        for (i, minutes) in self.horizons.iter().enumerate() {
            if self.horizons[..i].contains(minutes) {
                return Err(ConfigError::DuplicateHorizon(*minutes));
            }
        }
        Ok(())
    }
}

/// Runs every horizon of a prediction request
pub struct PredictionOrchestrator<W> {
    config: PredictorConfig,
    weather: W,
    simulator: SpreadSimulator,
    projector: CoordinateProjector,
    estimator: BoundaryEstimator,
}

impl<W: WeatherSource> PredictionOrchestrator<W> {
    /// # Errors
    ///
    /// See [`PredictorConfig::validate`].
    pub fn new(config: PredictorConfig, weather: W) -> Result<Self, ConfigError> {
        config.validate()?;
        let simulation = config.simulation;
        Ok(Self {
            projector: CoordinateProjector::new(config.origin, &simulation.grid),
            estimator: BoundaryEstimator::new(config.origin, simulation.downhill_angle),
            simulator: SpreadSimulator::new(simulation)?,
            weather,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Simulate, project and summarize one horizon under a given sample
    #[must_use]
    pub fn predict_horizon(&self, minutes: u32, weather: &WeatherSample) -> HorizonPrediction {
        let grid = self.simulator.run(weather, minutes, self.config.seed);
        let zones = self.projector.project_all(grid.flooded_cells());
        let boundary = self.estimator.estimate(&zones);

        HorizonPrediction {
            minutes,
            zone_count: zones.len(),
            zones,
            boundary,
            weather_degraded: false,
        }
    }

    /// Answer the full request
    #[must_use]
    pub fn predict(&self) -> PredictionReport {
        let origin = self.config.origin;
        info!(
            "Predicting flood spread at ({:.4}, {:.4}) for {:?} minutes",
            origin.lat, origin.lng, self.config.horizons
        );

        let summary_reading = self.weather.get_weather(origin);
        let summary_sample = summary_reading.sample();
        info!(
            "Weather: wind {:.1} at {:.0}, {:.1}, humidity {:.0}",
            summary_sample.wind_speed,
            summary_sample.wind_direction,
            summary_sample.temperature,
            summary_sample.humidity
        );

        let predictions: Vec<HorizonPrediction> = self
            .config
            .horizons
            .par_iter()
            .map(|&minutes| {
                let reading = match self.config.weather_policy {
                    WeatherPolicy::PerHorizon => self.weather.get_weather(origin),
                    WeatherPolicy::Shared => summary_reading.clone(),
                };
                self.predict_with_reading(minutes, &reading)
            })
            .collect();

        let weather_degraded =
            summary_reading.is_degraded() || predictions.iter().any(|p| p.weather_degraded);

        info!(
            "Prediction complete: {}",
            predictions
                .iter()
                .map(|p| format!("{}={}", horizon_label(p.minutes), p.zone_count))
                .collect::<Vec<_>>()
                .join(", ")
        );

        PredictionReport {
            flood_location: FloodLocation {
                lat: origin.lat,
                lng: origin.lng,
                name: self.config.location_name.clone(),
            },
            weather: summary_sample.summary(),
            predictions: HorizonPredictions(predictions),
            weather_degraded,
        }
    }

    fn predict_with_reading(&self, minutes: u32, reading: &WeatherReading) -> HorizonPrediction {
        let sample = reading.sample();
        let mut prediction = self.predict_horizon(minutes, &sample);
        prediction.weather_degraded = reading.is_degraded();
        info!(
            "{}: {} flooded cells at {:.2}% spread probability per minute",
            horizon_label(minutes),
            prediction.zone_count,
            self.simulator.parameters(&sample).spread_probability * 100.0
        );
        prediction
    }
}
