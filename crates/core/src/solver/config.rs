//! Simulation configuration
//!
//! Defaults reproduce the demo scenario: a 50×50 grid of 100 m cells, a base
//! spread rate of 15% per neighbour per minute and terrain sloping down
//! towards 200° (south-south-west).

use crate::core_types::{Degrees, Meters};
use crate::grid::GridConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a wind direction reading is interpreted
///
/// Weather services report the meteorological "blowing from" direction.
/// `Toward` compares that raw angle directly with neighbour bearings, which
/// treats it as "blowing toward".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindConvention {
    /// Reading is the direction the wind pushes water towards
    #[default]
    Toward,
    /// Reading is the direction the wind comes from (rotated 180° before use)
    From,
}

impl WindConvention {
    /// Bearing the wind pushes water towards
    #[must_use]
    pub fn push_direction(self, reading: Degrees) -> Degrees {
        match self {
            Self::Toward => reading,
            Self::From => reading.reversed(),
        }
    }
}

/// Invalid simulation or prediction settings
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 1 cell")]
    ZeroGridSize,

    #[error("cell size must be positive and finite, got {0} m")]
    InvalidCellSize(f64),

    #[error("base spread rate must be non-negative and finite, got {0}")]
    InvalidSpreadRate(f64),

    #[error("probability bounds must satisfy 0 <= min <= max <= 1, got [{min}, {max}]")]
    InvalidProbabilityRange { min: f64, max: f64 },

    #[error("flood origin ({lat}, {lng}) is not a valid coordinate")]
    InvalidOrigin { lat: f64, lng: f64 },

    #[error("horizon {0}min requested more than once")]
    DuplicateHorizon(u32),
}

/// Tunables of one spread simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub grid: GridConfig,
    /// Per-neighbour, per-minute probability before weather factors
    pub base_spread_rate: f64,
    /// Fixed compass bearing of the assumed terrain slope
    pub downhill_angle: Degrees,
    /// Lower clamp of the weather-derived spread probability
    pub min_probability: f64,
    /// Upper clamp of the weather-derived spread probability
    pub max_probability: f64,
    pub wind_convention: WindConvention,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            base_spread_rate: 0.15,
            downhill_angle: Degrees::new(200.0),
            min_probability: 0.1,
            max_probability: 0.9,
            wind_convention: WindConvention::Toward,
        }
    }
}

impl SimulationConfig {
    /// Default settings on a custom grid
    ///
    /// # Errors
    ///
    /// See [`SimulationConfig::validate`].
    pub fn new(grid_size: usize, cell_size: Meters) -> Result<Self, ConfigError> {
        let config = Self {
            grid: GridConfig {
                size: grid_size,
                cell_size,
            },
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the settings can drive a simulation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        let cell = *self.grid.cell_size;
        if !(cell.is_finite() && cell > 0.0) {
            return Err(ConfigError::InvalidCellSize(cell));
        }
        if !(self.base_spread_rate.is_finite() && self.base_spread_rate >= 0.0) {
            return Err(ConfigError::InvalidSpreadRate(self.base_spread_rate));
        }
        let (min, max) = (self.min_probability, self.max_probability);
        if !((0.0..=max).contains(&min) && max <= 1.0) {
            return Err(ConfigError::InvalidProbabilityRange { min, max });
        }
        Ok(())
    }
}
