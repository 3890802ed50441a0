//! Flood Spread Prediction Core Library
//!
//! Predicts which ground floods around an origin point over the next minutes
//! using a cellular automaton driven by live weather. Results are projected to
//! latitude/longitude and summarized as ellipses for map rendering.
//!
//! ## Pipeline
//!
//! For every requested horizon:
//! - fetch a weather sample (falling back to fixed defaults on failure)
//! - evolve a 50×50 grid of 100 m cells minute by minute
//! - project flooded cells around the origin (flat-earth approximation)
//! - reduce them to a boundary ellipse oriented along the terrain slope

// Core types and utilities
pub mod core_types;

// Weather providers
pub mod weather;

// Simulation modules
pub mod boundary;
pub mod grid;
pub mod prediction;
pub mod solver;

// Re-export core types
pub use core_types::{Celsius, Degrees, Kilometers, Meters, MetersPerSecond, Percent};
pub use core_types::{FloodCell, GeoPoint, WeatherSample, WeatherSummary};

// Re-export simulation types
pub use boundary::{BoundaryEllipse, BoundaryEstimator};
pub use grid::{CoordinateProjector, FloodGrid, GridCell, GridConfig};
pub use prediction::{PredictionOrchestrator, PredictionReport, PredictorConfig, WeatherPolicy};
pub use solver::{ConfigError, SimulationConfig, SpreadParameters, SpreadSimulator, WindConvention};
pub use weather::{FixedWeather, WeatherError, WeatherReading, WeatherSource};
