//! Flood spread solver
//!
//! A cellular automaton over a square grid centred on the flood origin. The
//! weather sets a base spread probability; the fixed terrain slope and the
//! wind bias it per neighbour direction; a roughness noise term perturbs every
//! attempt.
//!
//! # Example
//!
//! ```
//! use flood_sim_core::solver::SpreadSimulator;
//! use flood_sim_core::WeatherSample;
//!
//! let simulator = SpreadSimulator::default();
//! let grid = simulator.run(&WeatherSample::FALLBACK, 30, Some(42));
//! assert!(grid.is_flooded(25, 25));
//! assert_eq!(grid, simulator.run(&WeatherSample::FALLBACK, 30, Some(42)));
//! ```

mod config;
mod simulator;
pub mod spread;

// Re-exports
pub use config::{ConfigError, SimulationConfig, WindConvention};
pub use simulator::{run_rng, step, SpreadSimulator};
pub use spread::{spread_probability, SpreadParameters};
