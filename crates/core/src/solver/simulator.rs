//! Cellular-automaton flood spread
//!
//! Evolves a [`FloodGrid`] one minute per step with a synchronous update:
//! every step reads the current grid and writes into a second buffer, then
//! the two are swapped. A cell flooded during a step therefore never acts as
//! a source in that same step, and once flooded a cell stays flooded.
//!
//! Randomness comes from an explicit RNG. Seeding it makes a run exactly
//! reproducible; for a fixed seed, running `d + 1` minutes consumes the same
//! draws as running `d` minutes and then one more, so longer horizons are
//! supersets of shorter ones.

use super::config::{ConfigError, SimulationConfig};
use super::spread::{SpreadParameters, NOISE_MAX, NOISE_MIN};
use crate::core_types::WeatherSample;
use crate::grid::FloodGrid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// RNG for one run: seeded when a seed is given, OS entropy otherwise
#[must_use]
pub fn run_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Advance the grid by one minute.
///
/// Reads only from `current` and writes the new state into `next`, which is
/// first overwritten with `current`. Neighbours outside the grid or already
/// flooded are skipped without drawing. For every in-grid dry neighbour of a
/// flooded cell two draws are taken in order: the roughness noise, then the
/// spread roll.
pub fn step<R: Rng>(
    current: &FloodGrid,
    next: &mut FloodGrid,
    params: &SpreadParameters,
    rng: &mut R,
) {
    next.copy_from(current);

    for (row, col) in current.flooded_cells() {
        for (offset, (n_row, n_col)) in current.neighbors(row, col) {
            if current.is_flooded(n_row, n_col) {
                continue;
            }

            let noise = rng.random_range(NOISE_MIN..=NOISE_MAX);
            let probability = params.spread_probability * params.direction_factor(offset) * noise;

            if rng.random::<f64>() < probability {
                next.flood(n_row, n_col);
            }
        }
    }
}

/// Flood spread simulator
///
/// Stateless apart from its configuration; every run owns its grids and its
/// RNG, so one simulator can serve concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct SpreadSimulator {
    config: SimulationConfig,
}

impl SpreadSimulator {
    /// # Errors
    ///
    /// See [`SimulationConfig::validate`]. A validated config guarantees
    /// every run has at least the origin cell to flood.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Parameters a run under `weather` would use
    #[must_use]
    pub fn parameters(&self, weather: &WeatherSample) -> SpreadParameters {
        SpreadParameters::new(&self.config, weather)
    }

    /// Simulate `duration_minutes` of spread from the grid center.
    ///
    /// With `seed = Some(..)` the result is fully determined by
    /// `(weather, duration_minutes, seed)`.
    #[must_use]
    pub fn run(&self, weather: &WeatherSample, duration_minutes: u32, seed: Option<u64>) -> FloodGrid {
        self.run_with_rng(weather, duration_minutes, &mut run_rng(seed))
    }

    /// [`SpreadSimulator::run`] drawing from a caller-supplied RNG
    pub fn run_with_rng<R: Rng>(
        &self,
        weather: &WeatherSample,
        duration_minutes: u32,
        rng: &mut R,
    ) -> FloodGrid {
        let params = self.parameters(weather);
        debug!(
            "Flood spread: {:.2}% per minute over {} minutes on a {}x{} grid",
            params.spread_probability * 100.0,
            duration_minutes,
            self.config.grid.size,
            self.config.grid.size
        );

        let mut grid = FloodGrid::with_origin(self.config.grid.size);
        Self::advance(&mut grid, &params, duration_minutes, rng);
        grid
    }

    /// Continue an existing run for `minutes` more steps
    pub fn advance<R: Rng>(
        grid: &mut FloodGrid,
        params: &SpreadParameters,
        minutes: u32,
        rng: &mut R,
    ) {
        if minutes == 0 {
            return;
        }
        // Ping-pong buffers: read from one, write to the other, then swap
        let mut back = FloodGrid::new(grid.size());
        for _ in 0..minutes {
            step(grid, &mut back, params, rng);
            std::mem::swap(grid, &mut back);
        }
    }
}
