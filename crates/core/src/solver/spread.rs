//! Spread probability model
//!
//! Each minute a flooded cell tries to flood each dry neighbour with
//!
//! ```text
//! p = spread_probability × direction_factor × noise
//! ```
//!
//! where `spread_probability` comes from the weather (clamped), the
//! direction factor combines terrain slope and wind push for the neighbour's
//! bearing, and `noise` is a uniform terrain-roughness multiplier.

use super::config::SimulationConfig;
use crate::core_types::{Degrees, WeatherSample};
use serde::{Deserialize, Serialize};

/// Terrain roughness multiplier range (±30%)
pub const NOISE_MIN: f64 = 0.7;
pub const NOISE_MAX: f64 = 1.3;

/// Neighbour lies within 60° of downhill
pub const DOWNHILL_FACTOR: f64 = 3.0;
/// Neighbour lies 60°-120° from downhill
pub const LATERAL_FACTOR: f64 = 1.0;
/// Neighbour lies more than 120° from downhill
pub const UPHILL_FACTOR: f64 = 0.3;

/// Neighbour lies within 45° of the wind push direction
pub const WIND_ASSIST: f64 = 1.2;
/// Any other neighbour
pub const WIND_RESIST: f64 = 0.9;

/// Weather-derived base spread probability.
///
/// ```text
/// wind_factor     = 1 + wind_speed / 20
/// rainfall_factor = 1 + humidity / 50
/// drainage_factor = 1 - temperature / 100
/// ```
///
/// The product with `base_rate` is clamped to `[min, max]`; a NaN product
/// resolves to `min`.
#[must_use]
pub fn spread_probability(
    base_rate: f64,
    weather: &WeatherSample,
    min: f64,
    max: f64,
) -> f64 {
    let wind_factor = 1.0 + *weather.wind_speed / 20.0;
    let rainfall_factor = 1.0 + *weather.humidity / 50.0;
    let drainage_factor = 1.0 - *weather.temperature / 100.0;

    (base_rate * wind_factor * rainfall_factor * drainage_factor)
        .max(min)
        .min(max)
}

/// Compass bearing from a cell to its neighbour at `(d_row, d_col)`
///
/// Rows grow northwards and columns eastwards, so `(1, 0)` is 0° and `(0, 1)`
/// is 90°. Result is in `(-180, 180]`.
#[must_use]
pub fn neighbor_bearing(d_row: isize, d_col: isize) -> Degrees {
    Degrees::new((d_col as f64).atan2(d_row as f64).to_degrees())
}

/// Slope multiplier for flow along `bearing`
#[must_use]
pub fn terrain_factor(bearing: Degrees, downhill: Degrees) -> f64 {
    let off_slope = *bearing.angular_distance(downhill);
    if off_slope < 60.0 {
        DOWNHILL_FACTOR
    } else if off_slope < 120.0 {
        LATERAL_FACTOR
    } else {
        UPHILL_FACTOR
    }
}

/// Wind multiplier for flow along `bearing`
#[must_use]
pub fn wind_bias(bearing: Degrees, wind_push: Degrees) -> f64 {
    if *bearing.angular_distance(wind_push) < 45.0 {
        WIND_ASSIST
    } else {
        WIND_RESIST
    }
}

/// Immutable per-run parameters
///
/// Direction factors only depend on the neighbour offset, so they are
/// evaluated once per run into a 3×3 table indexed by `[d_row + 1][d_col + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadParameters {
    pub base_spread_rate: f64,
    pub downhill_angle: Degrees,
    /// Clamped weather-derived probability
    pub spread_probability: f64,
    direction_factors: [[f64; 3]; 3],
}

impl SpreadParameters {
    #[must_use]
    pub fn new(config: &SimulationConfig, weather: &WeatherSample) -> Self {
        let probability = spread_probability(
            config.base_spread_rate,
            weather,
            config.min_probability,
            config.max_probability,
        );
        let wind_push = config.wind_convention.push_direction(weather.wind_direction);

        let mut direction_factors = [[0.0; 3]; 3];
        for d_row in -1_isize..=1 {
            for d_col in -1_isize..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let bearing = neighbor_bearing(d_row, d_col);
                direction_factors[(d_row + 1) as usize][(d_col + 1) as usize] =
                    terrain_factor(bearing, config.downhill_angle) * wind_bias(bearing, wind_push);
            }
        }

        Self {
            base_spread_rate: config.base_spread_rate,
            downhill_angle: config.downhill_angle,
            spread_probability: probability,
            direction_factors,
        }
    }

    /// Combined terrain and wind multiplier towards the neighbour at `offset`
    #[inline]
    #[must_use]
    pub fn direction_factor(&self, (d_row, d_col): (isize, isize)) -> f64 {
        self.direction_factors[(d_row + 1) as usize][(d_col + 1) as usize]
    }
}
