//! Invariants of the flood spread simulator that must hold for any input
//!
//! Weather is swept over a coarse grid covering the valid input ranges and
//! well beyond the physically plausible ones; simulations are swept over
//! seeds and durations.

use flood_sim_core::grid::project;
use flood_sim_core::solver::{run_rng, spread_probability, SpreadSimulator};
use flood_sim_core::{BoundaryEstimator, Degrees, GeoPoint, SimulationConfig, WeatherSample};

fn weather_sweep() -> Vec<WeatherSample> {
    let mut samples = Vec::new();
    for wind_speed in [0.0, 1.5, 3.0, 12.0, 40.0, 120.0] {
        for wind_direction in [0.0, 45.0, 200.0, 359.9] {
            for temperature in [-40.0, 0.0, 25.0, 35.0, 60.0, 99.0, 140.0] {
                for humidity in [0.0, 30.0, 75.0, 100.0] {
                    samples.push(
                        WeatherSample::new(wind_speed, wind_direction, temperature, humidity)
                            .unwrap(),
                    );
                }
            }
        }
    }
    samples
}

#[test]
fn test_spread_probability_always_clamped() {
    for weather in weather_sweep() {
        let p = spread_probability(0.15, &weather, 0.1, 0.9);
        assert!(
            (0.1..=0.9).contains(&p),
            "spread probability {p} out of range for {weather:?}"
        );
    }
}

#[test]
fn test_origin_flooded_for_every_duration() {
    let simulator = SpreadSimulator::default();
    for minutes in [0, 1, 2, 5, 10, 30, 60] {
        for seed in 0..4 {
            let grid = simulator.run(&WeatherSample::FALLBACK, minutes, Some(seed));
            assert!(
                grid.is_flooded(25, 25),
                "origin dry after {minutes} minutes (seed {seed})"
            );
        }
    }
}

#[test]
fn test_origin_flooded_under_extreme_weather() {
    let simulator = SpreadSimulator::default();
    for weather in weather_sweep().into_iter().step_by(37) {
        let grid = simulator.run(&weather, 5, Some(99));
        assert!(grid.is_flooded(25, 25));
        assert!(grid.flooded_count() >= 1);
    }
}

#[test]
fn test_flooded_count_non_decreasing_with_duration() {
    let simulator = SpreadSimulator::default();
    for seed in [1, 7, 2024] {
        let mut previous = simulator.run(&WeatherSample::FALLBACK, 0, Some(seed));
        for minutes in 1..=60 {
            let grid = simulator.run(&WeatherSample::FALLBACK, minutes, Some(seed));
            assert!(
                grid.is_superset_of(&previous),
                "seed {seed}: {minutes} minutes lost cells flooded at {}",
                minutes - 1
            );
            assert!(grid.flooded_count() >= previous.flooded_count());
            previous = grid;
        }
    }
}

#[test]
fn test_continuing_a_run_only_adds_cells() {
    let simulator = SpreadSimulator::default();
    let weather = WeatherSample::new(9.0, 135.0, 22.0, 85.0).unwrap();
    let params = simulator.parameters(&weather);

    for seed in 0..5 {
        let mut rng = run_rng(Some(seed));
        let mut grid = simulator.run_with_rng(&weather, 20, &mut rng);
        let snapshot = grid.clone();

        SpreadSimulator::advance(&mut grid, &params, 1, &mut rng);
        assert!(grid.is_superset_of(&snapshot), "seed {seed}");
    }
}

#[test]
fn test_continuing_matches_single_longer_run() {
    let simulator = SpreadSimulator::default();
    let weather = WeatherSample::FALLBACK;
    let params = simulator.parameters(&weather);

    let mut rng = run_rng(Some(17));
    let mut grid = simulator.run_with_rng(&weather, 25, &mut rng);
    SpreadSimulator::advance(&mut grid, &params, 15, &mut rng);

    assert_eq!(grid, simulator.run(&weather, 40, Some(17)));
}

#[test]
fn test_same_seed_reproduces_flooded_set() {
    let simulator = SpreadSimulator::default();
    for weather in weather_sweep().into_iter().step_by(53) {
        for seed in [0, 1, u64::MAX] {
            let a = simulator.run(&weather, 45, Some(seed));
            let b = simulator.run(&weather, 45, Some(seed));
            assert_eq!(a, b);
            assert_eq!(
                a.flooded_cells().collect::<Vec<_>>(),
                b.flooded_cells().collect::<Vec<_>>()
            );
        }
    }
}

#[test]
fn test_flooding_stays_within_reach() {
    // One step moves the front at most one cell in any direction
    let simulator = SpreadSimulator::default();
    let storm = WeatherSample::new(30.0, 200.0, 0.0, 100.0).unwrap();
    for minutes in [1, 3, 8, 20] {
        let grid = simulator.run(&storm, minutes, Some(5));
        for (row, col) in grid.flooded_cells() {
            let reach = row.abs_diff(25).max(col.abs_diff(25));
            assert!(reach <= minutes as usize, "({row}, {col}) after {minutes} min");
        }
    }
}

#[test]
fn test_small_and_odd_grids_never_fault() {
    for size in [1, 2, 3, 4, 7] {
        let config = SimulationConfig::new(size, flood_sim_core::Meters::new(25.0)).unwrap();
        let simulator = SpreadSimulator::new(config).unwrap();
        let grid = simulator.run(&WeatherSample::FALLBACK, 200, Some(3));
        assert!(grid.is_flooded(size / 2, size / 2));
        assert!(grid.flooded_count() <= size * size);
    }
}

#[test]
fn test_spread_favours_downhill() {
    // Downhill is 200° (south-south-west): over many seeds the flooded area
    // should extend further south than north of the origin.
    let simulator = SpreadSimulator::default();
    let calm = WeatherSample::new(0.0, 90.0, 20.0, 50.0).unwrap();
    let (mut south, mut north) = (0_usize, 0_usize);
    for seed in 0..20 {
        let grid = simulator.run(&calm, 15, Some(seed));
        for (row, _) in grid.flooded_cells() {
            if row < 25 {
                south += 1;
            } else if row > 25 {
                north += 1;
            }
        }
    }
    assert!(south > north, "south {south} vs north {north}");
}

#[test]
fn test_center_projection_round_trip() {
    for (lat, lng) in [(24.7120, 46.6810), (51.5074, -0.1278), (-45.0, 170.5)] {
        for size in [1, 50, 51, 100] {
            assert_eq!(
                project(lat, lng, size, 100.0, size / 2, size / 2),
                GeoPoint::new(lat, lng)
            );
        }
    }
}

#[test]
fn test_empty_boundary_fallback() {
    let origin = GeoPoint::new(24.7120, 46.6810);
    let ellipse = BoundaryEstimator::new(origin, Degrees::new(200.0)).estimate(&[]);
    assert_eq!(ellipse.center, [24.7120, 46.6810]);
    assert_eq!(ellipse.radius_km, 0.3);
    assert_eq!(ellipse.major_axis_km, 0.4);
    assert_eq!(ellipse.minor_axis_km, 0.2);
    assert_eq!(ellipse.rotation_deg, 200.0);
}
