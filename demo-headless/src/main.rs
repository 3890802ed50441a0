use anyhow::Context;
use clap::Parser;
use flood_sim_core::weather::{FixedWeather, OpenWeatherClient, OpenWeatherConfig};
use flood_sim_core::{
    GeoPoint, Meters, PredictionOrchestrator, PredictorConfig, SimulationConfig, WeatherError,
    WeatherPolicy, WeatherSample, WeatherSource, WindConvention,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Flood spread prediction with live weather
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "flood-predict")]
#[command(about = "Predict flood spread zones around an origin point", long_about = None)]
struct Args {
    /// Origin latitude in degrees
    #[arg(long, default_value_t = 24.7120, allow_negative_numbers = true)]
    lat: f64,

    /// Origin longitude in degrees
    #[arg(long, default_value_t = 46.6810, allow_negative_numbers = true)]
    lng: f64,

    /// Display name of the origin
    #[arg(short, long)]
    name: Option<String>,

    /// Prediction horizons in minutes (comma separated)
    #[arg(long, value_delimiter = ',', default_values_t = [10, 30, 60])]
    horizons: Vec<u32>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid side length in cells
    #[arg(long, default_value_t = 50)]
    grid_size: usize,

    /// Cell side length in meters
    #[arg(long, default_value_t = 100.0)]
    cell_size: f64,

    /// Skip the weather service and simulate default weather
    #[arg(long)]
    offline: bool,

    /// Fetch weather once and reuse it for every horizon
    #[arg(long)]
    shared_weather: bool,

    /// Treat the wind direction as "blowing from" (meteorological convention)
    #[arg(long)]
    wind_from: bool,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,
}

/// Stand-in when no API key is configured; every lookup degrades
struct Unconfigured;

impl WeatherSource for Unconfigured {
    fn fetch(&self, _location: GeoPoint) -> Result<WeatherSample, WeatherError> {
        Err(WeatherError::MissingApiKey)
    }
}

fn weather_source(offline: bool) -> Box<dyn WeatherSource> {
    if offline {
        info!("Offline mode: simulating default weather");
        return Box::new(FixedWeather(WeatherSample::FALLBACK));
    }
    match OpenWeatherConfig::from_env() {
        Ok(config) => {
            info!("Using OpenWeatherMap at {}", config.base_url);
            Box::new(OpenWeatherClient::new(config))
        }
        Err(e) => {
            warn!("{e}; predictions will use default weather values");
            Box::new(Unconfigured)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut simulation = SimulationConfig::new(args.grid_size, Meters::new(args.cell_size))
        .context("invalid grid settings")?;
    if args.wind_from {
        simulation.wind_convention = WindConvention::From;
    }

    let config = PredictorConfig {
        origin: GeoPoint::new(args.lat, args.lng),
        location_name: args.name,
        horizons: args.horizons,
        weather_policy: if args.shared_weather {
            WeatherPolicy::Shared
        } else {
            WeatherPolicy::PerHorizon
        },
        seed: args.seed,
        simulation,
    };

    let orchestrator = PredictionOrchestrator::new(config, weather_source(args.offline))
        .context("invalid prediction request")?;
    let report = orchestrator.predict();

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    if report.weather_degraded {
        warn!("Weather service unavailable; report is based on default weather values");
    }
    Ok(())
}
