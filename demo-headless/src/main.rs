use clap::Parser;
use fire_spread_core::core_types::{Degrees, GeoPoint, Kilometers, MilesPerHour};
use fire_spread_core::{geojson, protection_strategies, Forecast, SimulationConfig, WindConeMode};
use std::path::PathBuf;

/// Fire-perimeter forecast demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "fire-spread-demo")]
#[command(about = "Palisades fire spread forecast demo", long_about = None)]
struct Args {
    /// Simulation days
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=7))]
    days: u32,

    /// Hours per step
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..=12))]
    hours_per_step: u32,

    /// Wind direction in degrees (0 = North, 90 = East)
    #[arg(long, default_value_t = 225, value_parser = clap::value_parser!(u32).range(0..=359))]
    wind_direction: u32,

    /// Wind speed in mph
    #[arg(short, long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(0..=30))]
    wind_speed: u32,

    /// Use the capped variant: growth saturates and three danger zones are
    /// drawn per step
    #[arg(short, long)]
    capped: bool,

    /// Override the growth cap in km (implies --capped behavior for the cap
    /// itself)
    #[arg(long)]
    max_radius: Option<f64>,

    /// Evaluate the downwind cone with wrapped circular distance instead of
    /// the legacy raw-difference test
    #[arg(long)]
    circular_cone: bool,

    /// Fire origin latitude
    #[arg(long, default_value_t = 34.0556)]
    origin_lat: f64,

    /// Fire origin longitude
    #[arg(long, default_value_t = -118.5334)]
    origin_lon: f64,

    /// Protected site latitude
    #[arg(long, default_value_t = 34.0453)]
    target_lat: f64,

    /// Protected site longitude
    #[arg(long, default_value_t = -118.5265)]
    target_lon: f64,

    /// Protected site name used in the status lines
    #[arg(long, default_value = "Palisades Village")]
    site_name: String,

    /// Protected site marker label
    #[arg(long, default_value = "Palisades Village<br>15225 Palisades Village Ln")]
    site_label: String,

    /// Write the overlay JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let origin = GeoPoint::new(args.origin_lat, args.origin_lon);
    let target = GeoPoint::new(args.target_lat, args.target_lon);

    let mut config = if args.capped {
        SimulationConfig::capped(origin, target)
    } else {
        SimulationConfig::unbounded(origin, target)
    }
    .with_days(args.days)
    .with_step_hours(args.hours_per_step)
    .with_wind(
        Degrees::new(f64::from(args.wind_direction)),
        MilesPerHour::new(f64::from(args.wind_speed)),
    );

    if let Some(km) = args.max_radius {
        if !km.is_finite() || km <= 0.0 {
            return Err(format!("max radius must be a positive number of km, got {km}").into());
        }
        config = config.with_max_radius(Some(Kilometers::new(km)));
    }
    if args.circular_cone {
        config = config.with_wind_cone(WindConeMode::Circular);
    }

    let mut forecast = Forecast::build(&config)?;
    forecast.annotations.target_marker.label = args.site_label.clone();

    println!("=== Fire Spread Forecast ===\n");
    println!(
        "Variant: {} | {} features over {} days at {}-hour steps",
        if config.max_radius.is_some() {
            "capped"
        } else {
            "unbounded"
        },
        forecast.features.len(),
        config.total_days,
        config.hours_per_step,
    );
    println!(
        "Distance from fire origin to {}: {:.2} km",
        args.site_name,
        forecast.summary.distance.value()
    );
    println!(
        "Estimated time to reach {}: {:.1} hours at current conditions",
        args.site_name,
        forecast.summary.estimated_arrival.value()
    );
    println!("Current Risk Assessment: {}\n", forecast.summary.risk);

    println!("Protection Strategies:");
    for strategy in protection_strategies() {
        println!("  - {strategy}");
    }
    println!();

    let json = geojson::to_json_string(&forecast)?;
    if let Some(path) = &args.output {
        std::fs::write(path, json)?;
        println!("Wrote overlay document to {}", path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}
