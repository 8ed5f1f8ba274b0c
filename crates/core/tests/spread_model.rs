//! Spread-model behavior over the public API: growth law, cap saturation,
//! ignition seeding and wind anisotropy.

use approx::assert_relative_eq;
use fire_spread_core::core_types::{Degrees, GeoPoint, Hours, MilesPerHour};
use fire_spread_core::spread::{anisotropy_factor, radius_profile, zone_radius};
use fire_spread_core::{Forecast, SimulationConfig, WindConeMode};

const ORIGIN: GeoPoint = GeoPoint::new(34.0556, -118.5334);
const VILLAGE: GeoPoint = GeoPoint::new(34.0453, -118.5265);

#[test]
fn uncapped_radius_strictly_increases() {
    let config = SimulationConfig::unbounded(ORIGIN, VILLAGE);

    let mut previous = radius_profile(Hours::new(0.0), &config).radius;
    for elapsed in 1..=168 {
        let radius = radius_profile(Hours::new(f64::from(elapsed)), &config).radius;
        assert!(
            radius > previous,
            "radius must strictly increase: {radius} after {previous} at {elapsed} h"
        );
        previous = radius;
    }
}

#[test]
fn capped_radius_is_nondecreasing_and_saturates() {
    let config = SimulationConfig::capped(ORIGIN, VILLAGE);

    let mut previous = radius_profile(Hours::new(0.0), &config).radius;
    for elapsed in 1..=168 {
        let radius = radius_profile(Hours::new(f64::from(elapsed)), &config).radius;
        assert!(radius >= previous, "capped radius must never shrink");
        previous = radius;
    }

    // 3.0 km cap / 0.2 km/h saturates at 15 elapsed hours
    for elapsed in [15.0, 24.0, 96.0, 168.0] {
        let radius = radius_profile(Hours::new(elapsed), &config).radius;
        assert_relative_eq!(radius.value(), 3.0, epsilon = 1e-12);
    }
}

#[test]
fn ignition_seed_overrides_general_formula() {
    let config = SimulationConfig::unbounded(ORIGIN, VILLAGE);

    // The general formula would give 0 at t=0; the seed guarantees a
    // visible polygon instead.
    let seed = radius_profile(Hours::new(0.0), &config);
    assert_relative_eq!(seed.radius.value(), 0.05, epsilon = 1e-12);
    assert_eq!(seed.wind_effect, 0.0);

    let first_real = radius_profile(Hours::new(1.0), &config);
    assert_relative_eq!(first_real.radius.value(), 0.2, epsilon = 1e-12);
}

#[test]
fn elongation_keeps_growing_after_saturation() {
    let config = SimulationConfig::capped(ORIGIN, VILLAGE);

    let saturated = radius_profile(Hours::new(15.0), &config);
    let later = radius_profile(Hours::new(90.0), &config);

    assert_eq!(saturated.radius, later.radius);
    assert!(later.wind_effect > saturated.wind_effect);

    // The downwind reach therefore still grows while the base radius is
    // pinned at the cap.
    let wind = config.wind_direction;
    let reach_at = |profile: fire_spread_core::RadiusProfile| {
        profile.radius.value()
            * anisotropy_factor(wind, wind, profile.wind_effect, config.wind_cone)
    };
    assert!(reach_at(later) > reach_at(saturated));
}

#[test]
fn zone_radii_partition_the_base_radius() {
    let config = SimulationConfig::capped(ORIGIN, VILLAGE);
    let profile = radius_profile(Hours::new(30.0), &config);

    let rings: Vec<_> = (0..config.zone_count)
        .map(|ring| zone_radius(profile.radius, ring, config.zone_count))
        .collect();

    // Innermost ring is a third of the base, outermost the full base.
    assert_relative_eq!(rings[0].value(), profile.radius.value() / 3.0, epsilon = 1e-12);
    assert_relative_eq!(rings[2].value(), profile.radius.value(), epsilon = 1e-12);
    assert!(rings[0] < rings[1] && rings[1] < rings[2]);
}

#[test]
fn zero_wind_produces_regular_perimeters() {
    let config = SimulationConfig::unbounded(ORIGIN, VILLAGE)
        .with_wind(Degrees::new(225.0), MilesPerHour::new(0.0));
    let forecast = Forecast::build(&config).expect("valid config");

    let lat_cos = ORIGIN.lat.to_radians().cos();
    for feature in &forecast.features {
        let reaches: Vec<f64> = feature
            .polygon
            .vertices()
            .iter()
            .map(|&(lon, lat)| {
                let dx = (lon - ORIGIN.lon) * fire_spread_core::core_types::KM_PER_DEGREE * lat_cos;
                let dy = (lat - ORIGIN.lat) * fire_spread_core::core_types::KM_PER_DEGREE;
                dx.hypot(dy)
            })
            .collect();

        let first = reaches[0];
        for reach in reaches {
            assert_relative_eq!(reach, first, epsilon = 1e-9);
        }
    }
}

#[test]
fn legacy_and_circular_cones_agree_for_valid_directions() {
    for wind_deg in 0..360 {
        let wind = Degrees::new(f64::from(wind_deg));
        for sample in 0..36 {
            let bearing = Degrees::new(f64::from(sample) * 10.0);
            assert_eq!(
                anisotropy_factor(bearing, wind, 0.45, WindConeMode::Legacy),
                anisotropy_factor(bearing, wind, 0.45, WindConeMode::Circular),
            );
        }
    }
}
