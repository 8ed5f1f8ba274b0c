//! The spread model: pure functions from elapsed time and wind forcing to a
//! radius profile and a per-bearing anisotropy factor.
//!
//! The model is deliberately first-order. Growth is linear in elapsed hours
//! with no deceleration or fuel-exhaustion term; the only saturation is the
//! external cap, and the cap applies to the isotropic base radius alone —
//! downwind elongation keeps scaling with elapsed time after the base radius
//! saturates. That asymmetry matches the shipped behavior of the capped
//! variant and is part of the contract, not an oversight to correct.

use crate::config::{SimulationConfig, WindConeMode, IGNITION_RADIUS};
use crate::core_types::{Degrees, Hours, Kilometers};
use serde::{Deserialize, Serialize};

/// Elongation accumulated per elapsed hour per unit of wind factor
const WIND_EFFECT_RATE: f64 = 0.01;

/// Half-width of the downwind elongation cone, degrees
const CONE_HALF_WIDTH: f64 = 90.0;

/// Radius and elongation magnitude for one time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusProfile {
    /// Isotropic base radius, clamped to the cap when one is configured
    pub radius: Kilometers,
    /// Unitless downwind elongation magnitude; never clamped
    pub wind_effect: f64,
}

/// Evaluate the spread model at `elapsed` hours since ignition.
///
/// `elapsed == 0` is a hard special case returning the fixed ignition seed
/// radius with no elongation, guaranteeing a visible polygon at the first
/// step rather than a degenerate point.
#[must_use]
pub fn radius_profile(elapsed: Hours, config: &SimulationConfig) -> RadiusProfile {
    if elapsed.value() == 0.0 {
        return RadiusProfile {
            radius: IGNITION_RADIUS,
            wind_effect: 0.0,
        };
    }

    let mut radius = config.base_spread_rate * elapsed;
    let wind_effect = config.wind_factor() * elapsed.value() * WIND_EFFECT_RATE;

    // Cap the base radius only; elongation continues to grow past saturation.
    if let Some(max_radius) = config.max_radius {
        radius = radius.min(max_radius);
    }

    RadiusProfile {
        radius,
        wind_effect,
    }
}

/// Radius of severity ring `ring` (0 = most severe, innermost).
///
/// Ring `ring` spans `(ring + 1) / zone_count` of the base radius: ring 0 is
/// the innermost third (for three zones) and ring `zone_count - 1` the
/// full-radius outer perimeter. Emitting rings in descending index order
/// therefore draws outer rings first.
#[must_use]
pub fn zone_radius(base: Kilometers, ring: usize, zone_count: usize) -> Kilometers {
    let fraction = (ring + 1) as f64 / zone_count as f64;
    base * fraction
}

/// Per-bearing anisotropy multiplier.
///
/// Bearings inside the downwind cone are stretched by `1 + wind_effect`;
/// all others stay at the isotropic radius. `Legacy` mode evaluates the
/// original raw-difference membership test; `Circular` evaluates the wrapped
/// angular distance. See [`WindConeMode`] for why both exist.
#[must_use]
pub fn anisotropy_factor(
    bearing: Degrees,
    wind_direction: Degrees,
    wind_effect: f64,
    mode: WindConeMode,
) -> f64 {
    let downwind = match mode {
        WindConeMode::Legacy => {
            let diff = (bearing.value() - wind_direction.value()).abs();
            diff < CONE_HALF_WIDTH || diff > 360.0 - CONE_HALF_WIDTH
        }
        WindConeMode::Circular => {
            let wrapped = (bearing.value() - wind_direction.value()).rem_euclid(360.0);
            wrapped.min(360.0 - wrapped) < CONE_HALF_WIDTH
        }
    };

    if downwind {
        1.0 + wind_effect
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::GeoPoint;
    use approx::assert_relative_eq;

    fn capped_config() -> SimulationConfig {
        SimulationConfig::capped(
            GeoPoint::new(34.0556, -118.5334),
            GeoPoint::new(34.0453, -118.5265),
        )
    }

    fn unbounded_config() -> SimulationConfig {
        SimulationConfig::unbounded(
            GeoPoint::new(34.0556, -118.5334),
            GeoPoint::new(34.0453, -118.5265),
        )
    }

    #[test]
    fn test_ignition_seed() {
        let profile = radius_profile(Hours::new(0.0), &unbounded_config());
        assert_eq!(profile.radius, Kilometers::new(0.05));
        assert_eq!(profile.wind_effect, 0.0);
    }

    #[test]
    fn test_linear_growth() {
        let config = unbounded_config();
        let at_6 = radius_profile(Hours::new(6.0), &config);
        let at_30 = radius_profile(Hours::new(30.0), &config);
        assert_relative_eq!(at_6.radius.value(), 1.2, epsilon = 1e-12);
        assert_relative_eq!(at_30.radius.value(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wind_effect_formula() {
        // wind 15 mph -> factor 1.5; effect = 1.5 * 30 * 0.01
        let profile = radius_profile(Hours::new(30.0), &unbounded_config());
        assert_relative_eq!(profile.wind_effect, 0.45, epsilon = 1e-12);
    }

    #[test]
    fn test_cap_clamps_base_radius() {
        let config = capped_config();
        // Saturation at 3.0 / 0.2 = 15 elapsed hours
        let before = radius_profile(Hours::new(12.0), &config);
        let at = radius_profile(Hours::new(15.0), &config);
        let after = radius_profile(Hours::new(72.0), &config);
        assert_relative_eq!(before.radius.value(), 2.4, epsilon = 1e-12);
        assert_relative_eq!(at.radius.value(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(after.radius.value(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wind_effect_grows_past_cap() {
        let config = capped_config();
        let at = radius_profile(Hours::new(15.0), &config);
        let after = radius_profile(Hours::new(72.0), &config);
        assert_eq!(at.radius, after.radius);
        assert!(after.wind_effect > at.wind_effect);
        assert_relative_eq!(after.wind_effect, 1.5 * 72.0 * 0.01);
    }

    #[test]
    fn test_zone_radii_strictly_increase_with_ring_index() {
        let base = Kilometers::new(3.0);
        let inner = zone_radius(base, 0, 3);
        let middle = zone_radius(base, 1, 3);
        let outer = zone_radius(base, 2, 3);
        assert_relative_eq!(inner.value(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(middle.value(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(outer.value(), 3.0, epsilon = 1e-12);
        assert!(inner < middle && middle < outer);
    }

    #[test]
    fn test_single_zone_spans_full_radius() {
        let base = Kilometers::new(1.2);
        assert_eq!(zone_radius(base, 0, 1), base);
    }

    #[test]
    fn test_downwind_bearings_elongated() {
        let wind = Degrees::new(225.0);
        let factor = anisotropy_factor(Degrees::new(225.0), wind, 0.45, WindConeMode::Legacy);
        assert_relative_eq!(factor, 1.45);
        // 90° off the wind direction is outside the cone
        let side = anisotropy_factor(Degrees::new(135.0), wind, 0.45, WindConeMode::Legacy);
        assert_relative_eq!(side, 1.0);
        // Directly upwind
        let upwind = anisotropy_factor(Degrees::new(45.0), wind, 0.45, WindConeMode::Legacy);
        assert_relative_eq!(upwind, 1.0);
    }

    #[test]
    fn test_cone_wraps_at_north() {
        // Wind from 350°: bearing 0° is 10° away across the wrap and must
        // be elongated in both modes (|0 - 350| = 350 > 270).
        let wind = Degrees::new(350.0);
        for mode in [WindConeMode::Legacy, WindConeMode::Circular] {
            let factor = anisotropy_factor(Degrees::new(0.0), wind, 0.2, mode);
            assert_relative_eq!(factor, 1.2);
        }
    }

    #[test]
    fn test_legacy_and_circular_agree_on_sampled_domain() {
        // For in-range wind directions the raw-difference test is exactly
        // the wrapped ±90° cone, so the modes never disagree on the 10°
        // bearing grid.
        for wind_deg in 0..360 {
            let wind = Degrees::new(f64::from(wind_deg));
            for step in 0..36 {
                let bearing = Degrees::new(f64::from(step) * 10.0);
                let legacy = anisotropy_factor(bearing, wind, 0.3, WindConeMode::Legacy);
                let circular = anisotropy_factor(bearing, wind, 0.3, WindConeMode::Circular);
                assert_eq!(
                    legacy, circular,
                    "modes diverged at wind {wind_deg} bearing {}",
                    bearing.value()
                );
            }
        }
    }

    #[test]
    fn test_zero_wind_is_isotropic() {
        let config = unbounded_config().with_wind(Degrees::new(225.0), crate::core_types::MilesPerHour::new(0.0));
        let profile = radius_profile(Hours::new(30.0), &config);
        assert_eq!(profile.wind_effect, 0.0);
        for step in 0..36 {
            let bearing = Degrees::new(f64::from(step) * 10.0);
            let factor = anisotropy_factor(
                bearing,
                config.wind_direction,
                profile.wind_effect,
                config.wind_cone,
            );
            assert_eq!(factor, 1.0);
        }
    }
}
