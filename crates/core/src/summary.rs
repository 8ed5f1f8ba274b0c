//! Scalar outputs computed once per configuration: distance to the
//! protected asset, an arrival-time estimate, and a coarse risk rating.

use crate::config::SimulationConfig;
use crate::core_types::{Degrees, Hours, Kilometers, MilesPerHour};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse risk rating for the configured wind conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Default rating
    Low,
    /// Strong wind regardless of direction
    Moderate,
    /// Onshore-quadrant wind above threshold
    High,
}

impl RiskLevel {
    /// Classify wind conditions.
    ///
    /// The High rule is evaluated first and short-circuits Moderate: a
    /// south-west-quadrant wind (exclusive 180-270°) above 10 mph is High
    /// even when the speed alone would also satisfy the Moderate rule.
    #[must_use]
    pub fn assess(wind_direction: Degrees, wind_speed: MilesPerHour) -> RiskLevel {
        let direction = wind_direction.value();
        let speed = wind_speed.value();

        if direction > 180.0 && direction < 270.0 && speed > 10.0 {
            RiskLevel::High
        } else if speed > 20.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Scalar summary for the status display, computed once per configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedSummary {
    /// Great-circle distance from origin to target
    pub distance: Kilometers,
    /// Hours for the front to cover that distance at the current wind-boosted
    /// rate
    pub estimated_arrival: Hours,
    /// Risk classification
    pub risk: RiskLevel,
}

impl DerivedSummary {
    /// Evaluate the summary for a configuration.
    ///
    /// The arrival estimate uses the configuration's wind factor as-is; it
    /// is a present-conditions extrapolation, not a time-varying forecast.
    #[must_use]
    pub fn for_config(config: &SimulationConfig) -> Self {
        let distance = config.origin.great_circle_km(&config.target);
        let effective_rate = config.base_spread_rate * (1.0 + config.wind_factor());
        let estimated_arrival = distance / effective_rate;

        DerivedSummary {
            distance,
            estimated_arrival,
            risk: RiskLevel::assess(config.wind_direction, config.wind_speed),
        }
    }
}

impl fmt::Display for DerivedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "distance {:.2} km, arrival in {:.1} h, risk {}",
            self.distance.value(),
            self.estimated_arrival.value(),
            self.risk
        )
    }
}

/// Advisory checklist shown next to the risk rating.
#[must_use]
pub fn protection_strategies() -> &'static [&'static str] {
    &[
        "Deploy fire breaks 0.5km north of property",
        "Establish water resources at key locations",
        "Pre-wet vegetation in approach path",
        "Set up early warning sensors in fire path",
    ]
}
