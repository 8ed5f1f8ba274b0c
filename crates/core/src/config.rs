//! Simulation configuration and fail-fast validation.
//!
//! A [`SimulationConfig`] is an immutable value object constructed once from
//! user input. The interactive controls own range policing (days 1-7, step
//! 1-12 h, direction 0-359, speed 0-30 mph); the engine still defensively
//! validates the invariants it divides by or iterates over, and rejects a
//! malformed configuration before emitting any feature.

use crate::core_types::{Degrees, GeoPoint, Kilometers, KilometersPerHour, MilesPerHour};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base isotropic spread rate, km per elapsed hour
pub const BASE_SPREAD_RATE: KilometersPerHour = KilometersPerHour::new(0.2);

/// Seed radius guaranteeing a visible polygon at ignition (km)
pub const IGNITION_RADIUS: Kilometers = Kilometers::new(0.05);

/// Default growth cap for the capped variant (km)
pub const DEFAULT_MAX_RADIUS: Kilometers = Kilometers::new(3.0);

/// Zone palette of the capped variant, most severe first
pub const DEFAULT_ZONE_COLORS: [&str; 3] = ["red", "orange", "yellow"];

/// Downwind-cone evaluation mode for the anisotropy test.
///
/// `Legacy` reproduces the original raw-difference comparison
/// (`|bearing - wind| < 90 || |bearing - wind| > 270`) and is the default.
/// `Circular` evaluates a true wrapped angular distance. For directions
/// within [0, 360) the two agree on every sampled bearing; the flag exists
/// so the corrected form is available without silently changing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindConeMode {
    /// Raw absolute-difference test, as originally shipped
    #[default]
    Legacy,
    /// Wrapped circular-distance test
    Circular,
}

/// Immutable description of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Ignition point
    pub origin: GeoPoint,
    /// Asset the summary measures distance and arrival time against
    pub target: GeoPoint,
    /// Simulated days; the grid covers day 0 through `total_days` inclusive
    pub total_days: u32,
    /// Hours between successive steps within a day
    pub hours_per_step: u32,
    /// Wind direction in compass degrees
    pub wind_direction: Degrees,
    /// Wind speed in miles per hour
    pub wind_speed: MilesPerHour,
    /// Isotropic growth rate
    pub base_spread_rate: KilometersPerHour,
    /// Growth cap; `None` lets the perimeter grow without bound
    pub max_radius: Option<Kilometers>,
    /// Concentric severity rings per step (1 = single perimeter)
    pub zone_count: usize,
    /// Ring colors, most severe first; unused when `zone_count` is 1
    pub zone_colors: Vec<String>,
    /// Anisotropy cone evaluation mode
    pub wind_cone: WindConeMode,
    /// Restart playback when the timeline ends
    pub loop_playback: bool,
    /// Calendar instant of day 0, hour 0; a fixed constant, never wall-clock
    pub start_time: NaiveDateTime,
}

impl SimulationConfig {
    /// Unbounded single-perimeter variant: linear growth with no cap, one
    /// ring per step colored by a day-keyed intensity ramp, playback runs
    /// once.
    #[must_use]
    pub fn unbounded(origin: GeoPoint, target: GeoPoint) -> Self {
        SimulationConfig {
            origin,
            target,
            total_days: 3,
            hours_per_step: 6,
            wind_direction: Degrees::new(225.0),
            wind_speed: MilesPerHour::new(15.0),
            base_spread_rate: BASE_SPREAD_RATE,
            max_radius: None,
            zone_count: 1,
            zone_colors: Vec::new(),
            wind_cone: WindConeMode::Legacy,
            loop_playback: false,
            start_time: start_instant(2023, 5, 1),
        }
    }

    /// Capped variant: growth saturates at [`DEFAULT_MAX_RADIUS`], each step
    /// emits three concentric danger rings, playback loops.
    #[must_use]
    pub fn capped(origin: GeoPoint, target: GeoPoint) -> Self {
        SimulationConfig {
            max_radius: Some(DEFAULT_MAX_RADIUS),
            zone_count: DEFAULT_ZONE_COLORS.len(),
            zone_colors: DEFAULT_ZONE_COLORS.iter().map(ToString::to_string).collect(),
            loop_playback: true,
            start_time: start_instant(2025, 1, 7),
            ..Self::unbounded(origin, target)
        }
    }

    /// Set the simulated day count
    #[must_use]
    pub fn with_days(mut self, days: u32) -> Self {
        self.total_days = days;
        self
    }

    /// Set the step size in hours
    #[must_use]
    pub fn with_step_hours(mut self, hours: u32) -> Self {
        self.hours_per_step = hours;
        self
    }

    /// Set wind direction and speed
    #[must_use]
    pub fn with_wind(mut self, direction: Degrees, speed: MilesPerHour) -> Self {
        self.wind_direction = direction;
        self.wind_speed = speed;
        self
    }

    /// Set or clear the growth cap
    #[must_use]
    pub fn with_max_radius(mut self, max_radius: Option<Kilometers>) -> Self {
        self.max_radius = max_radius;
        self
    }

    /// Set the anisotropy cone mode
    #[must_use]
    pub fn with_wind_cone(mut self, mode: WindConeMode) -> Self {
        self.wind_cone = mode;
        self
    }

    /// Set the playback loop flag
    #[must_use]
    pub fn with_loop_playback(mut self, loop_playback: bool) -> Self {
        self.loop_playback = loop_playback;
        self
    }

    /// Set the calendar instant of day 0, hour 0
    #[must_use]
    pub fn with_start_time(mut self, start_time: NaiveDateTime) -> Self {
        self.start_time = start_time;
        self
    }

    /// Normalized wind influence (speed / 10)
    #[inline]
    #[must_use]
    pub fn wind_factor(&self) -> f64 {
        self.wind_speed.wind_factor()
    }

    /// Number of steps emitted per simulated day (`ceil(24 / hours_per_step)`)
    #[inline]
    #[must_use]
    pub fn steps_per_day(&self) -> u32 {
        24_u32.div_ceil(self.hours_per_step)
    }

    /// Total features a build of this configuration will emit
    #[must_use]
    pub fn expected_feature_count(&self) -> usize {
        (self.total_days as usize + 1) * self.steps_per_day() as usize * self.zone_count
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ConfigError`]: day count or step size
    /// below 1, non-finite coordinates or wind values, zero zones, or a
    /// palette too small for the configured ring count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_days < 1 {
            return Err(ConfigError::InvalidDayCount(self.total_days));
        }
        if self.hours_per_step < 1 {
            return Err(ConfigError::InvalidStepHours(self.hours_per_step));
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::MalformedCoordinate("origin"));
        }
        if !self.target.is_finite() {
            return Err(ConfigError::MalformedCoordinate("target"));
        }
        if !self.wind_direction.value().is_finite() || !self.wind_speed.value().is_finite() {
            return Err(ConfigError::InvalidWind);
        }
        if self.zone_count == 0 {
            return Err(ConfigError::DegenerateZones);
        }
        if self.zone_count > 1 && self.zone_colors.len() < self.zone_count {
            return Err(ConfigError::ZonePalette {
                zones: self.zone_count,
                colors: self.zone_colors.len(),
            });
        }
        Ok(())
    }
}

fn start_instant(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("start instant constants are valid calendar dates")
}

/// Errors raised by configuration validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `total_days` below the minimum of 1
    InvalidDayCount(u32),
    /// `hours_per_step` below the minimum of 1
    InvalidStepHours(u32),
    /// A coordinate pair contains a non-finite component
    MalformedCoordinate(&'static str),
    /// Wind direction or speed is not a finite number
    InvalidWind,
    /// Zero severity rings would silently skip all emission
    DegenerateZones,
    /// Fewer colors than rings
    ZonePalette {
        /// Configured ring count
        zones: usize,
        /// Colors available
        colors: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDayCount(days) => {
                write!(f, "total_days must be at least 1, got {days}")
            }
            ConfigError::InvalidStepHours(hours) => {
                write!(f, "hours_per_step must be at least 1, got {hours}")
            }
            ConfigError::MalformedCoordinate(which) => {
                write!(f, "{which} coordinate has a non-finite component")
            }
            ConfigError::InvalidWind => write!(f, "wind direction and speed must be finite"),
            ConfigError::DegenerateZones => write!(f, "zone_count must be at least 1"),
            ConfigError::ZonePalette { zones, colors } => {
                write!(f, "{zones} zones need {zones} colors, palette has {colors}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
