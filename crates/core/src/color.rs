//! Color mapping strategies for emitted features.
//!
//! The geometry core never chooses colors itself; it asks a [`ColorMap`] for
//! the color of each (step, zone) pair. Two strategies ship: the sequential
//! intensity ramp used by the unbounded variant and the fixed severity
//! palette used by the zoned variant. Swapping in a different mapping (for
//! example the elapsed-keyed ramp) requires no change to the builder.

use crate::features::TimeStep;

/// Strategy mapping a time step and severity ring to a CSS color string.
pub trait ColorMap {
    /// Color for the ring `zone` (0 = most severe) of `step`.
    fn color(&self, step: TimeStep, zone: usize) -> String;
}

/// What drives the intensity ramp position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampKeying {
    /// Intensity = `day / total_days`; all steps within one day share a
    /// color. The original behavior and the default.
    #[default]
    Day,
    /// Intensity = `elapsed_hours / (total_days * 24)`; continuous across
    /// steps within a day.
    Elapsed,
}

/// Sequential pale-yellow-to-dark-red ramp (YlOrRd), keyed to simulation
/// progress.
#[derive(Debug, Clone)]
pub struct IntensityRamp {
    total_days: u32,
    keying: RampKeying,
}

/// YlOrRd anchor stops, light to dark
const RAMP_STOPS: [(u8, u8, u8); 9] = [
    (255, 255, 204),
    (255, 237, 160),
    (254, 217, 118),
    (254, 178, 76),
    (253, 141, 60),
    (252, 78, 42),
    (227, 26, 28),
    (189, 0, 38),
    (128, 0, 38),
];

impl IntensityRamp {
    /// Day-keyed ramp over `total_days` (must be >= 1, enforced by config
    /// validation)
    #[must_use]
    pub fn new(total_days: u32) -> Self {
        IntensityRamp {
            total_days,
            keying: RampKeying::Day,
        }
    }

    /// Ramp with an explicit keying mode
    #[must_use]
    pub fn with_keying(total_days: u32, keying: RampKeying) -> Self {
        IntensityRamp { total_days, keying }
    }

    fn intensity(&self, step: TimeStep) -> f64 {
        match self.keying {
            RampKeying::Day => f64::from(step.day) / f64::from(self.total_days),
            RampKeying::Elapsed => {
                step.elapsed().value() / (f64::from(self.total_days) * 24.0)
            }
        }
    }
}

impl ColorMap for IntensityRamp {
    fn color(&self, step: TimeStep, _zone: usize) -> String {
        ramp_color(self.intensity(step))
    }
}

/// Fixed discrete ring palette, most severe color first.
#[derive(Debug, Clone)]
pub struct ZonePalette {
    colors: Vec<String>,
}

impl ZonePalette {
    /// Palette from an ordered color list. Config validation guarantees the
    /// list covers every configured ring.
    #[must_use]
    pub fn new(colors: Vec<String>) -> Self {
        ZonePalette { colors }
    }
}

impl ColorMap for ZonePalette {
    fn color(&self, _step: TimeStep, zone: usize) -> String {
        self.colors[zone].clone()
    }
}

/// Linear interpolation through the ramp stops, intensity clamped to [0, 1].
fn ramp_color(intensity: f64) -> String {
    let position = intensity.clamp(0.0, 1.0) * (RAMP_STOPS.len() - 1) as f64;
    let index = (position.floor() as usize).min(RAMP_STOPS.len() - 2);
    let frac = position - index as f64;

    let (r0, g0, b0) = RAMP_STOPS[index];
    let (r1, g1, b1) = RAMP_STOPS[index + 1];

    let lerp = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8
    };

    format!("#{:02x}{:02x}{:02x}", lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}
