//! The feature sequence builder: time grid to ordered, timestamped,
//! styled perimeter features plus the scalar summary.
//!
//! One build pass walks the configured time grid in lexicographic
//! (day, hour) order, evaluates the spread model once per step, and emits
//! one feature per severity ring, outer ring first. The resulting sequence
//! order is a contract with the display layer: features are played back in
//! feed order, and inner rings must arrive after outer rings so they paint
//! on top. The builder never reorders or deduplicates.

use crate::color::{ColorMap, IntensityRamp, ZonePalette};
use crate::config::{ConfigError, SimulationConfig};
use crate::core_types::{GeoPoint, Hours};
use crate::geometry::PerimeterPolygon;
use crate::spread::{radius_profile, zone_radius};
use crate::summary::DerivedSummary;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One slot on the simulation time grid.
///
/// Ordering derives lexicographically from the field order, which is the
/// canonical emission order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TimeStep {
    /// Day index, 0 through `total_days` inclusive
    pub day: u32,
    /// Hour of day, a multiple of `hours_per_step` below 24
    pub hour: u32,
}

impl TimeStep {
    /// Hours since ignition (`day * 24 + hour`), the sole time input of the
    /// spread model
    #[must_use]
    pub fn elapsed(&self) -> Hours {
        Hours::new(f64::from(self.day) * 24.0 + f64::from(self.hour))
    }

    /// Calendar timestamp of this step, `YYYY-MM-DD HH:mm:ss`
    #[must_use]
    pub fn timestamp(&self, start: NaiveDateTime) -> String {
        let instant =
            start + Duration::days(i64::from(self.day)) + Duration::hours(i64::from(self.hour));
        instant.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Point-marker styling inside a feature's properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconStyle {
    /// Fill color of the marker
    pub fill_color: String,
    /// Fill opacity, 0-1
    pub fill_opacity: f64,
    /// Draw the marker outline
    pub stroke: bool,
    /// Marker radius in pixels
    pub radius: u32,
    /// Outline weight in pixels
    pub weight: u32,
    /// Outline opacity, 0-1
    pub opacity: f64,
    /// Outline color
    pub color: String,
}

/// Polygon path styling inside a feature's properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    /// Stroke color
    pub color: String,
    /// Fill color
    pub fill_color: String,
    /// Fill opacity, 0-1
    pub fill_opacity: f64,
    /// Stroke weight in pixels
    pub weight: u32,
}

/// Complete style descriptor of one feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStyle {
    /// Marker shape hint for the renderer
    pub icon: String,
    /// Marker styling
    pub icon_style: IconStyle,
    /// Polygon styling
    pub path_style: PathStyle,
}

impl FeatureStyle {
    /// Style of the unbounded single-perimeter variant: translucent ramp
    /// fill with a fixed red marker outline.
    #[must_use]
    pub fn ramp(color: &str) -> Self {
        FeatureStyle {
            icon: "circle".to_string(),
            icon_style: IconStyle {
                fill_color: color.to_string(),
                fill_opacity: 0.6,
                stroke: true,
                radius: 5,
                weight: 2,
                opacity: 0.8,
                color: "red".to_string(),
            },
            path_style: PathStyle {
                color: color.to_string(),
                fill_color: color.to_string(),
                fill_opacity: 0.6,
                weight: 1,
            },
        }
    }

    /// Style of the capped zoned variant: lighter fill, outline in the ring
    /// color itself.
    #[must_use]
    pub fn zoned(color: &str) -> Self {
        FeatureStyle {
            icon: "circle".to_string(),
            icon_style: IconStyle {
                fill_color: color.to_string(),
                fill_opacity: 0.4,
                stroke: true,
                radius: 5,
                weight: 1,
                opacity: 0.8,
                color: color.to_string(),
            },
            path_style: PathStyle {
                color: color.to_string(),
                fill_color: color.to_string(),
                fill_opacity: 0.4,
                weight: 1,
            },
        }
    }
}

/// One rendering unit: a closed perimeter ring with timestamp, styling and
/// label. Created once during the build pass and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireFeature {
    /// Grid slot this feature belongs to
    pub step: TimeStep,
    /// Ring index, 0 = most severe (innermost)
    pub zone: usize,
    /// Formatted timestamp for temporal playback
    pub time: String,
    /// Human-readable popup label
    pub label: String,
    /// Style descriptor
    pub style: FeatureStyle,
    /// Closed perimeter ring
    pub polygon: PerimeterPolygon,
}

/// Animation parameters accompanying the feature sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSettings {
    /// Interval between frames, ISO-8601 duration (`PT6H` for 6-hour steps)
    pub period: String,
    /// How long each feature stays visible
    pub duration: String,
    /// Start playing immediately
    pub auto_play: bool,
    /// Restart from the beginning when the timeline ends
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    /// Maximum playback speed multiplier
    pub max_speed: u32,
    /// Keep the final frame on screen
    pub add_last_point: bool,
    /// Show the loop toggle control
    pub loop_button: bool,
    /// Timestamp display pattern
    pub date_options: String,
    /// Update the map while the slider is dragged
    pub time_slider_drag_update: bool,
}

impl PlaybackSettings {
    /// Playback parameters for a configuration
    #[must_use]
    pub fn for_config(config: &SimulationConfig) -> Self {
        PlaybackSettings {
            period: format!("PT{}H", config.hours_per_step),
            duration: "PT1H".to_string(),
            auto_play: true,
            loop_playback: config.loop_playback,
            max_speed: 5,
            add_last_point: true,
            loop_button: true,
            date_options: "YYYY-MM-DD HH:mm:ss".to_string(),
            time_slider_drag_update: true,
        }
    }
}

/// A labelled point of interest for the display layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Marker position
    pub location: GeoPoint,
    /// Popup label
    pub label: String,
    /// Icon name
    pub icon: String,
    /// Icon color
    pub color: String,
}

/// A fixed-radius highlight circle for the display layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleAnnotation {
    /// Circle centre
    pub center: GeoPoint,
    /// Radius in metres
    pub radius_m: f64,
    /// Stroke and fill color
    pub color: String,
    /// Fill opacity, 0-1
    pub fill_opacity: f64,
    /// Popup label
    pub label: String,
}

/// Static overlay elements rendered alongside the animated perimeter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapAnnotations {
    /// Suggested map centre, halfway between origin and target
    pub center: GeoPoint,
    /// Suggested initial zoom level
    pub zoom: u8,
    /// Ignition point marker
    pub origin_marker: Marker,
    /// Protected asset marker
    pub target_marker: Marker,
    /// Buffer circle around the protected asset
    pub protected_zone: CircleAnnotation,
}

impl MapAnnotations {
    /// Annotations for a configuration, with generic labels the caller may
    /// override.
    #[must_use]
    pub fn for_config(config: &SimulationConfig) -> Self {
        MapAnnotations {
            center: config.origin.midpoint(&config.target),
            zoom: 14,
            origin_marker: Marker {
                location: config.origin,
                label: "Fire Origin".to_string(),
                icon: "fire".to_string(),
                color: "red".to_string(),
            },
            target_marker: Marker {
                location: config.target,
                label: "Protected Site".to_string(),
                icon: "home".to_string(),
                color: "blue".to_string(),
            },
            protected_zone: CircleAnnotation {
                center: config.target,
                radius_m: 300.0,
                color: "blue".to_string(),
                fill_opacity: 0.1,
                label: "Protected Zone".to_string(),
            },
        }
    }
}

/// The complete output of one build pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Features in emission order: (day, hour, ring-index descending)
    pub features: Vec<FireFeature>,
    /// Animation parameters
    pub playback: PlaybackSettings,
    /// Static overlay elements
    pub annotations: MapAnnotations,
    /// Scalar outputs for the status display
    pub summary: DerivedSummary,
}

impl Forecast {
    /// Build the feature sequence with the default color strategy for the
    /// configuration: a day-keyed intensity ramp for a single perimeter, the
    /// fixed severity palette when zones are configured.
    ///
    /// # Errors
    ///
    /// Fails fast with a [`ConfigError`] before emitting anything when the
    /// configuration is invalid.
    pub fn build(config: &SimulationConfig) -> Result<Forecast, ConfigError> {
        if config.zone_count == 1 {
            Self::build_with_colors(config, &IntensityRamp::new(config.total_days))
        } else {
            Self::build_with_colors(config, &ZonePalette::new(config.zone_colors.clone()))
        }
    }

    /// Build the feature sequence with an explicit color strategy.
    ///
    /// # Errors
    ///
    /// Fails fast with a [`ConfigError`] before emitting anything when the
    /// configuration is invalid.
    pub fn build_with_colors(
        config: &SimulationConfig,
        colors: &dyn ColorMap,
    ) -> Result<Forecast, ConfigError> {
        config.validate()?;

        let mut features = Vec::with_capacity(config.expected_feature_count());

        for day in 0..=config.total_days {
            let mut hour = 0;
            while hour < 24 {
                let step = TimeStep { day, hour };
                let profile = radius_profile(step.elapsed(), config);
                let time = step.timestamp(config.start_time);

                // Outer rings first so later-drawn inner rings paint on top.
                for ring in (0..config.zone_count).rev() {
                    let radius = zone_radius(profile.radius, ring, config.zone_count);
                    let polygon = PerimeterPolygon::trace(
                        &config.origin,
                        radius,
                        profile.wind_effect,
                        config.wind_direction,
                        config.wind_cone,
                    );
                    let color = colors.color(step, ring);
                    let (style, label) = if config.zone_count == 1 {
                        (
                            FeatureStyle::ramp(&color),
                            format!("Day {day}, Hour {hour}<br>Fire Area"),
                        )
                    } else {
                        (
                            FeatureStyle::zoned(&color),
                            format!("Day {day}, Hour {hour} - Zone {}", ring + 1),
                        )
                    };

                    features.push(FireFeature {
                        step,
                        zone: ring,
                        time: time.clone(),
                        label,
                        style,
                        polygon,
                    });
                }

                hour += config.hours_per_step;
            }
            debug!(day, "day emitted");
        }

        let summary = DerivedSummary::for_config(config);
        info!(
            features = features.len(),
            distance_km = summary.distance.value(),
            risk = %summary.risk,
            "assembled fire perimeter sequence"
        );

        Ok(Forecast {
            features,
            playback: PlaybackSettings::for_config(config),
            annotations: MapAnnotations::for_config(config),
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 7)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn test_timestep_ordering_is_lexicographic() {
        let a = TimeStep { day: 0, hour: 18 };
        let b = TimeStep { day: 1, hour: 0 };
        let c = TimeStep { day: 1, hour: 6 };
        assert!(a < b && b < c);
    }

    #[test]
    fn test_elapsed_hours() {
        assert_eq!(TimeStep { day: 0, hour: 0 }.elapsed(), Hours::new(0.0));
        assert_eq!(TimeStep { day: 1, hour: 6 }.elapsed(), Hours::new(30.0));
        assert_eq!(TimeStep { day: 3, hour: 18 }.elapsed(), Hours::new(90.0));
    }

    #[test]
    fn test_timestamp_format() {
        let step = TimeStep { day: 1, hour: 6 };
        assert_eq!(step.timestamp(start()), "2025-01-08 06:00:00");
        let first = TimeStep { day: 0, hour: 0 };
        assert_eq!(first.timestamp(start()), "2025-01-07 00:00:00");
    }

    #[test]
    fn test_ramp_style_constants() {
        let style = FeatureStyle::ramp("#ffffcc");
        assert_eq!(style.icon, "circle");
        assert_eq!(style.icon_style.fill_opacity, 0.6);
        assert_eq!(style.icon_style.weight, 2);
        assert_eq!(style.icon_style.color, "red");
        assert_eq!(style.path_style.weight, 1);
    }

    #[test]
    fn test_zoned_style_constants() {
        let style = FeatureStyle::zoned("orange");
        assert_eq!(style.icon_style.fill_opacity, 0.4);
        assert_eq!(style.icon_style.weight, 1);
        assert_eq!(style.icon_style.color, "orange");
        assert_eq!(style.path_style.fill_color, "orange");
    }

    #[test]
    fn test_playback_period_tracks_step_size() {
        let config = SimulationConfig::capped(
            GeoPoint::new(34.0556, -118.5334),
            GeoPoint::new(34.0453, -118.5265),
        )
        .with_step_hours(3);
        let playback = PlaybackSettings::for_config(&config);
        assert_eq!(playback.period, "PT3H");
        assert_eq!(playback.duration, "PT1H");
        assert!(playback.auto_play);
        assert!(playback.loop_playback);
    }

    #[test]
    fn test_annotations_shape() {
        let config = SimulationConfig::capped(
            GeoPoint::new(34.0556, -118.5334),
            GeoPoint::new(34.0453, -118.5265),
        );
        let annotations = MapAnnotations::for_config(&config);
        assert_eq!(annotations.zoom, 14);
        assert_eq!(annotations.origin_marker.icon, "fire");
        assert_eq!(annotations.target_marker.icon, "home");
        assert_eq!(annotations.protected_zone.radius_m, 300.0);
        assert_eq!(annotations.center.lat, (34.0556 + 34.0453) / 2.0);
    }
}
