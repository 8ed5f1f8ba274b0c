//! GeoJSON export of a forecast.
//!
//! The wire shape mirrors what a generic temporal map renderer expects: a
//! `FeatureCollection` whose features carry a closed Polygon ring in
//! (longitude, latitude) order and a `properties` object with `time`,
//! `icon`, `iconstyle`, `style` and `popup` keys. The playback parameters
//! and static annotations ride alongside in one overlay document.

use crate::features::{
    FireFeature, Forecast, IconStyle, MapAnnotations, PathStyle, PlaybackSettings,
};
use crate::summary::DerivedSummary;
use serde::Serialize;
use std::fmt;

/// GeoJSON Polygon geometry: one closed ring of `[lon, lat]` positions
#[derive(Debug, Clone, Serialize)]
pub struct Geometry {
    /// Always `"Polygon"`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Ring list; the perimeter is a single closed ring
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Properties block of one feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureProperties {
    /// Playback timestamp, `YYYY-MM-DD HH:mm:ss`
    pub time: String,
    /// Marker shape hint
    pub icon: String,
    /// Marker styling
    #[serde(rename = "iconstyle")]
    pub icon_style: IconStyle,
    /// Polygon styling
    pub style: PathStyle,
    /// Popup label
    pub popup: String,
}

/// One GeoJSON feature
#[derive(Debug, Clone, Serialize)]
pub struct GeoFeature {
    /// Always `"Feature"`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Polygon geometry
    pub geometry: Geometry,
    /// Renderer-facing properties
    pub properties: FeatureProperties,
}

/// The feature collection consumed by the animation layer
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Features in emission order
    pub features: Vec<GeoFeature>,
}

/// Everything the display collaborators consume, in one document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayDocument {
    /// Animated perimeter features
    pub feature_collection: FeatureCollection,
    /// Animation parameters
    pub playback: PlaybackSettings,
    /// Static markers, protected zone and map framing
    pub annotations: MapAnnotations,
    /// Scalar outputs for the status display
    pub summary: DerivedSummary,
}

/// Convert one feature to its GeoJSON form
#[must_use]
pub fn geo_feature(feature: &FireFeature) -> GeoFeature {
    let ring = feature
        .polygon
        .vertices()
        .iter()
        .map(|&(lon, lat)| [lon, lat])
        .collect();

    GeoFeature {
        kind: "Feature",
        geometry: Geometry {
            kind: "Polygon",
            coordinates: vec![ring],
        },
        properties: FeatureProperties {
            time: feature.time.clone(),
            icon: feature.style.icon.clone(),
            icon_style: feature.style.icon_style.clone(),
            style: feature.style.path_style.clone(),
            popup: feature.label.clone(),
        },
    }
}

/// Convert a forecast's features to a GeoJSON feature collection
#[must_use]
pub fn feature_collection(forecast: &Forecast) -> FeatureCollection {
    FeatureCollection {
        kind: "FeatureCollection",
        features: forecast.features.iter().map(geo_feature).collect(),
    }
}

/// Bundle a forecast into the overlay document
#[must_use]
pub fn overlay_document(forecast: &Forecast) -> OverlayDocument {
    OverlayDocument {
        feature_collection: feature_collection(forecast),
        playback: forecast.playback.clone(),
        annotations: forecast.annotations.clone(),
        summary: forecast.summary,
    }
}

/// Serialize a forecast to pretty-printed overlay JSON.
///
/// # Errors
///
/// Returns [`ExportError::SerializeFailed`] if the document cannot be
/// serialized.
pub fn to_json_string(forecast: &Forecast) -> Result<String, ExportError> {
    serde_json::to_string_pretty(&overlay_document(forecast))
        .map_err(|e| ExportError::SerializeFailed(e.to_string()))
}

/// Errors that can occur while exporting a forecast
#[derive(Debug)]
pub enum ExportError {
    /// Failed to serialize the overlay document
    SerializeFailed(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}
