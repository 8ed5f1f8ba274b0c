//! Perimeter discretization: radius profile to closed geographic polygon.
//!
//! The perimeter is sampled every 10° of bearing around the origin, each
//! vertex displaced by the zone radius times the bearing's anisotropy factor
//! and projected through the fixed-latitude planar approximation. The first
//! vertex is repeated at the end so consumers always receive an explicitly
//! closed ring.

use crate::config::WindConeMode;
use crate::core_types::{Degrees, GeoPoint, Kilometers, Vec2};
use crate::spread::anisotropy_factor;
use serde::{Deserialize, Serialize};

/// Bearing step between perimeter samples, degrees
pub const BEARING_STEP: usize = 10;

/// Samples around the full circle
pub const SAMPLE_COUNT: usize = 360 / BEARING_STEP;

/// Vertices per polygon: all samples plus the repeated closing vertex
pub const VERTEX_COUNT: usize = SAMPLE_COUNT + 1;

/// A closed fire-perimeter ring in geographic coordinates.
///
/// Vertices are `(longitude, latitude)` pairs in emission order; the last
/// vertex equals the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerimeterPolygon {
    vertices: Vec<(f64, f64)>,
}

impl PerimeterPolygon {
    /// Trace the perimeter of one ring around `origin`.
    ///
    /// Every bearing shares the one `wind_effect` supplied by the caller:
    /// zones of a single time step are all stretched by the outer ring's
    /// elongation rather than re-scaled per zone.
    #[must_use]
    pub fn trace(
        origin: &GeoPoint,
        radius: Kilometers,
        wind_effect: f64,
        wind_direction: Degrees,
        mode: WindConeMode,
    ) -> Self {
        let mut vertices = Vec::with_capacity(VERTEX_COUNT);

        for sample in 0..SAMPLE_COUNT {
            let bearing = Degrees::new((sample * BEARING_STEP) as f64);
            let factor = anisotropy_factor(bearing, wind_direction, wind_effect, mode);
            let reach = radius.value() * factor;

            let bearing_rad = bearing.to_radians();
            let offset = Vec2::new(reach * bearing_rad.cos(), reach * bearing_rad.sin());
            let point = origin.offset_km(offset);
            vertices.push((point.lon, point.lat));
        }

        // Explicit closure
        vertices.push(vertices[0]);

        PerimeterPolygon { vertices }
    }

    /// Vertices in `(lon, lat)` order, closing vertex included
    #[must_use]
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Number of vertices including the closing vertex
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// First vertex equals last vertex
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }
}
