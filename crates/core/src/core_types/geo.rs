//! Geographic primitives and the fixed-latitude planar approximation.
//!
//! The engine deliberately avoids geodesic-accurate projection. Perimeter
//! vertices are produced by a flat-earth approximation anchored at the fire
//! origin: one degree of latitude is treated as 111.32 km everywhere, and
//! longitude is scaled by the cosine of the origin latitude. At the
//! kilometre scales the spread model produces, the error is well below the
//! width of a rendered stroke; this is an accepted error source, not a bug.

use super::units::Kilometers;
use super::vec2::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius in kilometres (IUGG)
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Kilometres per degree of latitude (and of longitude at the equator)
pub const KM_PER_DEGREE: f64 = 111.32;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Both coordinates are finite numbers
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Haversine great-circle distance to `other`.
    #[must_use]
    pub fn great_circle_km(&self, other: &GeoPoint) -> Kilometers {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Kilometers::new(EARTH_RADIUS_KM * c)
    }

    /// Displace this point by a planar kilometre offset (x east, y north).
    ///
    /// Uses the fixed-latitude approximation: the longitude scale is taken
    /// from `self.lat`, not re-evaluated at the displaced latitude.
    #[must_use]
    pub fn offset_km(&self, offset: Vec2) -> GeoPoint {
        let lon = self.lon + offset.x / KM_PER_DEGREE / self.lat.to_radians().cos();
        let lat = self.lat + offset.y / KM_PER_DEGREE;
        GeoPoint { lat, lon }
    }

    /// Arithmetic midpoint, used to centre the map between two points.
    #[inline]
    #[must_use]
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
