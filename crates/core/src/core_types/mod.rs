//! Core types and utilities

pub mod geo;
pub mod units;
pub mod vec2;

pub use geo::{GeoPoint, EARTH_RADIUS_KM, KM_PER_DEGREE};
pub use units::{Degrees, Hours, Kilometers, KilometersPerHour, MilesPerHour};
pub use vec2::Vec2;
