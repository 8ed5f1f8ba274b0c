//! Vector type alias for planar kilometre offsets.

use nalgebra::Vector2;

/// 2D vector type for east/north displacements from the fire origin.
///
/// This is a simple alias for `nalgebra::Vector2<f64>`, used by the
/// perimeter discretization for kilometre offsets before projection into
/// geographic coordinates.
pub type Vec2 = Vector2<f64>;
