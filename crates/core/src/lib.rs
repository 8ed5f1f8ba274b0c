//! Fire Spread Core Library
//!
//! A deterministic fire-perimeter forecast engine for animated map display.
//! Given an ignition point, wind forcing and a handful of tunable
//! parameters, it produces a time-indexed sequence of closed perimeter
//! polygons (optionally layered into concentric danger zones) together with
//! the scalar distance / arrival / risk summary a status display needs.
//!
//! The engine is a pure computation: no I/O, no shared state, no
//! randomness. Rendering, parameter collection and animation belong to
//! external collaborators that consume the emitted overlay document.

// Core types and utilities
pub mod core_types;

// Spread model and perimeter discretization
pub mod geometry;
pub mod spread;

// Configuration and feature assembly
pub mod color;
pub mod config;
pub mod features;
pub mod summary;

// Wire form for the display collaborators
pub mod geojson;

// Re-export core types
pub use core_types::{Degrees, GeoPoint, Hours, Kilometers, KilometersPerHour, MilesPerHour, Vec2};

// Re-export engine types
pub use color::{ColorMap, IntensityRamp, RampKeying, ZonePalette};
pub use config::{ConfigError, SimulationConfig, WindConeMode};
pub use features::{FireFeature, Forecast, MapAnnotations, PlaybackSettings, TimeStep};
pub use geometry::PerimeterPolygon;
pub use spread::RadiusProfile;
pub use summary::{protection_strategies, DerivedSummary, RiskLevel};
