//! Data models for travelrank
//!
//! This module contains the core domain models organized by concern:
//! - City: one row of the static destination dataset
//! - Weather: current conditions returned by the weather lookup
//! - Lookup: explicit available/unavailable result of an upstream lookup
//! - Recommendation: a scored city, produced per request

pub mod city;
pub mod lookup;
pub mod recommendation;
pub mod weather;

// Re-export all public types for convenient access
pub use city::CityRecord;
pub use lookup::Lookup;
pub use recommendation::{Preferences, Recommendation};
pub use weather::WeatherSnapshot;
