//! `travelrank` - travel destination recommendations
//!
//! Ranks the cities of a static dataset by live weather and traffic
//! conditions and serves the ranking as HTML pages and JSON.

pub mod api;
pub mod config;
pub mod context;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod model_artifact;
pub mod models;
pub mod pages;
pub mod scoring;
pub mod telemetry;
pub mod traffic;
pub mod upstream;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::TravelRankConfig;
pub use context::AppContext;
pub use engine::RecommendationEngine;
pub use error::TravelRankError;
pub use models::{CityRecord, Lookup, Preferences, Recommendation, WeatherSnapshot};
pub use traffic::{DistanceMatrixClient, TrafficEstimator};
pub use weather::{OpenWeatherClient, WeatherLookup};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelRankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
