//! Per-request recommendation output

use serde::{Deserialize, Serialize};

use super::{CityRecord, WeatherSnapshot};

/// Opaque user preference text.
///
/// Accepted end to end but not consulted when ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences(String);

impl Preferences {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Option<String>> for Preferences {
    fn from(value: Option<String>) -> Self {
        Self(value.unwrap_or_default())
    }
}

/// A scored destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub city: String,
    pub rating: Option<f64>,
    pub description: String,
    pub best_time: String,
    pub weather: WeatherSnapshot,
    /// Travel time from the configured origin, in seconds
    pub traffic: u64,
    pub score: f64,
}

impl Recommendation {
    #[must_use]
    pub fn new(record: &CityRecord, weather: WeatherSnapshot, traffic: u64, score: f64) -> Self {
        Self {
            city: record.city.clone(),
            rating: record.rating,
            description: record.description.clone(),
            best_time: record.best_time.clone(),
            weather,
            traffic,
            score,
        }
    }

    /// Rating formatted for display, `N/A` when missing
    #[must_use]
    pub fn format_rating(&self) -> String {
        self.rating
            .map_or_else(|| "N/A".to_string(), |rating| format!("{rating:.1}"))
    }

    /// Travel time as `3h 05m`
    #[must_use]
    pub fn format_traffic(&self) -> String {
        let hours = self.traffic / 3600;
        let minutes = (self.traffic % 3600) / 60;
        format!("{hours}h {minutes:02}m")
    }
}
