//! City model for the static destination dataset

use serde::{Deserialize, Serialize};

/// One candidate destination, loaded once at startup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityRecord {
    /// City name, used verbatim as the lookup key for both upstream APIs
    #[serde(rename = "City")]
    pub city: String,
    /// Visitor rating; `None` when the dataset cell is blank or not a number
    #[serde(rename = "Rating", default, deserialize_with = "csv::invalid_option")]
    pub rating: Option<f64>,
    /// Long free-text description
    #[serde(rename = "About the city (long Description)", default)]
    pub description: String,
    /// Best-time-to-visit advisory
    #[serde(rename = "Best Time to visit", default)]
    pub best_time: String,
}

impl CityRecord {
    /// Create a record with empty description fields
    #[must_use]
    pub fn new(city: impl Into<String>, rating: Option<f64>) -> Self {
        Self {
            city: city.into(),
            rating,
            description: String::new(),
            best_time: String::new(),
        }
    }
}
