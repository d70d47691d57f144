//! Weather snapshot model and display methods

use serde::{Deserialize, Serialize};

/// Simplified current conditions for a city
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Human-readable description, first letter capitalized ("Clear sky")
    pub description: String,
    /// Temperature in Celsius
    pub temp: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

impl WeatherSnapshot {
    /// Build a snapshot, normalizing the description the way the ranking expects
    #[must_use]
    pub fn new(description: &str, temp: f64, humidity: f64) -> Self {
        Self {
            description: capitalize(description),
            temp,
            humidity,
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temp)
    }

    /// Format humidity with unit
    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{:.0}%", self.humidity)
    }
}

/// Uppercase the first character and lowercase the rest.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
