//! Configuration management for `travelrank`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelRankError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the OpenWeatherMap key when no `TRAVELRANK_` override is set
pub const OPENWEATHER_KEY_VAR: &str = "OPENWEATHER_API_KEY";
/// Environment variable holding the Google Maps key when no `TRAVELRANK_` override is set
pub const GOOGLE_MAPS_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Root configuration structure for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelRankConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// City dataset and model artifact locations
    pub dataset: DatasetConfig,
    /// Weather API configuration
    pub weather: WeatherConfig,
    /// Distance matrix API configuration
    pub traffic: TrafficConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: String,
    /// PEM certificate chain, enables HTTPS together with `tls_key`
    pub tls_cert: Option<String>,
    /// PEM private key
    pub tls_key: Option<String>,
}

/// Startup inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// CSV file with one row per candidate city
    pub path: String,
    /// Serialized travel model, loaded but never consulted when scoring
    pub model_path: String,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: Option<String>,
    /// Base URL for the weather API
    pub base_url: String,
    /// Unit system passed to the API
    pub units: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// Distance matrix API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
    /// Google Maps API key
    pub api_key: Option<String>,
    /// Base URL for the maps API
    pub base_url: String,
    /// Fixed origin every travel time is measured from
    pub origin: String,
    /// Country appended to each destination city
    pub country: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
    /// OTLP/HTTP collector endpoint; traces are only exported when set
    pub otlp_endpoint: Option<String>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_dataset_path() -> String {
    "data/holidify.csv".to_string()
}

fn default_model_path() -> String {
    "travel_model.pkl".to_string()
}

fn default_weather_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

fn default_weather_units() -> String {
    "metric".to_string()
}

fn default_traffic_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

fn default_traffic_origin() -> String {
    "New Delhi, India".to_string()
}

fn default_traffic_country() -> String {
    "India".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            tls_cert: None,
            tls_key: None,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            model_path: default_model_path(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            units: default_weather_units(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_traffic_base_url(),
            origin: default_traffic_origin(),
            country: default_traffic_country(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            otlp_endpoint: None,
        }
    }
}

impl TravelRankConfig {
    /// Load configuration from `config_path`, or the default locations when `None`,
    /// layered under environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(TravelRankError::config(format!(
                        "Config file not found: {}",
                        path.display()
                    ))
                    .into());
                }
                Some(path)
            }
            None => Self::default_config_file(),
        };

        if let Some(config_file) = config_file {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRAVELRANK_WEATHER__API_KEY -> weather.api_key
        builder = builder.add_source(
            Environment::with_prefix("TRAVELRANK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelRankConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_credential_fallbacks(|name| std::env::var(name).ok());
        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// `./config.toml` when present, otherwise the per-user config file
    fn default_config_file() -> Option<PathBuf> {
        let local = PathBuf::from("config.toml");
        if local.exists() {
            return Some(local);
        }
        Self::get_config_path().filter(|path| path.exists())
    }

    /// Get the per-user configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelrank").join("config.toml"))
    }

    /// Fill missing API keys from the provider-specific environment variables
    pub fn apply_credential_fallbacks<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if self.weather.api_key.is_none() {
            self.weather.api_key = non_empty(OPENWEATHER_KEY_VAR);
        }
        if self.traffic.api_key.is_none() {
            self.traffic.api_key = non_empty(GOOGLE_MAPS_KEY_VAR);
        }
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.dataset.path.is_empty() {
            self.dataset.path = default_dataset_path();
        }
        if self.dataset.model_path.is_empty() {
            self.dataset.model_path = default_model_path();
        }
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.units.is_empty() {
            self.weather.units = default_weather_units();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_timeout();
        }
        if self.traffic.base_url.is_empty() {
            self.traffic.base_url = default_traffic_base_url();
        }
        if self.traffic.origin.is_empty() {
            self.traffic.origin = default_traffic_origin();
        }
        if self.traffic.timeout_seconds == 0 {
            self.traffic.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    ///
    /// Both keys are optional: without one, every lookup against that
    /// provider reports the city as unavailable.
    pub fn validate_api_keys(&self) -> Result<()> {
        for (provider, key) in [
            ("Weather", &self.weather.api_key),
            ("Maps", &self.traffic.api_key),
        ] {
            let Some(api_key) = key else { continue };

            if api_key.is_empty() {
                return Err(TravelRankError::config(format!(
                    "{provider} API key cannot be empty if provided. Either remove it or provide a valid key."
                ))
                .into());
            }

            if api_key.len() < 8 {
                return Err(TravelRankError::config(format!(
                    "{provider} API key appears to be invalid (too short). Please check your API key."
                ))
                .into());
            }

            if api_key.len() > 100 {
                return Err(TravelRankError::config(format!(
                    "{provider} API key appears to be invalid (too long). Please check your API key."
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TravelRankError::config("Server port cannot be 0").into());
        }

        if self.weather.timeout_seconds > 300 {
            return Err(
                TravelRankError::config("Weather API timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.traffic.timeout_seconds > 300 {
            return Err(
                TravelRankError::config("Maps API timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelRankError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelRankError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Weather API base URL", &self.weather.base_url),
            ("Maps API base URL", &self.traffic.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TravelRankError::config(format!(
                    "{name} must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if self.server.tls_cert.is_some() != self.server.tls_key.is_some() {
            return Err(TravelRankError::config(
                "TLS requires both server.tls_cert and server.tls_key",
            )
            .into());
        }

        Ok(())
    }
}
