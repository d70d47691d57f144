//! Weather lookup
//!
//! Resolves a city name to its current conditions through the
//! `OpenWeatherMap` current-weather endpoint.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::TravelRankError;
use crate::config::WeatherConfig;
use crate::models::{Lookup, WeatherSnapshot};
use crate::upstream::UpstreamClient;

pub mod openweather;

/// Source of current weather per city
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Current conditions for `city`, or `Unavailable` on any failure
    async fn current_weather(&self, city: &str) -> Lookup<WeatherSnapshot>;
}

/// `OpenWeatherMap` client
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    upstream: UpstreamClient,
    base_url: String,
    api_key: Option<String>,
    units: String,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        if config.api_key.is_none() {
            warn!("No weather API key configured, every weather lookup will be unavailable");
        }

        Ok(Self {
            upstream: UpstreamClient::new(
                "OpenWeatherMap",
                Duration::from_secs(config.timeout_seconds.into()),
            )?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            units: config.units.clone(),
        })
    }

    /// Fetch and simplify the current weather for `city`
    pub async fn fetch(&self, city: &str) -> Result<WeatherSnapshot> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TravelRankError::config("Weather API key is not configured"))?;

        let url = format!("{}/weather", self.base_url);
        let response: openweather::CurrentWeatherResponse = self
            .upstream
            .get_json(
                &url,
                &[("q", city), ("appid", api_key), ("units", self.units.as_str())],
            )
            .await?;

        Ok(WeatherSnapshot::try_from(response)?)
    }
}

#[async_trait]
impl WeatherLookup for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_weather(&self, city: &str) -> Lookup<WeatherSnapshot> {
        match self.fetch(city).await {
            Ok(snapshot) => {
                debug!(
                    "Weather for {}: {}, {}",
                    city,
                    snapshot.description,
                    snapshot.format_temperature()
                );
                Lookup::Available(snapshot)
            }
            Err(e) => {
                warn!("Error fetching weather for {}: {:#}", city, e);
                Lookup::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::testing::spawn_upstream;
    use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    const KEY: &str = "weather_key_123";

    fn config(base_url: &str) -> WeatherConfig {
        WeatherConfig {
            api_key: Some(KEY.to_string()),
            base_url: format!("{base_url}/"),
            ..WeatherConfig::default()
        }
    }

    /// OpenWeatherMap stand-in answering every request with `status` and `body`
    async fn upstream(status: StatusCode, body: Value) -> String {
        let router = Router::new().route(
            "/weather",
            get(move || async move { (status, Json(body)) }),
        );
        spawn_upstream(router).await
    }

    #[tokio::test]
    async fn test_current_weather_from_provider() {
        let router = Router::new().route(
            "/weather",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let expected = params.get("q").map(String::as_str) == Some("Port Blair")
                    && params.get("appid").map(String::as_str) == Some(KEY)
                    && params.get("units").map(String::as_str) == Some("metric");
                if !expected {
                    return (StatusCode::BAD_REQUEST, Json(json!({"cod": "400"})));
                }
                (
                    StatusCode::OK,
                    Json(json!({
                        "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
                        "main": {"temp": 29.4, "humidity": 74},
                        "name": "Port Blair"
                    })),
                )
            }),
        );
        let base = spawn_upstream(router).await;
        let client = OpenWeatherClient::new(&config(&base)).unwrap();

        assert_eq!(
            client.current_weather("Port Blair").await,
            Lookup::Available(WeatherSnapshot::new("Clear sky", 29.4, 74.0))
        );
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let base = upstream(StatusCode::INTERNAL_SERVER_ERROR, json!({"message": "oops"})).await;
        let client = OpenWeatherClient::new(&config(&base)).unwrap();
        assert_eq!(client.current_weather("Goa").await, Lookup::Unavailable);
    }

    #[tokio::test]
    async fn test_rejected_key_is_unavailable() {
        let base = upstream(
            StatusCode::UNAUTHORIZED,
            json!({"cod": 401, "message": "Invalid API key."}),
        )
        .await;
        let client = OpenWeatherClient::new(&config(&base)).unwrap();
        assert_eq!(client.current_weather("Goa").await, Lookup::Unavailable);
    }

    #[tokio::test]
    async fn test_body_without_readings_is_unavailable() {
        let base = upstream(StatusCode::OK, json!({"cod": "404"})).await;
        let client = OpenWeatherClient::new(&config(&base)).unwrap();
        assert_eq!(client.current_weather("Atlantis").await, Lookup::Unavailable);
    }

    #[tokio::test]
    async fn test_empty_conditions_are_unavailable() {
        let base = upstream(
            StatusCode::OK,
            json!({"weather": [], "main": {"temp": 20.0, "humidity": 50}}),
        )
        .await;
        let client = OpenWeatherClient::new(&config(&base)).unwrap();
        assert_eq!(client.current_weather("Goa").await, Lookup::Unavailable);
    }

    #[tokio::test]
    async fn test_missing_key_is_unavailable() {
        let config = WeatherConfig {
            api_key: None,
            ..config("http://127.0.0.1:9")
        };
        let client = OpenWeatherClient::new(&config).unwrap();
        assert_eq!(client.current_weather("Goa").await, Lookup::Unavailable);
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_unavailable() {
        let config = WeatherConfig {
            timeout_seconds: 1,
            ..config("http://127.0.0.1:9")
        };
        let client = OpenWeatherClient::new(&config).unwrap();
        assert_eq!(client.current_weather("Goa").await, Lookup::Unavailable);
    }
}
