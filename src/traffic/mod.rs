//! Traffic estimate
//!
//! Travel time from a fixed origin to each destination city, taken from the
//! Google Distance Matrix API with traffic-aware timing for "now". Lower
//! values mean less congestion.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::TravelRankError;
use crate::config::TrafficConfig;
use crate::models::Lookup;
use crate::upstream::UpstreamClient;

pub mod distance_matrix;

/// Source of travel durations per city
#[async_trait]
pub trait TrafficEstimator: Send + Sync {
    /// Travel time in seconds to `city`, or `Unavailable` on any failure
    async fn travel_time(&self, city: &str) -> Lookup<u64>;
}

/// Google Distance Matrix client
#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    upstream: UpstreamClient,
    base_url: String,
    api_key: Option<String>,
    origin: String,
    country: String,
}

impl DistanceMatrixClient {
    pub fn new(config: &TrafficConfig) -> Result<Self> {
        if config.api_key.is_none() {
            warn!("No maps API key configured, every traffic lookup will be unavailable");
        }

        Ok(Self {
            upstream: UpstreamClient::new(
                "Google Distance Matrix",
                Duration::from_secs(config.timeout_seconds.into()),
            )?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            origin: config.origin.clone(),
            country: config.country.clone(),
        })
    }

    /// Destination string sent upstream, e.g. `Jaipur, India`
    fn destination(&self, city: &str) -> String {
        if self.country.is_empty() {
            city.to_string()
        } else {
            format!("{city}, {}", self.country)
        }
    }

    /// Fetch the travel time from the origin to `city`
    pub async fn fetch(&self, city: &str) -> Result<u64> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| TravelRankError::config("Maps API key is not configured"))?;

        let url = format!("{}/distancematrix/json", self.base_url);
        let destination = self.destination(city);
        let response: distance_matrix::DistanceMatrixResponse = self
            .upstream
            .get_json(
                &url,
                &[
                    ("origins", self.origin.as_str()),
                    ("destinations", destination.as_str()),
                    ("key", api_key),
                    ("departure_time", "now"),
                ],
            )
            .await?;

        Ok(response.travel_seconds()?)
    }
}

#[async_trait]
impl TrafficEstimator for DistanceMatrixClient {
    #[instrument(skip(self))]
    async fn travel_time(&self, city: &str) -> Lookup<u64> {
        match self.fetch(city).await {
            Ok(seconds) => {
                debug!("Travel time from {} to {}: {}s", self.origin, city, seconds);
                Lookup::Available(seconds)
            }
            Err(e) => {
                warn!("Error fetching traffic data for {}: {:#}", city, e);
                Lookup::Unavailable
            }
        }
    }
}
