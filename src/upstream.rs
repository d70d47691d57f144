//! Shared HTTP plumbing for the weather and maps APIs
//!
//! One request per call: no retries, no rate limiting, no caching. Every
//! client carries an explicit timeout so a hung upstream cannot stall a
//! request forever.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use crate::TravelRankError;

/// JSON-over-HTTP client for a single upstream provider
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    provider: &'static str,
}

impl UpstreamClient {
    /// Create a client with a per-request timeout
    pub fn new(provider: &'static str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("travelrank/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| format!("Failed to create HTTP client for {provider}"))?;

        Ok(Self { client, provider })
    }

    /// GET `url` with `query` appended and decode the JSON body.
    ///
    /// Query values carry credentials, so only `url` is recorded on the span.
    #[instrument(skip(self, query), fields(provider = self.provider))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let start_time = Instant::now();

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "Timeout" } else { "Network error" };
                // reqwest errors embed the full URL, query string included
                let e = e.without_url();
                warn!("{} calling {}: {}", kind, self.provider, e);
                TravelRankError::api(format!("{kind} calling {}: {e}", self.provider))
            })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            error!("{} rejected the API key (HTTP {})", self.provider, status.as_u16());
            return Err(TravelRankError::api(format!(
                "{} rejected the API key (HTTP {})",
                self.provider,
                status.as_u16()
            ))
            .into());
        }

        if !status.is_success() {
            return Err(TravelRankError::api(format!(
                "{} request failed with status: {} - {}",
                self.provider,
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            ))
            .into());
        }

        let body: T = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to parse {} response", self.provider))?;

        let total_duration = start_time.elapsed();
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow {} response: {:.3}s",
                self.provider,
                total_duration.as_secs_f64()
            );
        }

        Ok(body)
    }
}
