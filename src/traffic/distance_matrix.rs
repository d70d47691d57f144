//! Google Distance Matrix response structures

use serde::Deserialize;

use crate::TravelRankError;

/// Body of `GET /maps/api/distancematrix/json`
#[derive(Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
pub struct MatrixElement {
    pub status: Option<String>,
    pub duration: Option<DurationValue>,
    pub duration_in_traffic: Option<DurationValue>,
}

#[derive(Debug, Deserialize)]
pub struct DurationValue {
    /// Seconds
    pub value: u64,
}

impl DistanceMatrixResponse {
    /// Travel time of the single origin/destination pair.
    ///
    /// Prefers the traffic-aware duration and falls back to the baseline.
    pub fn travel_seconds(&self) -> Result<u64, TravelRankError> {
        let element = self
            .rows
            .first()
            .and_then(|row| row.elements.first())
            .ok_or_else(|| {
                TravelRankError::api(format!(
                    "No route in response (status {}: {})",
                    self.status.as_deref().unwrap_or("unknown"),
                    self.error_message.as_deref().unwrap_or("no message")
                ))
            })?;

        element
            .duration_in_traffic
            .as_ref()
            .or(element.duration.as_ref())
            .map(|duration| duration.value)
            .ok_or_else(|| {
                TravelRankError::api(format!(
                    "No duration for destination (element status {})",
                    element.status.as_deref().unwrap_or("unknown")
                ))
            })
    }
}
