//! Recommendation engine
//!
//! Walks the dataset in order, looks up weather and travel time for each
//! city one after the other, scores the cities both lookups succeeded for,
//! and returns them best first. A failed lookup only removes its city; a
//! complete upstream outage yields an empty list.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::context::AppContext;
use crate::model_artifact::TravelModel;
use crate::models::{CityRecord, Lookup, Preferences, Recommendation};
use crate::scoring;
use crate::traffic::{DistanceMatrixClient, TrafficEstimator};
use crate::weather::{OpenWeatherClient, WeatherLookup};

pub struct RecommendationEngine {
    cities: Arc<Vec<CityRecord>>,
    weather: Arc<dyn WeatherLookup>,
    traffic: Arc<dyn TrafficEstimator>,
    /// Where every travel time is measured from
    origin: String,
    /// Held for parity with the startup inputs, never consulted when ranking
    model: Option<Arc<TravelModel>>,
}

impl RecommendationEngine {
    #[must_use]
    pub fn new(
        context: &AppContext,
        weather: Arc<dyn WeatherLookup>,
        traffic: Arc<dyn TrafficEstimator>,
    ) -> Self {
        Self {
            cities: Arc::clone(&context.cities),
            weather,
            traffic,
            origin: context.config.traffic.origin.clone(),
            model: context.model.clone(),
        }
    }

    /// Engine backed by the real weather and maps APIs
    pub fn from_context(context: &AppContext) -> Result<Self> {
        let weather = OpenWeatherClient::new(&context.config.weather)?;
        let traffic = DistanceMatrixClient::new(&context.config.traffic)?;
        Ok(Self::new(context, Arc::new(weather), Arc::new(traffic)))
    }

    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Rank every city in the dataset.
    ///
    /// `preferences` is accepted but does not influence filtering or scoring.
    #[instrument(skip(self, preferences), fields(preferences = preferences.as_str(), cities = self.cities.len()))]
    pub async fn recommend(&self, preferences: &Preferences) -> Vec<Recommendation> {
        let start_time = Instant::now();
        let mut recommendations = Vec::with_capacity(self.cities.len());

        for record in self.cities.iter() {
            let weather = self.weather.current_weather(&record.city).await;
            let traffic = self.traffic.travel_time(&record.city).await;

            let (Lookup::Available(weather), Lookup::Available(seconds)) = (weather, traffic) else {
                debug!("Excluding {}: lookup unavailable", record.city);
                continue;
            };

            let score = scoring::overall_score(&weather, seconds);
            debug!("Scored {}: {:.6}", record.city, score);
            recommendations.push(Recommendation::new(record, weather, seconds, score));
        }

        scoring::rank(&mut recommendations);

        info!(
            "Ranked {} of {} cities ({} excluded) in {:.3}s",
            recommendations.len(),
            self.cities.len(),
            self.cities.len() - recommendations.len(),
            start_time.elapsed().as_secs_f64()
        );

        recommendations
    }
}
