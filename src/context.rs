//! Process-wide, read-only application context
//!
//! Built once at startup from the configuration and shared by every request.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::TravelRankConfig;
use crate::dataset;
use crate::model_artifact::TravelModel;
use crate::models::CityRecord;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Arc<TravelRankConfig>,
    pub cities: Arc<Vec<CityRecord>>,
    pub model: Option<Arc<TravelModel>>,
}

impl AppContext {
    /// Load the dataset and optional model named by `config`.
    ///
    /// A dataset failure is fatal, a model failure only leaves the model unset.
    pub fn load(config: TravelRankConfig) -> crate::Result<Self> {
        let cities = dataset::load_cities(&config.dataset.path)?;
        if cities.is_empty() {
            warn!("Dataset {} contains no cities", config.dataset.path);
        }

        let model = TravelModel::load_optional(&config.dataset.model_path).map(Arc::new);

        info!(
            "Application context ready: {} cities, model {}",
            cities.len(),
            if model.is_some() { "loaded" } else { "absent" }
        );

        Ok(Self {
            config: Arc::new(config),
            cities: Arc::new(cities),
            model,
        })
    }

    /// Context over an in-memory dataset without a model
    #[must_use]
    pub fn from_parts(config: TravelRankConfig, cities: Vec<CityRecord>) -> Self {
        Self {
            config: Arc::new(config),
            cities: Arc::new(cities),
            model: None,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: Option<TravelModel>) -> Self {
        self.model = model.map(Arc::new);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_with_dataset_and_missing_model() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "City,Rating\nUdaipur,4.5\nKochi,4.1").unwrap();

        let mut config = TravelRankConfig::default();
        config.dataset.path = file.path().to_string_lossy().into_owned();
        config.dataset.model_path = "/nonexistent/travel_model.pkl".to_string();

        let context = AppContext::load(config).unwrap();
        assert_eq!(context.cities.len(), 2);
        assert!(context.model.is_none());
    }

    #[test]
    fn test_missing_dataset_is_fatal() {
        let mut config = TravelRankConfig::default();
        config.dataset.path = "/nonexistent/holidify.csv".to_string();
        assert!(AppContext::load(config).is_err());
    }
}
