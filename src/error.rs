//! Error types and handling for `travelrank`

use thiserror::Error;

/// Main error type for the `travelrank` service
#[derive(Error, Debug)]
pub enum TravelRankError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// City dataset could not be loaded or parsed
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Upstream API communication errors
    #[error("API error: {message}")]
    Api { message: String },
}

impl TravelRankError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelRankError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TravelRankError::Dataset { message } => {
                format!("The city dataset could not be loaded: {message}")
            }
            TravelRankError::Api { .. } => {
                "Unable to reach the weather or maps service. Please check your internet connection."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TravelRankError::config("missing API key");
        assert!(matches!(config_err, TravelRankError::Config { .. }));

        let dataset_err = TravelRankError::dataset("no City column");
        assert!(matches!(dataset_err, TravelRankError::Dataset { .. }));

        let api_err = TravelRankError::api("connection failed");
        assert!(matches!(api_err, TravelRankError::Api { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TravelRankError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let dataset_err = TravelRankError::dataset("holidify.csv missing");
        assert!(dataset_err.user_message().contains("holidify.csv missing"));

        let api_err = TravelRankError::api("test");
        assert!(api_err.user_message().contains("Unable to reach"));
    }
}
