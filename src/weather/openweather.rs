//! `OpenWeatherMap` current-weather response structures

use serde::Deserialize;

use crate::TravelRankError;
use crate::models::WeatherSnapshot;

/// Body of `GET /data/2.5/weather`
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub main: Option<MainReadings>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
}

impl TryFrom<CurrentWeatherResponse> for WeatherSnapshot {
    type Error = TravelRankError;

    fn try_from(response: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let condition = response
            .weather
            .first()
            .ok_or_else(|| TravelRankError::api("No weather conditions in response"))?;
        let main = response
            .main
            .ok_or_else(|| TravelRankError::api("No main readings in response"))?;

        Ok(WeatherSnapshot::new(&condition.description, main.temp, main.humidity))
    }
}
