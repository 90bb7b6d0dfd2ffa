//! Weather lookup service
//!
//! Fetches the current temperature for a city from the OpenWeatherMap
//! current-weather endpoint. Used once per profile setup to decide the
//! hot-weather water bonus.

use std::time::Duration;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use crate::config::WeatherConfig;
use crate::utils::errors::{HealthBuddyError, LookupError, LookupResult, Result};
use crate::utils::logging::log_api_error;

/// Weather service backed by OpenWeatherMap
#[derive(Clone, Debug)]
pub struct WeatherService {
    client: Client,
    config: WeatherConfig,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("HealthBuddy-Bot/1.0")
            .build()
            .map_err(HealthBuddyError::Http)?;

        Ok(Self { client, config })
    }

    /// Current temperature in °C for the given city
    pub async fn get_temperature(&self, city: &str) -> LookupResult<f64> {
        debug!(city = %city, url = %self.config.api_url, "Requesting current temperature");

        let response = self.client
            .get(&self.config.api_url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(LookupError::from_request)?;

        // Error payloads come with a non-2xx status but are still JSON with a `cod` field
        let body = response.text().await.map_err(LookupError::from_request)?;
        let temperature = parse_temperature(&body)
            .inspect_err(|e| log_api_error("weather", &e.to_string(), Some(city)))?;

        debug!(city = %city, temperature = temperature, "Temperature received");
        Ok(temperature)
    }
}

/// Extract `main.temp` from a weather payload whose `cod` is 200
fn parse_temperature(body: &str) -> LookupResult<f64> {
    let data: Value = serde_json::from_str(body)
        .map_err(|_| LookupError::InvalidResponse(body.to_string()))?;

    // `cod` is a number on success and a string on most errors
    let cod = match &data["cod"] {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    };

    if cod != Some(200) {
        return Err(LookupError::InvalidResponse(data.to_string()));
    }

    data["main"]["temp"]
        .as_f64()
        .ok_or_else(|| LookupError::InvalidResponse(data.to_string()))
}
