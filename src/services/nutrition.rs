//! Nutrition lookup service
//!
//! Searches OpenFoodFacts for a product by name and reads the energy density
//! of the first match.

use std::time::Duration;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use crate::config::NutritionConfig;
use crate::utils::errors::{HealthBuddyError, LookupError, LookupResult, Result};
use crate::utils::logging::log_api_error;

/// OpenFoodFacts search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A single search hit
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub product_name: Option<String>,
    #[serde(default)]
    pub nutriments: serde_json::Map<String, Value>,
}

impl Product {
    /// Energy in kcal per 100 g; OpenFoodFacts sometimes sends it as a string
    pub fn energy_kcal_100g(&self) -> Option<f64> {
        match self.nutriments.get("energy-kcal_100g")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// Nutrition service backed by OpenFoodFacts
#[derive(Clone, Debug)]
pub struct NutritionService {
    client: Client,
    config: NutritionConfig,
}

impl NutritionService {
    /// Create a new NutritionService instance
    pub fn new(config: NutritionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("HealthBuddy-Bot/1.0")
            .build()
            .map_err(HealthBuddyError::Http)?;

        Ok(Self { client, config })
    }

    /// Calories per 100 g of the best match for `product_name`
    ///
    /// `Ok(None)` when the search has no results. A match without an energy
    /// value yields `Ok(Some(0.0))`.
    pub async fn get_food_calories(&self, product_name: &str) -> LookupResult<Option<f64>> {
        debug!(product = %product_name, "Searching product calories");

        let response = self.client
            .get(&self.config.api_url)
            .query(&[
                ("action", "process"),
                ("search_terms", product_name),
                ("json", "true"),
            ])
            .send()
            .await
            .map_err(LookupError::from_request)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log_api_error("nutrition", &format!("HTTP {}", status), Some(product_name));
            if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
                return Err(LookupError::ServiceUnavailable);
            }
            return Err(LookupError::RequestFailed(format!("HTTP {}: {}", status, error_text)));
        }

        let search: SearchResponse = response.json().await.map_err(LookupError::from_request)?;

        let calories = search
            .products
            .first()
            .map(|product| product.energy_kcal_100g().unwrap_or(0.0));

        debug!(product = %product_name, calories = ?calories, "Product search finished");
        Ok(calories)
    }
}
