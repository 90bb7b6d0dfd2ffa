//! Mock server for the weather and nutrition APIs

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WEATHER_PATH: &str = "/data/2.5/weather";
pub const NUTRITION_PATH: &str = "/cgi/search.pl";

/// Wiremock server standing in for OpenWeatherMap and OpenFoodFacts
pub struct ApiMockServer {
    pub server: MockServer,
}

impl ApiMockServer {
    /// Start a new mock server with no mocks mounted
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn weather_url(&self) -> String {
        format!("{}{}", self.server.uri(), WEATHER_PATH)
    }

    pub fn nutrition_url(&self) -> String {
        format!("{}{}", self.server.uri(), NUTRITION_PATH)
    }

    /// Respond to a weather request for `city` with the given temperature
    pub async fn mock_temperature(&self, city: &str, temperature: f64) {
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", city))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cod": 200,
                "name": city,
                "main": { "temp": temperature, "humidity": 40 }
            })))
            .mount(&self.server)
            .await;
    }

    /// Respond to a weather request for `city` the way the API does for unknown cities
    pub async fn mock_city_not_found(&self, city: &str) {
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", city))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "cod": "404",
                "message": "city not found"
            })))
            .mount(&self.server)
            .await;
    }

    /// Return a single product with the given energy density
    pub async fn mock_product(&self, name: &str, kcal_per_100g: f64) {
        Mock::given(method("GET"))
            .and(path(NUTRITION_PATH))
            .and(query_param("search_terms", name))
            .and(query_param("json", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "products": [{
                    "product_name": name,
                    "nutriments": { "energy-kcal_100g": kcal_per_100g }
                }]
            })))
            .mount(&self.server)
            .await;
    }

    /// Return an empty search result
    pub async fn mock_no_products(&self, name: &str) {
        Mock::given(method("GET"))
            .and(path(NUTRITION_PATH))
            .and(query_param("search_terms", name))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 0,
                "products": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Fail every nutrition search
    pub async fn mock_nutrition_outage(&self) {
        Mock::given(method("GET"))
            .and(path(NUTRITION_PATH))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&self.server)
            .await;
    }

    /// Number of requests received on `request_path`
    pub async fn request_count(&self, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == request_path)
            .count()
    }
}
