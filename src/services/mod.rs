//! Services module
//!
//! This module contains the external lookups and the goal calculator

pub mod goals;
pub mod nutrition;
pub mod weather;

// Re-export commonly used services
pub use nutrition::NutritionService;
pub use weather::WeatherService;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub weather_service: WeatherService,
    pub nutrition_service: NutritionService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let weather_service = WeatherService::new(settings.weather.clone())?;
        let nutrition_service = NutritionService::new(settings.nutrition.clone())?;

        Ok(Self {
            weather_service,
            nutrition_service,
        })
    }
}
