//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub weather: WeatherConfig,
    pub nutrition: NutritionConfig,
    pub conversation: ConversationConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// OpenWeatherMap configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

/// OpenFoodFacts configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NutritionConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
}

/// Multi-step dialog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversationConfig {
    /// Dialogs idle for longer than this are discarded
    pub timeout_seconds: u64,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Environment variables use the `HEALTHBUDDY` prefix and `__` as the
    /// section separator, e.g. `HEALTHBUDDY__BOT__TOKEN`.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from the given file (extension optional) and the environment
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("weather.api_url", defaults.weather.api_url)?
            .set_default("weather.api_key", defaults.weather.api_key)?
            .set_default("weather.timeout_seconds", defaults.weather.timeout_seconds as i64)?
            .set_default("nutrition.api_url", defaults.nutrition.api_url)?
            .set_default("nutrition.timeout_seconds", defaults.nutrition.timeout_seconds as i64)?
            .set_default("conversation.timeout_seconds", defaults.conversation.timeout_seconds as i64)?
            .set_default("i18n.default_language", defaults.i18n.default_language)?
            .set_default("i18n.supported_languages", defaults.i18n.supported_languages)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_path", defaults.logging.file_path)?
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("HEALTHBUDDY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::HealthBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            weather: WeatherConfig {
                api_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
                api_key: String::new(),
                timeout_seconds: 5,
            },
            nutrition: NutritionConfig {
                api_url: "https://world.openfoodfacts.org/cgi/search.pl".to_string(),
                timeout_seconds: 10,
            },
            conversation: ConversationConfig {
                timeout_seconds: 3600,
            },
            i18n: I18nConfig {
                default_language: "ru".to_string(),
                supported_languages: vec!["ru".to_string(), "en".to_string()],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs/healthbuddy.log".to_string(),
            },
        }
    }
}
