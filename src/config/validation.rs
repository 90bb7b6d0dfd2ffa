//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{HealthBuddyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_weather_config(&settings.weather)?;
    validate_nutrition_config(&settings.nutrition)?;
    validate_conversation_config(&settings.conversation)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(HealthBuddyError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate weather lookup configuration
fn validate_weather_config(config: &super::WeatherConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(HealthBuddyError::Config(
            "Weather API URL is required".to_string()
        ));
    }
    url::Url::parse(&config.api_url)?;

    // A missing key only disables the temperature adjustment
    if config.api_key.is_empty() {
        tracing::warn!("Weather API key is empty, water goals will ignore temperature");
    }

    if config.timeout_seconds == 0 {
        return Err(HealthBuddyError::Config(
            "Weather timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate nutrition lookup configuration
fn validate_nutrition_config(config: &super::NutritionConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(HealthBuddyError::Config(
            "Nutrition API URL is required".to_string()
        ));
    }
    url::Url::parse(&config.api_url)?;

    if config.timeout_seconds == 0 {
        return Err(HealthBuddyError::Config(
            "Nutrition timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

fn validate_conversation_config(config: &super::ConversationConfig) -> Result<()> {
    if config.timeout_seconds == 0 {
        return Err(HealthBuddyError::Config(
            "Conversation timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(HealthBuddyError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(HealthBuddyError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(HealthBuddyError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(HealthBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(HealthBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
