//! Translation loader and i18n management
//!
//! This module provides the core internationalization functionality including
//! translation loading, language detection and message formatting.

use std::collections::HashMap;
use std::path::Path;
use serde_json::{Value, Map};
use tokio::fs;
use tracing::{info, warn, error, debug};
use crate::utils::errors::{HealthBuddyError, Result};
use crate::config::I18nConfig;

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded translations by language code
    translations: HashMap<String, Map<String, Value>>,
    /// Default language code
    default_language: String,
    /// Supported language codes
    supported_languages: Vec<String>,
}

/// Translation parameters for message formatting
pub type TranslationParams = HashMap<String, String>;

impl I18n {
    /// Create a new I18n instance
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
        }
    }

    /// Load all translation files from the `translations` directory
    pub async fn load_translations(&mut self) -> Result<()> {
        self.load_translations_from(Path::new("translations")).await
    }

    /// Load `<lang>.json` for every supported language from `translations_dir`
    pub async fn load_translations_from(&mut self, translations_dir: &Path) -> Result<()> {
        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = translations_dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                match self.load_language_file(&file_path, lang_code).await {
                    Ok(_) => info!("Loaded translations for language: {}", lang_code),
                    Err(e) => {
                        error!("Failed to load translations for {}: {}", lang_code, e);
                        if lang_code == &self.default_language {
                            return Err(HealthBuddyError::Config(
                                format!("Failed to load default language translations: {}", e)
                            ));
                        }
                    }
                }
            } else {
                warn!("Translation file not found: {}", file_path.display());
                if lang_code == &self.default_language {
                    return Err(HealthBuddyError::Config(
                        format!("Default language translation file not found: {}", file_path.display())
                    ));
                }
            }
        }

        Ok(())
    }

    /// Load a single language file
    async fn load_language_file(&mut self, file_path: &Path, lang_code: &str) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        self.add_translations(lang_code, &content)
    }

    /// Register translations for a language from a JSON document
    pub fn add_translations(&mut self, lang_code: &str, content: &str) -> Result<()> {
        let translations: Value = serde_json::from_str(content)?;

        if let Value::Object(map) = translations {
            debug!("Loaded {} top-level translation keys for {}", map.len(), lang_code);
            self.translations.insert(lang_code.to_string(), map);
            Ok(())
        } else {
            Err(HealthBuddyError::Config(
                format!("Invalid translation file format for {}", lang_code)
            ))
        }
    }

    /// Get a translated message
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.get_effective_language(lang);

        let text = self
            .get_translation_value(key, &effective_lang)
            .or_else(|| self.get_translation_value(key, &self.default_language));

        match text {
            Some(text) => self.format_message(&text, params),
            None => {
                warn!("Translation key '{}' not found in any language", key);
                key.to_string()
            }
        }
    }

    /// Translate with `name=value` pairs as parameters
    pub fn tf(&self, key: &str, lang: &str, params: &[(&str, String)]) -> String {
        let params: TranslationParams = params
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        self.t(key, lang, Some(&params))
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    /// Get the effective language (fallback to default if not supported)
    fn get_effective_language(&self, lang: &str) -> String {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang.to_string()
        } else {
            self.default_language.clone()
        }
    }

    /// Get translation text from nested JSON structure, e.g. "commands.start.welcome"
    fn get_translation_value(&self, key: &str, lang: &str) -> Option<String> {
        let mut current = self.translations.get(lang)?.get(key.split('.').next()?)?;

        for k in key.split('.').skip(1) {
            current = current.get(k)?;
        }

        current.as_str().map(str::to_string)
    }

    /// Format message with parameters
    fn format_message(&self, template: &str, params: Option<&TranslationParams>) -> String {
        if let Some(params) = params {
            let mut result = template.to_string();
            for (key, value) in params {
                let placeholder = format!("{{{}}}", key);
                result = result.replace(&placeholder, value);
            }
            result
        } else {
            template.to_string()
        }
    }

    /// Get default language
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Detect user language from Telegram language code
    pub fn detect_user_language(&self, telegram_lang: Option<&str>) -> String {
        if let Some(lang) = telegram_lang {
            // Extract language code from locale (e.g., "en-US" -> "en")
            let lang_code = lang.split('-').next().unwrap_or(lang);

            if self.is_language_supported(lang_code) {
                return lang_code.to_string();
            }
        }

        self.default_language.clone()
    }
}
