//! Internationalization module
//!
//! Reply texts live in `translations/<lang>.json`. Russian is the default and
//! holds the bot's own wording; English is provided as well.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
