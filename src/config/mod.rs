//! Application configuration module
//!
//! Settings come from the process environment (plus an optional `.env`
//! file) under the `SHOP_ASSISTANT` prefix. Section and key are joined
//! with `__`. Nothing is required: an empty environment yields defaults.
//!
//! # Example
//!
//! ```no_run
//! use shop_assistant::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Cheap means under {}", config.assistant.cheap_price_threshold);
//! ```

mod assistant;
mod error;
mod logging;

pub use assistant::AssistantConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section is defaulted, so an empty environment loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rule engine tunables
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read settings from the environment
    ///
    /// - `SHOP_ASSISTANT__ASSISTANT__CHEAP_PRICE_THRESHOLD=1200`
    /// - `SHOP_ASSISTANT__LOGGING__FORMAT=json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` when a value has the wrong type
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is normal outside development
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SHOP_ASSISTANT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Check semantic constraints that deserialization cannot express
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.assistant.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
