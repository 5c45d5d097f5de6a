//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMMERCE_INTEGRATIONS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use commerce_integrations::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Log level: {}", config.logging.level);
//! ```

mod cost_of_goods;
mod error;
mod features;
mod logging;

pub use cost_of_goods::CostOfGoodsConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Cost-of-goods provider selection
    #[serde(default)]
    pub cost_of_goods: CostOfGoodsConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMMERCE_INTEGRATIONS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits `cost_of_goods.disabled_providers` on commas
    ///
    /// # Environment Variable Format
    ///
    /// - `COMMERCE_INTEGRATIONS__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `COMMERCE_INTEGRATIONS__COST_OF_GOODS__DISABLED_PROVIDERS=WPFactory,SkyVerge`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMMERCE_INTEGRATIONS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cost_of_goods.disabled_providers")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// [`Self::load`] followed by [`Self::validate`].
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.cost_of_goods.validate()?;
        Ok(())
    }
}
