//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRIPSPLIT_` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use tripsplit::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod gate;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use gate::GateConfig;

use serde::Deserialize;

/// Root application configuration
///
/// All sections have usable defaults; an empty environment yields a
/// working (AI-less, "admin"-gated) setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini configuration (receipt scanning, advice)
    #[serde(default)]
    pub ai: AiConfig,

    /// Administrative gate configuration
    #[serde(default)]
    pub gate: GateConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `TRIPSPLIT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `TRIPSPLIT__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `TRIPSPLIT__GATE__ADMIN_PASSWORD=...` -> `gate.admin_password = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRIPSPLIT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.gate.validate()?;
        Ok(())
    }
}
