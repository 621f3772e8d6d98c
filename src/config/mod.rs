//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config`
//! and `dotenvy` crates. Values come from an optional `conjoint.{toml,yaml,json}`
//! file in the working directory, overridden by environment variables with the
//! `CONJOINT_SHERPA` prefix. Nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use conjoint_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Search iterations: {}", config.search.iterations);
//! ```

mod error;
mod logging;
mod output;
mod search;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;
pub use search::{SearchConfig, MAX_ITERATIONS};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Design search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default output locations
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `conjoint.toml`, `conjoint.yaml` or `conjoint.json` if present
    /// 3. Reads environment variables with `CONJOINT_SHERPA` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONJOINT_SHERPA__SEARCH__ITERATIONS=500` -> `search.iterations = 500`
    /// - `CONJOINT_SHERPA__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("conjoint").required(false))
            .add_source(
                config::Environment::default()
                    .prefix("CONJOINT_SHERPA")
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
        self.search.validate()?;
        self.logging.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("CONJOINT_SHERPA__SEARCH__ITERATIONS");
        env::remove_var("CONJOINT_SHERPA__LOGGING__LEVEL");
        env::remove_var("CONJOINT_SHERPA__LOGGING__FORMAT");
        env::remove_var("CONJOINT_SHERPA__OUTPUT__ANALYSIS_DIR");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.search.iterations, 1000);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONJOINT_SHERPA__SEARCH__ITERATIONS", "250");
        env::set_var("CONJOINT_SHERPA__LOGGING__FORMAT", "json");
        env::set_var("CONJOINT_SHERPA__OUTPUT__ANALYSIS_DIR", "results");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.search.iterations, 250);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.output.analysis_dir, PathBuf::from("results"));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONJOINT_SHERPA__SEARCH__ITERATIONS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidIterations { actual: 0, .. })
        ));
    }

    #[test]
    fn test_unparseable_value_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONJOINT_SHERPA__SEARCH__ITERATIONS", "many");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
