//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_PRIORITIZER` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_prioritizer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading complaints from {}", config.io.input_path);
//! ```

mod analysis;
mod error;
mod io;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use io::IoConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults, so a plain local run needs no
/// environment at all. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analysis tuning (consistency threshold, top-N, strict judgments)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// File locations for input, export, and report
    #[serde(default)]
    pub io: IoConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `AHP_PRIORITIZER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_PRIORITIZER__IO__INPUT_PATH=...` -> `io.input_path = ...`
    /// - `AHP_PRIORITIZER__ANALYSIS__TOP_N=20` -> `analysis.top_n = 20`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_PRIORITIZER")
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
        self.analysis.validate()?;
        self.io.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("AHP_PRIORITIZER__ANALYSIS__TOP_N");
        env::remove_var("AHP_PRIORITIZER__ANALYSIS__CONSISTENCY_THRESHOLD");
        env::remove_var("AHP_PRIORITIZER__IO__INPUT_PATH");
    }

    #[test]
    fn test_load_with_no_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.analysis.top_n, 10);
        assert_eq!(config.analysis.consistency_threshold, 0.1);
        assert!(!config.analysis.strict_judgments);
        assert_eq!(config.io.input_path, "data/complaints.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_PRIORITIZER__ANALYSIS__TOP_N", "25");
        env::set_var("AHP_PRIORITIZER__IO__INPUT_PATH", "/tmp/batch.json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.top_n, 25);
        assert_eq!(config.io.input_path, "/tmp/batch.json");
    }
}
