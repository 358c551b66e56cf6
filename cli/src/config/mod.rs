//! Configuration management for the calculator CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (`--config` path, or config/development.toml / config/production.toml)
//! 3. Environment variables (prefix: CALC__)

use std::env;
use std::path::Path;

use anyhow::Result;
use calorie_calculator_shared::{InputPolicy, Locale, ProfileForm};
use serde::{Deserialize, Serialize};

use crate::render::OutputFormat;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Form values used for any field not given on the command line
    #[serde(default)]
    pub profile: ProfileForm,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Calculation and output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub policy: InputPolicy,
    pub locale: Locale,
    pub format: OutputFormat,
    /// Print BMR/TDEE intermediate values
    pub show_breakdown: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive when RUST_LOG is unset
    pub filter: String,
    /// Emit JSON log lines instead of pretty output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "calorie_calculator_cli=warn,calorie_calculator_shared=warn".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. `path` if given, otherwise a config file based on RUST_ENV
    /// 3. Environment variables with CALC__ prefix
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file_source = match path {
            Some(path) => config::File::from(path).required(true),
            None => {
                let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
                config::File::with_name(&format!("config/{}", env)).required(false)
            }
        };

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(file_source)
            // e.g., CALC__CALCULATOR__LOCALE=en sets calculator.locale
            .add_source(config::Environment::with_prefix("CALC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
