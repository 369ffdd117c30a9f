//! Configuration management for the Shelfmark core

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::models::policy::DEFAULT_LOAN_PERIOD_DAYS;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Catalog file, one JSON object keyed by title
    pub data_file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoanConfig {
    pub period_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Refuse to delete titles currently out on loan
    pub protect_borrowed: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub loan: LoanConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Pick up a .env file before reading the environment
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix SHELFMARK_)
            .add_source(environment_source())
            // Override catalog path from LIBRARY_DATA_FILE env var if present
            .set_override_option("storage.data_file", env::var("LIBRARY_DATA_FILE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

/// Environment overrides, `__` between section and key:
/// `SHELFMARK_LOAN__PERIOD_DAYS` targets `loan.period_days`.
fn environment_source() -> Environment {
    Environment::with_prefix("SHELFMARK")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("library_data.json"),
        }
    }
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            period_days: DEFAULT_LOAN_PERIOD_DAYS,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            protect_borrowed: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
