//! Shelfmark Library Management Core
//!
//! The data and reporting core of the Shelfmark book tracker: a
//! title-keyed catalog with borrowing, returns, search, statistics and
//! whole-file JSON persistence. A presentation layer opens a [`Library`]
//! once at startup and drives everything through its services.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorCode, ErrorReport};

use repository::{BookRepository, CatalogStore, JsonFileStore};

/// Handle to the loaded catalog, shared with the presentation layer
#[derive(Clone)]
pub struct Library {
    pub config: Arc<AppConfig>,
    pub services: services::Services,
}

impl Library {
    /// Open the catalog file named by the configuration
    pub fn open(config: AppConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.storage.data_file.clone()));
        Self::with_store(config, store)
    }

    /// Open over a custom store implementation
    pub fn with_store(config: AppConfig, store: Arc<dyn CatalogStore>) -> Self {
        let repository = BookRepository::load(store);
        tracing::info!("Catalog loaded: {} title(s)", repository.len());
        let services = services::Services::new(repository, &config);
        Self {
            config: Arc::new(config),
            services,
        }
    }
}
