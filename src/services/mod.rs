//! Business logic services

pub mod catalog;
pub mod settings;
pub mod stats;

use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};

use crate::{config::AppConfig, models::LoanPolicy, repository::BookRepository};

/// Shared, runtime-adjustable loan policy handle
pub type SharedLoanPolicy = Arc<RwLock<LoanPolicy>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub stats: stats::StatsService,
    pub settings: settings::SettingsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: BookRepository, config: &AppConfig) -> Self {
        let policy: SharedLoanPolicy =
            Arc::new(RwLock::new(LoanPolicy::new(config.loan.period_days)));
        Self {
            catalog: catalog::CatalogService::new(
                repository.clone(),
                Arc::clone(&policy),
                config.catalog.protect_borrowed,
            ),
            stats: stats::StatsService::new(repository),
            settings: settings::SettingsService::new(policy),
        }
    }
}

/// Current calendar date, UTC. All date arithmetic in the services runs
/// against this clock.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
