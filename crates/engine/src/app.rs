//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    bounded_catalog::BoundedCatalog, config::AppConfig, pokeapi::PokeApiClient,
    ports::CatalogPort,
};
use crate::use_cases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub config: AppConfig,
    pub catalog: Arc<dyn CatalogPort>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: use_cases::CatalogUseCases,
}

impl App {
    /// Create a new App backed by the PokeAPI client.
    ///
    /// Every catalog call is bounded by the configured request timeout.
    pub fn new(config: AppConfig) -> Self {
        let client = Arc::new(PokeApiClient::new(
            &config.catalog.base_url,
            config.catalog.request_timeout,
        ));
        Self::with_catalog(config, client)
    }

    /// Create an App around any catalog implementation.
    pub fn with_catalog(config: AppConfig, catalog: Arc<dyn CatalogPort>) -> Self {
        let catalog: Arc<dyn CatalogPort> = Arc::new(BoundedCatalog::new(
            catalog,
            config.catalog.request_timeout,
        ));
        let use_cases = UseCases {
            catalog: use_cases::CatalogUseCases::new(catalog.clone(), &config.catalog),
        };
        Self {
            config,
            catalog,
            use_cases,
        }
    }
}
