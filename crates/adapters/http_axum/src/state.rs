//! Shared application state for axum handlers.

use std::sync::Arc;

use serbisyo_app::ports::ProviderDirectory;
use serbisyo_app::services::catalog_service::CatalogService;
use serbisyo_app::services::provider_service::ProviderService;

/// Application state shared across all axum handlers.
///
/// Generic over the directory type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the directory itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<D> {
    /// Catalog queries over the built-in service table.
    pub catalog_service: Arc<CatalogService>,
    /// Provider directory queries and distance annotation.
    pub provider_service: Arc<ProviderService<D>>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
            provider_service: Arc::clone(&self.provider_service),
        }
    }
}

impl<D> AppState<D>
where
    D: ProviderDirectory + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(catalog_service: CatalogService, provider_service: ProviderService<D>) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            provider_service: Arc::new(provider_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when services need to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arcs(
        catalog_service: Arc<CatalogService>,
        provider_service: Arc<ProviderService<D>>,
    ) -> Self {
        Self {
            catalog_service,
            provider_service,
        }
    }
}
