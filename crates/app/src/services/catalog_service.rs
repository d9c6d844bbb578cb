//! Catalog service — use-cases for browsing the service catalog.

use serbisyo_domain::catalog::{self, ServiceItem};
use serbisyo_domain::error::{NotFoundError, SerbisyoError};

/// Use-cases over the built-in service catalog.
///
/// The catalog is static data, so every method here is synchronous and the
/// service itself carries no state. It still exists as a type so inbound
/// adapters depend on a service, not on the domain crate directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogService;

impl CatalogService {
    /// Create a new service over the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The full catalog in presentation order.
    #[must_use]
    pub fn list_services(&self) -> &'static [ServiceItem] {
        catalog::all()
    }

    /// Free-text search; a blank query yields no results.
    #[tracing::instrument(skip(self))]
    #[must_use]
    pub fn search_services(&self, query: &str) -> Vec<&'static ServiceItem> {
        catalog::search(query)
    }

    /// Distinct category labels in presentation order.
    #[must_use]
    pub fn list_categories(&self) -> Vec<&'static str> {
        catalog::all_categories()
    }

    /// Every service in the given category.
    #[must_use]
    pub fn services_in_category(&self, category: &str) -> Vec<&'static ServiceItem> {
        catalog::find_by_category(category)
    }

    /// Look up one service by id.
    ///
    /// # Errors
    ///
    /// Returns [`SerbisyoError::NotFound`] when no catalog entry has the
    /// given id.
    pub fn get_service(&self, id: &str) -> Result<&'static ServiceItem, SerbisyoError> {
        catalog::find_by_id(id).ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }
}
