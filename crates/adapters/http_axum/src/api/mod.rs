//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod providers;
// Handlers must be `async` for axum even though the catalog is synchronous.
#[allow(clippy::missing_errors_doc, clippy::unused_async)]
pub mod services;

use axum::Router;
use axum::routing::get;

use serbisyo_app::ports::ProviderDirectory;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: ProviderDirectory + 'static,
{
    Router::new()
        // Catalog
        .route("/services", get(services::list::<D>))
        .route("/services/search", get(services::search::<D>))
        .route("/services/{id}", get(services::get::<D>))
        .route("/categories", get(services::categories::<D>))
        .route(
            "/categories/{category}/services",
            get(services::in_category::<D>),
        )
        // Providers
        .route("/providers", get(providers::list::<D>))
        .route("/providers/nearby", get(providers::nearby::<D>))
        .route("/providers/{id}", get(providers::get::<D>))
}
