//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use serbisyo_app::ports::ProviderDirectory;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API under `/api` and a plain-text health probe at
/// `/health`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<D>(state: AppState<D>) -> Router
where
    D: ProviderDirectory + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serbisyo_app::services::catalog_service::CatalogService;
    use serbisyo_app::services::provider_service::ProviderService;
    use serbisyo_domain::error::SerbisyoError;
    use serbisyo_domain::id::ProviderId;
    use serbisyo_domain::provider::Provider;
    use tower::ServiceExt;

    use super::*;

    struct StubDirectory;

    impl ProviderDirectory for StubDirectory {
        async fn all(&self) -> Result<Vec<Provider>, SerbisyoError> {
            Ok(vec![])
        }
        async fn find_by_category(&self, _category: &str) -> Result<Vec<Provider>, SerbisyoError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: ProviderId) -> Result<Option<Provider>, SerbisyoError> {
            Ok(None)
        }
    }

    fn test_state() -> AppState<StubDirectory> {
        AppState::new(CatalogService::new(), ProviderService::new(StubDirectory))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_the_catalog_under_api() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_malformed_provider_id() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/providers/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_malformed_origin() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/providers/nearby?origin=not,coords")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
