//! End-to-end smoke tests for the full serbisyod stack.
//!
//! Each test spins up the complete application (seed directory, real
//! services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serbisyo_adapter_directory_seed::SeedProviderDirectory;
use serbisyo_adapter_http_axum::router;
use serbisyo_adapter_http_axum::state::AppState;
use serbisyo_app::services::catalog_service::CatalogService;
use serbisyo_app::services::provider_service::ProviderService;
use tower::ServiceExt;

/// Build a fully-wired router backed by the built-in seed roster.
fn app() -> axum::Router {
    let state = AppState::new(
        CatalogService::new(),
        ProviderService::new(SeedProviderDirectory::default()),
    );
    router::build(state)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: service catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_the_full_catalog() {
    let (status, body) = get(app(), "/api/services").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 24);
}

#[tokio::test]
async fn should_search_the_catalog() {
    let (status, body) = get(app(), "/api/services/search?q=aircon%20clean").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "aircon-cleaning");
    assert_eq!(results[0]["category_route"], "AirconServices");
}

#[tokio::test]
async fn should_search_with_filipino_keywords() {
    let (status, body) = get(app(), "/api/services/search?q=tubero").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], "leak-repair");
}

#[tokio::test]
async fn should_return_empty_results_without_a_query() {
    let (status, body) = get(app(), "/api/services/search").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));

    let (status, body) = get(app(), "/api/services/search?q=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_get_service_by_id() {
    let (status, body) = get(app(), "/api/services/leak-repair").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Leak Repair");
    assert_eq!(body["category"], "Plumbing");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_service() {
    let (status, body) = get(app(), "/api/services/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Service does-not-exist not found");
}

#[tokio::test]
async fn should_list_categories_in_catalog_order() {
    let (status, body) = get(app(), "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([
            "Electrical",
            "Plumbing",
            "Aircon",
            "Cleaning",
            "Carpentry",
            "Appliance Repair",
            "Pest Control",
            "Painting",
        ])
    );
}

#[tokio::test]
async fn should_list_services_for_a_category() {
    let (status, body) = get(app(), "/api/categories/Plumbing/services").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    // Category labels match case-insensitively.
    let (status, body) = get(app(), "/api/categories/PLUMBING/services").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

// ---------------------------------------------------------------------------
// API: provider discovery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_seeded_providers() {
    let (status, body) = get(app(), "/api/providers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn should_get_provider_by_id() {
    let app = app();

    let (status, body) = get(app.clone(), "/api/providers").await;
    assert_eq!(status, StatusCode::OK);
    let first = &body.as_array().unwrap()[0];
    let id = first["id"].as_str().unwrap().to_string();
    let name = first["name"].clone();

    let (status, body) = get(app, &format!("/api/providers/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], name);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_provider() {
    let (status, body) = get(
        app(),
        "/api/providers/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Provider 00000000")
    );
}

#[tokio::test]
async fn should_reject_malformed_provider_id() {
    let (status, body) = get(app(), "/api/providers/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "malformed provider id");
}

#[tokio::test]
async fn should_sort_nearby_providers_by_distance() {
    // Origin sits exactly on the Mandaluyong aircon crew.
    let (status, body) = get(
        app(),
        "/api/providers/nearby?category=Aircon&origin=14.5794,121.0359",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["provider"]["name"], "ChillPro Aircon Care");
    assert_eq!(results[0]["distance_label"], "0 m");
    assert_eq!(results[1]["provider"]["name"], "North Breeze Aircon");
    assert!(results[1]["distance_km"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn should_put_unlocated_providers_last() {
    let (status, body) = get(app(), "/api/providers/nearby?origin=14.5995,120.9842").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 12);

    // Known distances come back ascending.
    let distances: Vec<f64> = results
        .iter()
        .filter_map(|entry| entry["distance_km"].as_f64())
        .collect();
    assert_eq!(distances.len(), 11);
    assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));

    // The only provider without coordinates closes the list.
    let last = &results[11];
    assert_eq!(last["provider"]["name"], "Pinta Perfect");
    assert!(last["distance_km"].is_null());
    assert!(last["distance_label"].is_null());
}

#[tokio::test]
async fn should_reject_malformed_origin() {
    let (status, body) = get(app(), "/api/providers/nearby?origin=not,coords").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "malformed coordinates, expected \"lat,lng\"");
}

#[tokio::test]
async fn should_treat_blank_origin_as_absent() {
    let (status, body) = get(app(), "/api/providers/nearby?category=Painting&origin=").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["provider"]["name"], "Pinta Perfect");
    assert!(results[0]["distance_km"].is_null());
}
