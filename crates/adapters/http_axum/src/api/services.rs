//! JSON handlers for the service catalog.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use serbisyo_app::ports::ProviderDirectory;
use serbisyo_domain::catalog::ServiceItem;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for the search endpoint.
#[derive(Deserialize)]
pub struct SearchQuery {
    /// Free-text query; absent and blank both yield an empty result set.
    #[serde(default)]
    pub q: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<&'static [ServiceItem]>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the search and per-category endpoints.
pub enum SearchResponse {
    Ok(Json<Vec<&'static ServiceItem>>),
}

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<&'static ServiceItem>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the categories endpoint.
pub enum CategoriesResponse {
    Ok(Json<Vec<&'static str>>),
}

impl IntoResponse for CategoriesResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services`
pub async fn list<D>(State(state): State<AppState<D>>) -> ListResponse
where
    D: ProviderDirectory + 'static,
{
    ListResponse::Ok(Json(state.catalog_service.list_services()))
}

/// `GET /api/services/search?q=...`
pub async fn search<D>(
    State(state): State<AppState<D>>,
    Query(query): Query<SearchQuery>,
) -> SearchResponse
where
    D: ProviderDirectory + 'static,
{
    SearchResponse::Ok(Json(state.catalog_service.search_services(&query.q)))
}

/// `GET /api/services/:id`
pub async fn get<D>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    D: ProviderDirectory + 'static,
{
    let item = state.catalog_service.get_service(&id)?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `GET /api/categories`
pub async fn categories<D>(State(state): State<AppState<D>>) -> CategoriesResponse
where
    D: ProviderDirectory + 'static,
{
    CategoriesResponse::Ok(Json(state.catalog_service.list_categories()))
}

/// `GET /api/categories/:category/services`
pub async fn in_category<D>(
    State(state): State<AppState<D>>,
    Path(category): Path<String>,
) -> SearchResponse
where
    D: ProviderDirectory + 'static,
{
    SearchResponse::Ok(Json(state.catalog_service.services_in_category(&category)))
}
