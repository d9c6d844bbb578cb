//! JSON handlers for provider discovery.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use serbisyo_app::ports::ProviderDirectory;
use serbisyo_domain::error::{SerbisyoError, ValidationError};
use serbisyo_domain::geo::Coordinates;
use serbisyo_domain::id::ProviderId;
use serbisyo_domain::provider::{NearbyProvider, Provider};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for the nearby endpoint.
#[derive(Deserialize)]
pub struct NearbyQuery {
    /// Restrict results to one catalog category.
    pub category: Option<String>,
    /// Search origin as `"lat,lng"`. Blank counts as absent; anything else
    /// that fails to parse is rejected.
    pub origin: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Provider>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Provider>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the nearby endpoint.
pub enum NearbyResponse {
    Ok(Json<Vec<NearbyProvider>>),
}

impl IntoResponse for NearbyResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/providers`
pub async fn list<D>(State(state): State<AppState<D>>) -> Result<ListResponse, ApiError>
where
    D: ProviderDirectory + 'static,
{
    let providers = state.provider_service.list_providers().await?;
    Ok(ListResponse::Ok(Json(providers)))
}

/// `GET /api/providers/:id`
pub async fn get<D>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    D: ProviderDirectory + 'static,
{
    let provider_id = ProviderId::from_str(&id).map_err(|_| {
        ApiError::from(SerbisyoError::Validation(
            ValidationError::MalformedProviderId,
        ))
    })?;
    let provider = state.provider_service.get_provider(provider_id).await?;
    Ok(GetResponse::Ok(Json(provider)))
}

/// `GET /api/providers/nearby?category=...&origin=lat,lng`
pub async fn nearby<D>(
    State(state): State<AppState<D>>,
    Query(query): Query<NearbyQuery>,
) -> Result<NearbyResponse, ApiError>
where
    D: ProviderDirectory + 'static,
{
    let origin = match query.origin.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(Coordinates::parse(raw).ok_or_else(|| {
            ApiError::from(SerbisyoError::Validation(
                ValidationError::MalformedCoordinates,
            ))
        })?),
    };

    let nearby = state
        .provider_service
        .find_nearby(query.category.as_deref(), origin)
        .await?;
    Ok(NearbyResponse::Ok(Json(nearby)))
}
