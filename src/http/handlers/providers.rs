//! Provider directory lookup handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::http::state::AppState;

/// List all providers in the directory.
///
/// # Parameters
///
/// - `state` - Application state containing the provider store
///
/// # Returns
///
/// Returns all provider records as a JSON array; an empty directory yields
/// an empty array, not a 404.
pub async fn all_providers(State(state): State<AppState>) -> impl IntoResponse {
    let providers = state.directory.all();
    (StatusCode::OK, Json(providers))
}

/// Look up a single provider by partner id.
///
/// # Parameters
///
/// - `state` - Application state containing the provider store
/// - `partner_id` - Partner id bound from the path
///
/// # Returns
///
/// Returns the provider record, or 404 if no provider is registered under
/// the id.
pub async fn provider_details(
    State(state): State<AppState>,
    Path(partner_id): Path<String>,
) -> impl IntoResponse {
    match state.directory.find_by_partner_id(&partner_id) {
        Some(provider) => (StatusCode::OK, Json(provider)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(format!("No provider found for partner id {partner_id}.")),
        )
            .into_response(),
    }
}

/// Look up providers serving a city.
///
/// # Parameters
///
/// - `state` - Application state containing the provider store
/// - `city` - City name bound from the path, matched case-insensitively
///
/// # Returns
///
/// Returns a non-empty array of providers, or 404 if no provider serves the
/// city.
pub async fn providers_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> impl IntoResponse {
    let providers = state.directory.find_by_city(&city);
    if providers.is_empty() {
        return (StatusCode::NOT_FOUND, Json(format!("No providers found in {city}.")))
            .into_response();
    }

    (StatusCode::OK, Json(providers)).into_response()
}
