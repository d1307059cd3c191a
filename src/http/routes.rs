//! HTTP routing configuration for all API endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::handlers::*;
use crate::http::state::AppState;

/// Build the Axum router with all API endpoints.
///
/// The route table is constructed once at startup and passed by value into
/// the serving loop; nothing registers routes at request time.
///
/// # Parameters
///
/// - `state` - Application state containing the provider and account stores
///
/// # Returns
///
/// Returns configured Axum `Router` with all directory and auth endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        // Provider directory API
        .route("/api/provider/all", get(all_providers))
        .route("/api/provider/{partner_id}", get(provider_details))
        .route("/api/provider/city/{city}", get(providers_by_city))
        // Auth API. The method fallback keeps a GET on the register path at
        // 404 rather than axum's default 405.
        .route("/api/auth/register", post(register).fallback(route_not_found))
        .fallback(route_not_found)
        .with_state(state)
}
