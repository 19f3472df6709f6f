//! Health check handlers.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the catalog file can be loaded before returning OK.
/// Returns 503 Service Unavailable if it cannot.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().is_readable().await {
        StatusCode::OK
    } else {
        tracing::warn!(path = %state.catalog().path().display(), "Catalog not readable");
        StatusCode::SERVICE_UNAVAILABLE
    }
}
