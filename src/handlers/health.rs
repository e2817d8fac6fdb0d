use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Static by contract: it reports the process is up, not that
/// the database is reachable.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "service": "song-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe; pings the database.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
