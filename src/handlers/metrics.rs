use crate::services::render_metrics;
use axum::{http::StatusCode, response::IntoResponse};

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        render_metrics(),
    )
}
