use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Not ready while the configured provider is missing a url or secret;
/// submissions would only fail.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    let provider = app.forwarder.kind().to_string();

    if app.forwarder.is_configured() {
        return (
            StatusCode::OK,
            Json(json!({"status": "ready", "provider": provider})),
        );
    }

    tracing::warn!(provider = %provider, "Readiness check failed: provider not configured");

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "not_ready",
            "provider": provider,
            "reason": "provider_not_configured"
        })),
    )
}
