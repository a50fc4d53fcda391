/*
 * Responsibility
 * - GET /api/health (liveness only)
 * - never touches the upstream weather source
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
