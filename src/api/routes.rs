/*
 * Responsibility
 * - URL layout under /api
 * - /health, /weather, /alerts (all GET)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{alerts::get_alerts, health::health, weather::get_weather};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(get_weather))
        .route("/alerts", get(get_alerts))
}
