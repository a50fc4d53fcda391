/*
 * Responsibility
 * - GET /api/alerts
 * - fetch → evaluate, return the verdict together with the record it was computed from
 */
use axum::{Json, extract::State};

use crate::{api::dto::alerts::AlertResponse, error::AppError, state::AppState};

pub async fn get_alerts(State(state): State<AppState>) -> Result<Json<AlertResponse>, AppError> {
    let record = state.weather.fetch().await?;
    let alert = state.detector.evaluate(&record)?;

    if alert.alert {
        tracing::warn!(
            severity = ?alert.severity,
            reasons = alert.reasons.len(),
            location = record.location.as_deref().unwrap_or("-"),
            "weather anomaly detected"
        );
    }

    Ok(Json(AlertResponse {
        alert,
        data: record,
    }))
}
